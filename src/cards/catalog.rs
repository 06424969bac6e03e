//! Component catalog: the pool of identities cards are built from.
//!
//! Each catalog entry is one matchable identity - an electronic
//! component with a localized display name and a schematic symbol
//! image. The default catalog is the shipped set of ten components;
//! custom catalogs can be assembled with [`ComponentCatalog::push`].

use crate::cards::card::PairId;
use crate::i18n::Language;

/// Localized names for one component.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ComponentNames {
    en: String,
    es: String,
}

/// The identity pool the grid generator draws pairs from.
///
/// ## Example
///
/// ```
/// use memora::cards::ComponentCatalog;
/// use memora::i18n::Language;
///
/// let mut catalog = ComponentCatalog::new();
/// let id = catalog.push("Resistor", "Resistencia");
///
/// assert_eq!(catalog.get(id, Language::En), Some("Resistor"));
/// assert_eq!(ComponentCatalog::symbol_resource(id), "symbol_0.png");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentCatalog {
    components: Vec<ComponentNames>,
}

impl ComponentCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped set of ten electronic components.
    #[must_use]
    pub fn electronics() -> Self {
        let mut catalog = Self::new();
        for (en, es) in [
            ("Resistor", "Resistencia"),
            ("Capacitor", "Capacitor"),
            ("Inductor", "Inductor"),
            ("Diode", "Diodo"),
            ("Transistor", "Transistor"),
            ("LED", "LED"),
            ("Battery", "Batería"),
            ("Switch", "Interruptor"),
            ("Fuse", "Fusible"),
            ("Ground", "Tierra"),
        ] {
            catalog.push(en, es);
        }
        catalog
    }

    /// Add a component and return its pair ID.
    pub fn push(&mut self, en: impl Into<String>, es: impl Into<String>) -> PairId {
        let id = PairId::new(self.components.len() as u16);
        self.components.push(ComponentNames {
            en: en.into(),
            es: es.into(),
        });
        id
    }

    /// Number of identities in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Is the pool empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Display name for a component in the given language.
    #[must_use]
    pub fn get(&self, id: PairId, language: Language) -> Option<&str> {
        let names = self.components.get(id.raw() as usize)?;
        Some(match language {
            Language::En => names.en.as_str(),
            Language::Es => names.es.as_str(),
        })
    }

    /// Logical resource name of a component's symbol image.
    ///
    /// The platform's loader resolves this to pixel data; absence is
    /// non-fatal (the render pass substitutes placeholder text).
    #[must_use]
    pub fn symbol_resource(id: PairId) -> String {
        format!("symbol_{}.png", id.raw())
    }
}
