//! Localized UI string table.
//!
//! One [`Strings`] instance owns the active [`Language`] and resolves
//! text keys against it. Lookup never fails: an unknown key resolves to
//! itself, so a typo shows up literally on screen instead of crashing
//! or hiding a widget.
//!
//! The table is owned by the scene controller, not a global. Every
//! text-bearing widget resolves its key through the same instance at
//! draw time, so a language toggle is observed by all scenes within the
//! frame it happens in.

use rustc_hash::FxHashMap;

use super::language::Language;

/// `(key, english, spanish)` rows for the UI strings.
const TABLE: &[(&str, &str, &str)] = &[
    ("title", "Electronics Memory Game", "Memorama Electrónico"),
    ("start", "Start Game", "Iniciar Juego"),
    ("language", "Language: EN", "Idioma: ES"),
    ("restart", "Restart", "Reiniciar"),
    ("win", "You Win!", "¡Ganaste!"),
    ("pairs", "Pairs Found: ", "Pares Encontrados: "),
    ("exit", "Exit", "Salir"),
    ("main_menu", "Main Menu", "Menú"),
];

/// Localized string lookup with identity fallback.
#[derive(Clone, Debug)]
pub struct Strings {
    language: Language,
    en: FxHashMap<&'static str, &'static str>,
    es: FxHashMap<&'static str, &'static str>,
}

impl Strings {
    /// Create a table with the default language.
    #[must_use]
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    /// Create a table with an explicit starting language.
    #[must_use]
    pub fn with_language(language: Language) -> Self {
        let mut en = FxHashMap::default();
        let mut es = FxHashMap::default();
        for &(key, text_en, text_es) in TABLE {
            en.insert(key, text_en);
            es.insert(key, text_es);
        }
        Self { language, en, es }
    }

    /// The active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Switch to an explicit language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip between the two languages.
    pub fn toggle(&mut self) {
        self.language = self.language.toggled();
    }

    /// Resolve a key in the active language.
    ///
    /// Unknown keys resolve to the key itself - never an error.
    #[must_use]
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::En => &self.en,
            Language::Es => &self.es,
        };
        table.get(key).copied().unwrap_or(key)
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::new()
    }
}
