//! Error taxonomy.
//!
//! Only two things can go wrong:
//!
//! - [`ConfigError`]: the grid dimensions and identity pool are
//!   inconsistent. Surfaced at startup, never at runtime.
//! - [`MissingResource`]: an image asset is absent at draw time.
//!   Recovered locally with placeholder text, logged, never fatal.
//!
//! Everything else - clicks outside cards, clicks while the board is
//! locked, unknown text keys - is a silent no-op or identity fallback
//! by contract, not an error.

use thiserror::Error;

/// Startup-time configuration contract violations.
///
/// Returned by grid generation when the configured grid and the
/// component pool cannot produce a valid board. These indicate a
/// programming or packaging mistake and are not recoverable at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rows or columns is zero.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },

    /// The cell count is odd, so cards cannot be paired up.
    #[error("grid {rows}x{cols} has an odd cell count; every card needs a partner")]
    OddCellCount { rows: u32, cols: u32 },

    /// Fewer component identities than the grid needs pairs.
    #[error("grid needs {required} component identities but the pool has {available}")]
    PoolTooSmall { required: usize, available: usize },

    /// The screen area left after gaps and the header cannot fit cards.
    #[error("screen {width}x{height} leaves no room for a {rows}x{cols} grid")]
    ScreenTooSmall {
        width: i32,
        height: i32,
        rows: u32,
        cols: u32,
    },
}

/// An image asset could not be resolved by the platform.
///
/// Returned by [`Renderer::image`](crate::platform::Renderer::image).
/// The render pass substitutes placeholder text and logs a warning once
/// per resource name; gameplay is unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("missing image resource `{name}`")]
pub struct MissingResource {
    /// Logical resource name, e.g. `symbol_3.png`.
    pub name: String,
}

impl MissingResource {
    /// Create a new missing-resource report.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
