//! Card system: card model, component catalog, and grid generation.
//!
//! ## Key Types
//!
//! - `PairId`: identity shared by exactly two cards
//! - `CardKind`: Symbol or Text face (rendering hint only)
//! - `Card`: one grid cell's identity and visibility state
//! - `ComponentCatalog`: the pool of matchable identities
//! - `GridLayout` / `generate`: shuffled, centered board layout

pub mod card;
pub mod catalog;
pub mod grid;

pub use card::{Card, CardKind, PairId};
pub use catalog::ComponentCatalog;
pub use grid::{generate, GridLayout};
