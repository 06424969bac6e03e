//! Localization: language selector and UI string table.
//!
//! ## Key Types
//!
//! - `Language`: the process-wide display language (En/Es)
//! - `Strings`: key -> text lookup with identity fallback
//!
//! Card matching never depends on the language; only rendered labels do.

pub mod language;
pub mod strings;

pub use language::Language;
pub use strings::Strings;
