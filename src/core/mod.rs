//! Core types: geometry, RNG, configuration, errors.
//!
//! These are the building blocks the rest of the crate composes.
//! Nothing here knows about cards, scenes, or rendering.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, MissingResource};
pub use geometry::{Point, Rect};
pub use rng::GameRng;
