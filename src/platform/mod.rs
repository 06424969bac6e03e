//! Interfaces to the external rendering/input platform.
//!
//! The core is platform-agnostic: it consumes [`InputEvent`]s, reads a
//! [`Clock`], and draws through the [`Renderer`] trait. The embedding
//! binary owns the window, asset decoding, font rasterization, and
//! frame pacing (target rate in `GameConfig::target_fps`).
//!
//! No network, file-format, or CLI surface exists here.

pub mod clock;
pub mod draw;
pub mod input;

pub use clock::{Clock, MonotonicClock};
pub use draw::{palette, Anchor, Color, Renderer, TextStyle};
pub use input::{InputEvent, PointerButton};
