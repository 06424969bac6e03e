//! # memora
//!
//! A single-player memory-matching (concentration) game core: a grid of
//! face-down cards is revealed two at a time; matching a component's
//! schematic symbol with its written name scores a pair; mismatches
//! flip back after a delay.
//!
//! ## Design Principles
//!
//! 1. **Platform-Agnostic**: The core consumes input events, reads a
//!    monotonic clock, and draws through traits. Windowing, asset
//!    decoding, fonts, and frame pacing belong to the embedding binary.
//!
//! 2. **Single-Threaded**: One loop thread owns all state. The mismatch
//!    delay is polled against a deadline each frame - no timers, no
//!    background threads, nothing to cancel.
//!
//! 3. **No Globals**: The scene controller owns the current scene, the
//!    active session, the language selector, and the RNG; mutation goes
//!    through its entry points.
//!
//! 4. **Derived Truth**: Win detection counts the pairs that actually
//!    exist on the generated board, never a parallel constant.
//!
//! ## Modules
//!
//! - `core`: geometry, RNG, configuration, errors
//! - `cards`: card model, component catalog, grid generation
//! - `session`: the click/match/mismatch state machine
//! - `scene`: menu/playing/won controller, buttons, intents
//! - `i18n`: language selector and localized string table
//! - `platform`: traits the rendering/input platform implements
//! - `render`: read-only draw pass over game state
//! - `app`: per-frame driver (events -> update -> draw)

pub mod app;
pub mod cards;
pub mod core;
pub mod i18n;
pub mod platform;
pub mod render;
pub mod scene;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, MissingResource, Point, Rect};

pub use crate::cards::{Card, CardKind, ComponentCatalog, GridLayout, PairId};

pub use crate::session::{ClickOutcome, GameSession};

pub use crate::scene::{
    Button, Directive, Intent, Label, MainMenu, Scene, SceneController, WinScreen,
};

pub use crate::i18n::{Language, Strings};

pub use crate::platform::{
    palette, Anchor, Clock, Color, InputEvent, MonotonicClock, PointerButton, Renderer, TextStyle,
};

pub use crate::render::RenderPass;

pub use crate::app::App;
