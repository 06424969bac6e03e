//! Scenes: menu, playing, and win, plus the controller that switches
//! between them.
//!
//! ## Key Types
//!
//! - `Intent`: what a button click asks for (commands, not callbacks)
//! - `Button` / `Label`: plain-data widgets holding text keys
//! - `MainMenu` / `WinScreen`: per-scene widget sets
//! - `SceneController`: owns scene state, session, language, and RNG
//! - `Directive`: Continue/Exit signal for the embedding loop

pub mod controller;
pub mod intent;
pub mod menu;
pub mod widget;
pub mod win;

pub use controller::{Directive, Scene, SceneController};
pub use intent::Intent;
pub use menu::MainMenu;
pub use widget::{Button, Label};
pub use win::{WinScreen, OVERLAY_ALPHA};
