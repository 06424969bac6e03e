//! Input events delivered by the platform.
//!
//! The embedding loop translates its native window events into these
//! and hands them to `App::frame` once per frame. The core never polls
//! the platform directly.

use serde::{Deserialize, Serialize};

use crate::core::geometry::Point;

/// Pointer button identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// Left / primary button. The only one the game acts on.
    Primary,
    /// Any other button.
    Secondary,
}

/// One platform input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer button pressed at a screen position.
    PointerDown { pos: Point, button: PointerButton },
    /// Pointer moved. Only used for button hover highlighting.
    PointerMove { pos: Point },
    /// The window asked to close.
    Quit,
}
