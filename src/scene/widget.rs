//! Scene widgets: buttons and text labels.
//!
//! Widgets are plain data. They store a text *key*, not text: labels
//! are resolved against the controller-owned string table at draw
//! time, which is what makes a language toggle take effect for every
//! scene within the same frame.

use crate::core::geometry::{Point, Rect};
use crate::platform::draw::{Anchor, Color};
use crate::scene::intent::Intent;

/// A clickable button carrying an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub rect: Rect,
    /// Key into the string table, resolved at draw time.
    pub text_key: &'static str,
    pub intent: Intent,
}

impl Button {
    /// Create a new button.
    #[must_use]
    pub const fn new(rect: Rect, text_key: &'static str, intent: Intent) -> Self {
        Self {
            rect,
            text_key,
            intent,
        }
    }

    /// Does a click at `point` land on this button?
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// A static text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub anchor: Anchor,
    /// Key into the string table, resolved at draw time.
    pub text_key: &'static str,
    pub size_px: u32,
    pub color: Color,
}

impl Label {
    /// Create a new label.
    #[must_use]
    pub const fn new(
        x: i32,
        y: i32,
        anchor: Anchor,
        text_key: &'static str,
        size_px: u32,
        color: Color,
    ) -> Self {
        Self {
            x,
            y,
            anchor,
            text_key,
            size_px,
            color,
        }
    }
}
