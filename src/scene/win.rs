//! Win overlay scene.
//!
//! Drawn on top of the retained, finished board: a translucent dim
//! layer, the win title, and a horizontal row of buttons.

use crate::core::config::GameConfig;
use crate::core::geometry::{Point, Rect};
use crate::platform::draw::{palette, Anchor};
use crate::scene::intent::Intent;
use crate::scene::widget::{Button, Label};

/// Opacity of the dim layer under the win widgets.
pub const OVERLAY_ALPHA: u8 = 180;

/// The win screen overlay.
#[derive(Clone, Debug)]
pub struct WinScreen {
    pub title: Label,
    pub buttons: Vec<Button>,
}

impl WinScreen {
    /// Lay out the win screen for a screen size.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let center_x = config.screen_width / 2;

        let title = Label::new(center_x, 250, Anchor::Center, "win", 80, palette::GREEN);

        let buttons = vec![
            Button::new(
                Rect::new(center_x - 220, 400, 130, 50),
                "restart",
                Intent::Restart,
            ),
            Button::new(
                Rect::new(center_x - 70, 400, 140, 50),
                "main_menu",
                Intent::ToMenu,
            ),
            Button::new(
                Rect::new(center_x + 90, 400, 130, 50),
                "exit",
                Intent::Exit,
            ),
        ];

        Self { title, buttons }
    }

    /// The intent of the button at `point`, if any.
    #[must_use]
    pub fn intent_at(&self, point: Point) -> Option<Intent> {
        self.buttons
            .iter()
            .find(|b| b.contains(point))
            .map(|b| b.intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_buttons_row() {
        let win = WinScreen::new(&GameConfig::default());
        assert_eq!(win.buttons.len(), 3);

        // All in one row
        for button in &win.buttons {
            assert_eq!(button.rect.y, 400);
        }
    }

    #[test]
    fn test_intent_at() {
        let win = WinScreen::new(&GameConfig::default());

        assert_eq!(win.intent_at(Point::new(200, 425)), Some(Intent::Restart));
        assert_eq!(win.intent_at(Point::new(380, 425)), Some(Intent::ToMenu));
        assert_eq!(win.intent_at(Point::new(540, 425)), Some(Intent::Exit));
        assert_eq!(win.intent_at(Point::new(10, 10)), None);
    }
}
