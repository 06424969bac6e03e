//! Main menu scene.

use crate::core::config::GameConfig;
use crate::core::geometry::{Point, Rect};
use crate::platform::draw::{palette, Anchor};
use crate::scene::intent::Intent;
use crate::scene::widget::{Button, Label};

/// The menu: a title and a vertical column of buttons.
#[derive(Clone, Debug)]
pub struct MainMenu {
    pub title: Label,
    pub buttons: Vec<Button>,
}

impl MainMenu {
    /// Lay out the menu for a screen size.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let center_x = config.screen_width / 2;
        let column_x = center_x - 100;

        let title = Label::new(center_x, 150, Anchor::Center, "title", 60, palette::BLACK);

        let buttons = vec![
            Button::new(
                Rect::new(column_x, 250, 200, 50),
                "start",
                Intent::StartGame,
            ),
            Button::new(
                Rect::new(column_x, 320, 200, 50),
                "language",
                Intent::ToggleLanguage,
            ),
            Button::new(Rect::new(column_x, 390, 200, 50), "exit", Intent::Exit),
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
    fn test_menu_buttons() {
        let menu = MainMenu::new(&GameConfig::default());
        assert_eq!(menu.buttons.len(), 3);

        // Column is centered
        for button in &menu.buttons {
            assert_eq!(button.rect.center().x, 400);
        }
    }

    #[test]
    fn test_intent_at() {
        let menu = MainMenu::new(&GameConfig::default());

        assert_eq!(menu.intent_at(Point::new(400, 275)), Some(Intent::StartGame));
        assert_eq!(
            menu.intent_at(Point::new(400, 345)),
            Some(Intent::ToggleLanguage)
        );
        assert_eq!(menu.intent_at(Point::new(400, 415)), Some(Intent::Exit));
        assert_eq!(menu.intent_at(Point::new(400, 100)), None);
    }
}
