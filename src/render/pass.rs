//! The per-frame draw pass.
//!
//! Strictly read-only over the game model: it walks the controller's
//! state and issues `Renderer` calls in back-to-front order. The only
//! state it keeps is the set of image resources already reported
//! missing, so each absent asset is logged once, not sixty times a
//! second.

use log::warn;
use rustc_hash::FxHashSet;

use crate::cards::{Card, CardKind, ComponentCatalog};
use crate::core::geometry::Rect;
use crate::i18n::Strings;
use crate::platform::draw::{palette, Anchor, Renderer, TextStyle};
use crate::scene::{Button, Label, Scene, SceneController, OVERLAY_ALPHA};
use crate::session::GameSession;

/// Placeholder shown on a symbol card whose image is absent.
const MISSING_IMAGE_TEXT: &str = "Image Missing";

/// Pixels of card face kept clear around a symbol image.
const SYMBOL_INSET: i32 = 10;

/// Issues draw calls for the active scene.
#[derive(Debug, Default)]
pub struct RenderPass {
    /// Resource names already reported missing.
    missing: FxHashSet<String>,
}

impl RenderPass {
    /// Create a fresh pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one frame of the active scene.
    pub fn draw<R: Renderer>(&mut self, renderer: &mut R, controller: &SceneController) {
        let config = controller.config();
        let screen = Rect::new(0, 0, config.screen_width, config.screen_height);
        renderer.fill_rect(screen, palette::GRAY);

        match controller.scene() {
            Scene::Menu => {
                self.draw_label(renderer, &controller.menu().title, controller.strings());
                self.draw_buttons(renderer, &controller.menu().buttons, controller);
            }
            Scene::Playing => {
                if let Some(session) = controller.session() {
                    self.draw_board(renderer, session, controller);
                }
            }
            Scene::Won => {
                // Finished board stays visible under the overlay
                if let Some(session) = controller.session() {
                    self.draw_board(renderer, session, controller);
                }
                renderer.fill_overlay(palette::BLACK, OVERLAY_ALPHA);
                self.draw_label(renderer, &controller.win().title, controller.strings());
                self.draw_buttons(renderer, &controller.win().buttons, controller);
            }
        }
    }

    fn draw_board<R: Renderer>(
        &mut self,
        renderer: &mut R,
        session: &GameSession,
        controller: &SceneController,
    ) {
        for card in session.cards() {
            self.draw_card(renderer, card, controller);
        }
        self.draw_score(renderer, session, controller);
    }

    fn draw_card<R: Renderer>(
        &mut self,
        renderer: &mut R,
        card: &Card,
        controller: &SceneController,
    ) {
        if !card.is_face_up() {
            renderer.fill_rect(card.rect, palette::BLUE);
            renderer.stroke_rect(card.rect, palette::WHITE, 2);
            return;
        }

        renderer.fill_rect(card.rect, palette::WHITE);
        renderer.stroke_rect(card.rect, palette::BLACK, 3);

        let center = card.rect.center();
        match card.kind {
            CardKind::Symbol => {
                let name = ComponentCatalog::symbol_resource(card.pair_id);
                let target = card.rect.inset(SYMBOL_INSET);
                if renderer.image(&name, target).is_err() {
                    if self.missing.insert(name.clone()) {
                        warn!("image resource `{}` is missing, using placeholder", name);
                    }
                    renderer.text(
                        MISSING_IMAGE_TEXT,
                        center.x,
                        center.y,
                        TextStyle::bold(20, palette::RED),
                        Anchor::Center,
                    );
                }
            }
            CardKind::Text => {
                let label = controller
                    .catalog()
                    .get(card.pair_id, controller.language())
                    .unwrap_or("?");
                // Long names drop a couple of font sizes to stay on the card
                let size = if label.chars().count() <= 8 { 18 } else { 15 };
                renderer.text(
                    label,
                    center.x,
                    center.y,
                    TextStyle::bold(size, palette::BLACK),
                    Anchor::Center,
                );
            }
        }
    }

    fn draw_score<R: Renderer>(
        &self,
        renderer: &mut R,
        session: &GameSession,
        controller: &SceneController,
    ) {
        let line = format!(
            "{}{}/{}",
            controller.strings().get("pairs"),
            session.pairs_found(),
            session.total_pairs()
        );
        renderer.text(
            &line,
            controller.config().screen_width / 2,
            10,
            TextStyle::bold(24, palette::BLACK),
            Anchor::MidTop,
        );
    }

    fn draw_label<R: Renderer>(&self, renderer: &mut R, label: &Label, strings: &Strings) {
        renderer.text(
            strings.get(label.text_key),
            label.x,
            label.y,
            TextStyle::new(label.size_px, label.color),
            label.anchor,
        );
    }

    fn draw_buttons<R: Renderer>(
        &self,
        renderer: &mut R,
        buttons: &[Button],
        controller: &SceneController,
    ) {
        let cursor = controller.cursor();
        for button in buttons {
            let hovered = cursor.is_some_and(|pos| button.contains(pos));
            let fill = if hovered {
                palette::GREEN
            } else {
                palette::BLUE
            };

            renderer.fill_rect(button.rect, fill);
            renderer.stroke_rect(button.rect, palette::WHITE, 2);

            let center = button.rect.center();
            renderer.text(
                controller.strings().get(button.text_key),
                center.x,
                center.y,
                TextStyle::bold(24, palette::WHITE),
                Anchor::Center,
            );
        }
    }
}
