//! Per-frame driver.
//!
//! The embedding loop owns the window and pacing; once per frame it
//! collects input events and calls [`App::frame`]. One frame is:
//! route events, advance state, draw. Nothing blocks or suspends -
//! the mismatch delay is polled inside the session tick.
//!
//! ```no_run
//! use memora::app::App;
//! use memora::cards::ComponentCatalog;
//! use memora::core::GameConfig;
//! use memora::platform::MonotonicClock;
//! use memora::scene::Directive;
//!
//! # fn platform_events() -> Vec<memora::platform::InputEvent> { vec![] }
//! # struct Canvas;
//! # impl memora::platform::Renderer for Canvas {
//! #     fn fill_rect(&mut self, _: memora::core::Rect, _: memora::platform::Color) {}
//! #     fn stroke_rect(&mut self, _: memora::core::Rect, _: memora::platform::Color, _: u32) {}
//! #     fn fill_overlay(&mut self, _: memora::platform::Color, _: u8) {}
//! #     fn text(&mut self, _: &str, _: i32, _: i32, _: memora::platform::TextStyle, _: memora::platform::Anchor) {}
//! #     fn image(&mut self, _: &str, _: memora::core::Rect) -> Result<(), memora::core::MissingResource> { Ok(()) }
//! # }
//! # fn present(_: &Canvas) {}
//! let mut app = App::new(GameConfig::default(), ComponentCatalog::electronics())?;
//! let clock = MonotonicClock::new();
//! let mut canvas = Canvas;
//!
//! loop {
//!     let events = platform_events();
//!     if app.frame(&events, &mut canvas, &clock) == Directive::Exit {
//!         break;
//!     }
//!     present(&canvas);
//!     // ...sleep to hold app.config().target_fps...
//! }
//! # Ok::<(), memora::core::ConfigError>(())
//! ```

use crate::cards::ComponentCatalog;
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;
use crate::platform::clock::Clock;
use crate::platform::draw::Renderer;
use crate::platform::input::InputEvent;
use crate::render::RenderPass;
use crate::scene::{Directive, SceneController};

/// The assembled game: controller plus render pass.
#[derive(Debug)]
pub struct App {
    controller: SceneController,
    pass: RenderPass,
}

impl App {
    /// Assemble the game.
    ///
    /// This is where configuration contract violations surface; a
    /// constructed `App` never fails at runtime.
    pub fn new(config: GameConfig, catalog: ComponentCatalog) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: SceneController::new(config, catalog)?,
            pass: RenderPass::new(),
        })
    }

    /// Assemble with an explicit RNG (deterministic tests).
    pub fn with_rng(
        config: GameConfig,
        catalog: ComponentCatalog,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: SceneController::with_rng(config, catalog, rng)?,
            pass: RenderPass::new(),
        })
    }

    /// The scene controller (for observing state).
    #[must_use]
    pub const fn controller(&self) -> &SceneController {
        &self.controller
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.controller.config()
    }

    /// Run one frame: events, update, draw.
    ///
    /// Returns [`Directive::Exit`] when the user quit; remaining events
    /// in the batch are dropped, matching a loop that tears down
    /// immediately.
    pub fn frame<R: Renderer, C: Clock>(
        &mut self,
        events: &[InputEvent],
        renderer: &mut R,
        clock: &C,
    ) -> Directive {
        let now_ms = clock.now_ms();

        for event in events {
            if self.controller.handle_event(event, now_ms) == Directive::Exit {
                return Directive::Exit;
            }
        }

        self.controller.update(now_ms);
        self.pass.draw(renderer, &self.controller);

        Directive::Continue
    }
}
