//! Top-level scene state machine.
//!
//! Owns everything that used to be free-floating global state in this
//! kind of game: the current scene, the active session, the language
//! selector, and the RNG. Transitions:
//!
//! ```text
//! Menu --start--> Playing --all pairs found--> Won --restart--> Playing
//!   ^                                           |
//!   +------------------- menu -----------------+
//! ```
//!
//! Input events are routed only to the active scene; the per-frame
//! tick reaches the session only while playing. `Exit` is not handled
//! here - it bubbles to the embedding loop as a [`Directive`].

use log::info;

use crate::cards::ComponentCatalog;
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::geometry::Point;
use crate::core::rng::GameRng;
use crate::i18n::{Language, Strings};
use crate::platform::input::{InputEvent, PointerButton};
use crate::scene::intent::Intent;
use crate::scene::menu::MainMenu;
use crate::scene::win::WinScreen;
use crate::session::GameSession;

/// Which scene is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    Menu,
    Playing,
    Won,
}

/// What the embedding loop should do after an event or frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Keep looping.
    Continue,
    /// Tear down the window and stop.
    Exit,
}

/// The top-level controller: scene machine plus everything it owns.
#[derive(Debug)]
pub struct SceneController {
    config: GameConfig,
    catalog: ComponentCatalog,
    strings: Strings,
    rng: GameRng,
    scene: Scene,
    /// Present during Playing and Won, absent in Menu. Retained in Won
    /// so the finished board stays visible under the overlay.
    session: Option<GameSession>,
    menu: MainMenu,
    win: WinScreen,
    /// Last observed pointer position, for hover highlighting.
    cursor: Option<Point>,
}

impl SceneController {
    /// Create a controller with an entropy-seeded RNG.
    ///
    /// This is the startup point where configuration contract
    /// violations surface; a controller that constructs can always
    /// start sessions.
    pub fn new(config: GameConfig, catalog: ComponentCatalog) -> Result<Self, ConfigError> {
        Self::with_rng(config, catalog, GameRng::from_entropy())
    }

    /// Create a controller with an explicit RNG (deterministic tests).
    pub fn with_rng(
        config: GameConfig,
        catalog: ComponentCatalog,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate(catalog.len())?;
        crate::cards::GridLayout::compute(&config)?;

        let menu = MainMenu::new(&config);
        let win = WinScreen::new(&config);

        Ok(Self {
            config,
            catalog,
            strings: Strings::new(),
            rng,
            scene: Scene::Menu,
            session: None,
            menu,
            win,
            cursor: None,
        })
    }

    /// The active scene.
    #[must_use]
    pub const fn scene(&self) -> Scene {
        self.scene
    }

    /// The active session, if one exists (Playing or Won).
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The string table (and with it, the active language).
    #[must_use]
    pub const fn strings(&self) -> &Strings {
        &self.strings
    }

    /// The active display language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.strings.language()
    }

    /// The component catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The menu scene's widgets.
    #[must_use]
    pub const fn menu(&self) -> &MainMenu {
        &self.menu
    }

    /// The win scene's widgets.
    #[must_use]
    pub const fn win(&self) -> &WinScreen {
        &self.win
    }

    /// Last observed pointer position.
    #[must_use]
    pub const fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Switch to an explicit display language.
    ///
    /// Equivalent to the menu's language button; exposed for embedders
    /// that bind a hotkey or read a saved preference. Never touches
    /// card identities or session state.
    pub fn set_language(&mut self, language: Language) {
        self.strings.set_language(language);
    }

    /// Flip the display language.
    pub fn toggle_language(&mut self) {
        self.strings.toggle();
    }

    /// Route one input event to the active scene.
    pub fn handle_event(&mut self, event: &InputEvent, now_ms: u64) -> Directive {
        match *event {
            InputEvent::Quit => Directive::Exit,
            InputEvent::PointerMove { pos } => {
                self.cursor = Some(pos);
                Directive::Continue
            }
            InputEvent::PointerDown { pos, button } => {
                if button != PointerButton::Primary {
                    return Directive::Continue;
                }
                match self.scene {
                    Scene::Menu => match self.menu.intent_at(pos) {
                        Some(intent) => self.apply_intent(intent),
                        None => Directive::Continue,
                    },
                    Scene::Playing => {
                        if let Some(session) = &mut self.session {
                            session.handle_click(pos, now_ms);
                        }
                        Directive::Continue
                    }
                    Scene::Won => match self.win.intent_at(pos) {
                        Some(intent) => self.apply_intent(intent),
                        None => Directive::Continue,
                    },
                }
            }
        }
    }

    /// Advance state one frame.
    ///
    /// Ticks the session's mismatch timer and then checks the win
    /// condition - the transition fires on the frame the last pair is
    /// observed, and can never re-fire because Won no longer ticks.
    pub fn update(&mut self, now_ms: u64) {
        if self.scene != Scene::Playing {
            return;
        }
        if let Some(session) = &mut self.session {
            session.update(now_ms);
            if session.is_won() {
                info!("board complete: {} pairs", session.total_pairs());
                self.scene = Scene::Won;
            }
        }
    }

    /// Interpret a button intent.
    fn apply_intent(&mut self, intent: Intent) -> Directive {
        info!("intent: {}", intent);
        match intent {
            Intent::StartGame | Intent::Restart => {
                self.start_session();
                Directive::Continue
            }
            Intent::ToMenu => {
                self.session = None;
                self.scene = Scene::Menu;
                Directive::Continue
            }
            Intent::ToggleLanguage => {
                self.strings.toggle();
                Directive::Continue
            }
            Intent::Exit => Directive::Exit,
        }
    }

    /// Replace any prior session with a freshly shuffled one.
    fn start_session(&mut self) {
        let mut session_rng = self.rng.fork();
        let session = GameSession::new(&self.config, self.catalog.len(), &mut session_rng)
            .expect("configuration validated at construction");
        self.session = Some(session);
        self.scene = Scene::Playing;
    }
}
