//! User intents emitted by scene widgets.
//!
//! Buttons carry an [`Intent`] instead of a callback; the scene
//! controller interprets it. This keeps all state transitions in one
//! place and the widgets free of references into mutable state.

use serde::{Deserialize, Serialize};

/// What the user asked for by clicking a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Begin a fresh game from the menu.
    StartGame,
    /// Begin a fresh game from the win screen.
    Restart,
    /// Return to the menu, discarding the finished session.
    ToMenu,
    /// Flip the display language.
    ToggleLanguage,
    /// Quit the application.
    Exit,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::StartGame => "start-game",
            Intent::Restart => "restart",
            Intent::ToMenu => "to-menu",
            Intent::ToggleLanguage => "toggle-language",
            Intent::Exit => "exit",
        };
        f.write_str(name)
    }
}
