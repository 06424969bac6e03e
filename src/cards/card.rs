//! Card model: identity, visual kind, and visibility state.
//!
//! A card is one grid cell. Two cards share each [`PairId`]: one shows
//! the component's schematic symbol, the other its written name. The
//! kind is purely a rendering hint - matching compares pair IDs only.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Point, Rect};

/// Identifier shared by exactly two cards of a board.
///
/// Pair IDs index into the component catalog: `PairId(3)` refers to the
/// catalog's fourth identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u16);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Which face a card shows when flipped.
///
/// Tagged variant rather than trait objects: the render pass switches
/// on it, nothing else looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Shows the component's schematic symbol image.
    Symbol,
    /// Shows the component's localized name.
    Text,
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Which pair this card belongs to.
    pub pair_id: PairId,

    /// Symbol or text face.
    pub kind: CardKind,

    /// Position on the board. Assigned once at layout, immutable after.
    pub rect: Rect,

    /// Face-up and not yet resolved.
    pub flipped: bool,

    /// Permanently true once paired.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(pair_id: PairId, kind: CardKind, rect: Rect) -> Self {
        Self {
            pair_id,
            kind,
            rect,
            flipped: false,
            matched: false,
        }
    }

    /// Is the card currently showing its face?
    ///
    /// Matched cards stay face-up for the rest of the session.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// Would a click at `point` select this card?
    ///
    /// Face-up and matched cards never accept clicks.
    #[must_use]
    pub const fn accepts_click(&self, point: Point) -> bool {
        !self.flipped && !self.matched && self.rect.contains(point)
    }
}
