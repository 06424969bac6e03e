//! One play-through of the board.
//!
//! `GameSession` owns the cards and resolves clicks:
//!
//! - `Idle`: 0 or 1 cards selected, input accepted
//! - `Resolving`: two mismatched cards face-up, input blocked until the
//!   deadline passes
//!
//! A match is evaluated the instant the second card flips; a mismatch
//! stays visible until [`update`](GameSession::update) observes the
//! deadline. The delay is purely polled - no timers, no threads.

use log::{debug, info};
use smallvec::SmallVec;

use crate::cards::{generate, Card};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::geometry::Point;
use crate::core::rng::GameRng;

/// What a click did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click hit nothing selectable, or input was locked. State unchanged.
    Ignored,
    /// First card of an attempt flipped face-up.
    Flipped,
    /// Second card completed a pair; board immediately clickable again.
    Matched,
    /// Second card did not match; input locked until the deadline.
    Mismatched,
}

/// State machine for a single play-through.
///
/// Created fresh on every game start or restart; dropped when the
/// player returns to the menu.
#[derive(Clone, Debug)]
pub struct GameSession {
    cards: Vec<Card>,
    /// Indices into `cards` of face-up, unresolved cards. Never holds
    /// more than two: the second selection always resolves.
    selected: SmallVec<[usize; 2]>,
    pairs_found: u32,
    /// `Some(deadline)` while a mismatch is on display. Input is locked
    /// exactly while this is set.
    mismatch_deadline: Option<u64>,
    mismatch_delay_ms: u64,
    seed: u64,
}

impl GameSession {
    /// Generate a fresh shuffled board.
    ///
    /// `pool_size` is the component catalog's identity count. Fails
    /// only on configuration contract violations; see
    /// [`GameConfig::validate`].
    pub fn new(
        config: &GameConfig,
        pool_size: usize,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let seed = rng.seed();
        let cards = generate(config, pool_size, rng)?;

        info!(
            "new session: {} cards ({} pairs), seed {}",
            cards.len(),
            cards.len() / 2,
            seed
        );

        Ok(Self {
            cards,
            selected: SmallVec::new(),
            pairs_found: 0,
            mismatch_deadline: None,
            mismatch_delay_ms: config.mismatch_delay_ms,
            seed,
        })
    }

    /// The board, in creation (layout) order. Read-only: rendering is a
    /// separate pass over this slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total pairs on this board, derived from the generated card set.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Pairs matched so far. Monotonically increasing.
    #[must_use]
    pub const fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    /// Is input currently blocked by a mismatch on display?
    #[must_use]
    pub const fn is_input_locked(&self) -> bool {
        self.mismatch_deadline.is_some()
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pairs_found == self.total_pairs()
    }

    /// RNG seed that produced this board.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Resolve a primary-button click at `point`.
    ///
    /// No-op while locked or when the point hits no selectable card -
    /// never an error. Cards are scanned in creation order and the
    /// first hit wins, so overlapping input is deterministic.
    pub fn handle_click(&mut self, point: Point, now_ms: u64) -> ClickOutcome {
        if self.is_input_locked() {
            return ClickOutcome::Ignored;
        }

        let Some(index) = self.cards.iter().position(|c| c.accepts_click(point)) else {
            return ClickOutcome::Ignored;
        };

        self.cards[index].flipped = true;
        self.selected.push(index);

        if self.selected.len() < 2 {
            debug!("flipped card {} ({})", index, self.cards[index].pair_id);
            return ClickOutcome::Flipped;
        }

        self.resolve_attempt(now_ms)
    }

    /// Advance the mismatch timer.
    ///
    /// Call once per frame. This is the only place a mismatch resolves:
    /// at or after the deadline both cards flip back down and the lock
    /// clears.
    pub fn update(&mut self, now_ms: u64) {
        let Some(deadline) = self.mismatch_deadline else {
            return;
        };
        if now_ms < deadline {
            return;
        }

        for &index in &self.selected {
            self.cards[index].flipped = false;
        }
        self.selected.clear();
        self.mismatch_deadline = None;
    }

    /// Compare the two selected cards. Called exactly when the second
    /// selection lands.
    fn resolve_attempt(&mut self, now_ms: u64) -> ClickOutcome {
        let (a, b) = (self.selected[0], self.selected[1]);

        if self.cards[a].pair_id == self.cards[b].pair_id {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            self.pairs_found += 1;
            self.selected.clear();

            debug!(
                "matched {} ({}/{})",
                self.cards[a].pair_id,
                self.pairs_found,
                self.total_pairs()
            );
            ClickOutcome::Matched
        } else {
            self.mismatch_deadline = Some(now_ms + self.mismatch_delay_ms);

            debug!(
                "mismatch {} vs {}",
                self.cards[a].pair_id, self.cards[b].pair_id
            );
            ClickOutcome::Mismatched
        }
    }
}
