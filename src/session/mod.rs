//! Game session: the click/match/mismatch state machine.
//!
//! One `GameSession` per play-through. The owning scene controller
//! creates it on game start, ticks it every frame, and observes
//! `is_won` after each tick.

pub mod game;

pub use game::{ClickOutcome, GameSession};
