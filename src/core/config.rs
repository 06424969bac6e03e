//! Game configuration.
//!
//! One [`GameConfig`] describes everything the board and scenes need to
//! lay themselves out: screen size, grid shape, spacing, the header
//! strip reserved for the score line, and timing. The defaults are the
//! shipped 800x600 / 4x5 configuration.
//!
//! Validation happens once, at startup, against the component pool the
//! grid will draw identities from. A config that validates can always
//! produce a board; nothing re-checks at runtime.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Complete game configuration.
///
/// Construct with [`GameConfig::default`] and adjust with the `with_*`
/// builders.
///
/// ## Example
///
/// ```
/// use memora::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_grid(2, 3)
///     .with_screen(640, 480);
///
/// assert!(config.validate(3).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width in pixels.
    pub screen_width: i32,

    /// Canvas height in pixels.
    pub screen_height: i32,

    /// Grid rows.
    pub rows: u32,

    /// Grid columns.
    pub cols: u32,

    /// Gap between cards and around the grid edge, in pixels.
    pub card_gap: i32,

    /// Strip at the top of the screen reserved for the score line.
    /// The grid centers itself in the area below it.
    pub header_margin: i32,

    /// How long a mismatched pair stays face-up before flipping back.
    pub mismatch_delay_ms: u64,

    /// Target frame rate for the embedding loop.
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            rows: 4,
            cols: 5,
            card_gap: 15,
            header_margin: 60,
            mismatch_delay_ms: 1000,
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Set the grid shape.
    #[must_use]
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the canvas size.
    #[must_use]
    pub fn with_screen(mut self, width: i32, height: i32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Set the inter-card gap.
    #[must_use]
    pub fn with_card_gap(mut self, gap: i32) -> Self {
        self.card_gap = gap;
        self
    }

    /// Set the header strip height.
    #[must_use]
    pub fn with_header_margin(mut self, margin: i32) -> Self {
        self.header_margin = margin;
        self
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, delay: u64) -> Self {
        self.mismatch_delay_ms = delay;
        self
    }

    /// Total number of grid cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Number of card pairs the grid holds.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Check this configuration against a component pool of
    /// `pool_size` identities.
    ///
    /// A passing config is guaranteed to generate a board. Card-size
    /// feasibility is checked separately by the grid layout, which owns
    /// that arithmetic.
    pub fn validate(&self, pool_size: usize) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cell_count() % 2 != 0 {
            return Err(ConfigError::OddCellCount {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if pool_size < self.pair_count() {
            return Err(ConfigError::PoolTooSmall {
                required: self.pair_count(),
                available: pool_size,
            });
        }
        Ok(())
    }
}
