//! Grid generation: pair creation, shuffle, and layout.
//!
//! Given a validated configuration, generation always succeeds:
//!
//! 1. create two cards (one Symbol, one Text) per identity index,
//! 2. shuffle the full card list uniformly,
//! 3. place shuffled index `k` at row `k / cols`, column `k % cols`,
//!    inside a grid centered in the play area below the header strip.
//!
//! All layout arithmetic lives in [`GridLayout`] so the startup check
//! and the generator can never disagree about feasibility.

use crate::cards::card::{Card, CardKind, PairId};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::geometry::Rect;
use crate::core::rng::GameRng;

/// Computed cell geometry for a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Card width in pixels.
    pub card_w: i32,
    /// Card height in pixels.
    pub card_h: i32,
    /// X of the first column.
    pub origin_x: i32,
    /// Y of the first row.
    pub origin_y: i32,
}

impl GridLayout {
    /// Compute the cell geometry for a configuration.
    ///
    /// Card size is the available canvas minus gaps, divided evenly;
    /// the grid is then centered horizontally and, below the header
    /// strip, vertically.
    pub fn compute(config: &GameConfig) -> Result<Self, ConfigError> {
        let rows = config.rows as i32;
        let cols = config.cols as i32;
        let gap = config.card_gap;

        let card_w = (config.screen_width - (cols + 1) * gap) / cols;
        let card_h = (config.screen_height - config.header_margin - (rows + 1) * gap) / rows;

        if card_w <= 0 || card_h <= 0 {
            return Err(ConfigError::ScreenTooSmall {
                width: config.screen_width,
                height: config.screen_height,
                rows: config.rows,
                cols: config.cols,
            });
        }

        let grid_w = cols * card_w + (cols - 1) * gap;
        let grid_h = rows * card_h + (rows - 1) * gap;

        let origin_x = (config.screen_width - grid_w) / 2;
        let origin_y =
            config.header_margin + (config.screen_height - config.header_margin - grid_h) / 2;

        Ok(Self {
            card_w,
            card_h,
            origin_x,
            origin_y,
        })
    }

    /// Rectangle of the cell at a row-major index.
    #[must_use]
    pub fn cell_rect(&self, config: &GameConfig, index: usize) -> Rect {
        let row = (index / config.cols as usize) as i32;
        let col = (index % config.cols as usize) as i32;
        Rect::new(
            self.origin_x + col * (self.card_w + config.card_gap),
            self.origin_y + row * (self.card_h + config.card_gap),
            self.card_w,
            self.card_h,
        )
    }
}

/// Generate a shuffled, laid-out board.
///
/// `pool_size` is the number of identities available in the component
/// catalog; the first `config.pair_count()` of them are used. Fails
/// only on a configuration contract violation - a passing
/// [`GameConfig::validate`] plus a feasible [`GridLayout`] guarantee
/// success.
pub fn generate(
    config: &GameConfig,
    pool_size: usize,
    rng: &mut GameRng,
) -> Result<Vec<Card>, ConfigError> {
    config.validate(pool_size)?;
    let layout = GridLayout::compute(config)?;

    let mut cards = Vec::with_capacity(config.cell_count());
    for i in 0..config.pair_count() {
        let pair_id = PairId::new(i as u16);
        cards.push(Card::new(pair_id, CardKind::Symbol, Rect::default()));
        cards.push(Card::new(pair_id, CardKind::Text, Rect::default()));
    }

    rng.shuffle(&mut cards);

    for (index, card) in cards.iter_mut().enumerate() {
        card.rect = layout.cell_rect(config, index);
    }

    Ok(cards)
}
