//! Game configuration.
//!
//! Board dimensions, the mana curve, hand limit, fatigue and deck
//! composition all live in a `GameConfig` value that is threaded into
//! every `GameState`. Nothing reads ambient globals, so any number of
//! games with different rules can run side by side.
//!
//! ```
//! use grid_ccg::core::GameConfig;
//!
//! let config = GameConfig::default().with_board(6, 9).with_hand_limit(5);
//! assert_eq!(config.rows, 6);
//! assert_eq!(config.hand_limit, 5);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::card::{STANDARD_BATTLECAST_BONUS, STANDARD_RAGE_BONUS};

/// Complete rule configuration for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows. Row 0 is player 0's spawn row, `rows - 1` player 1's.
    pub rows: usize,

    /// Board columns.
    pub cols: usize,

    /// Player health at game start.
    pub starting_health: i32,

    /// Cards drawn by each player during initialization.
    pub starting_hand_size: usize,

    /// Mana and mana capacity at game start.
    pub starting_mana: u32,

    /// Upper bound for mana capacity.
    pub max_mana: u32,

    /// Maximum cards held in hand. Draws beyond it burn the card.
    pub hand_limit: usize,

    /// Added to the cumulative fatigue counter on every empty-deck draw.
    pub fatigue_step: i32,

    /// Cards per generated deck.
    pub deck_size: usize,

    /// Share of the deck (by generation order) that gets Taunt.
    pub taunt_ratio: f64,

    /// Number of Battlecast cards per deck.
    pub battlecast_count: usize,

    /// Number of Rage cards per deck.
    pub rage_count: usize,

    /// Attack/health/max-health bonus applied when a Battlecast card is placed.
    pub battlecast_bonus: i32,

    /// Attack gained by a Rage unit each time it survives damage.
    pub rage_bonus: i32,

    /// Highest card cost a generated card can roll.
    pub max_card_cost: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 7,
            starting_health: 30,
            starting_hand_size: 3,
            starting_mana: 1,
            max_mana: 10,
            hand_limit: 7,
            fatigue_step: 1,
            deck_size: 15,
            taunt_ratio: 0.2,
            battlecast_count: 2,
            rage_count: 2,
            battlecast_bonus: STANDARD_BATTLECAST_BONUS,
            rage_bonus: STANDARD_RAGE_BONUS,
            max_card_cost: 10,
        }
    }
}

impl GameConfig {
    /// Standard rules: 5×7 board, 30 health, 10 mana cap, 7-card hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set starting health for both players.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the mana capacity cap.
    #[must_use]
    pub fn with_max_mana(mut self, max: u32) -> Self {
        self.max_mana = max;
        self
    }

    /// Set the hand size limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Number of Taunt cards in a generated deck.
    #[must_use]
    pub fn taunt_count(&self) -> usize {
        (self.deck_size as f64 * self.taunt_ratio).floor() as usize
    }

    /// Number of distinct cards that receive an effect.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.battlecast_count + self.rage_count
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows < 2 {
            return Err(GameError::InvalidConfig("board needs at least two rows"));
        }
        if self.cols == 0 {
            return Err(GameError::InvalidConfig("board needs at least one column"));
        }
        if self.starting_mana == 0 || self.starting_mana > self.max_mana {
            return Err(GameError::InvalidConfig("starting mana must be within 1..=max_mana"));
        }
        if self.starting_hand_size > self.hand_limit {
            return Err(GameError::InvalidConfig("opening hand exceeds hand limit"));
        }
        if self.max_card_cost == 0 {
            return Err(GameError::InvalidConfig("cards must cost at least 1"));
        }
        if self.effect_count() > self.deck_size {
            return Err(GameError::InvalidConfig("more effect cards than deck slots"));
        }
        if !(0.0..=1.0).contains(&self.taunt_ratio) {
            return Err(GameError::InvalidConfig("taunt ratio must be within 0..=1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let config = GameConfig::default();

        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 7);
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.max_mana, 10);
        assert_eq!(config.hand_limit, 7);
        assert_eq!(config.taunt_count(), 3);
        assert_eq!(config.effect_count(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_board(3, 4)
            .with_starting_health(10)
            .with_starting_hand_size(1)
            .with_max_mana(5)
            .with_deck_size(10);

        assert_eq!((config.rows, config.cols), (3, 4));
        assert_eq!(config.starting_health, 10);
        assert_eq!(config.starting_hand_size, 1);
        assert_eq!(config.max_mana, 5);
        assert_eq!(config.taunt_count(), 2);
    }

    #[test]
    fn test_validate_rejects_tiny_deck() {
        let config = GameConfig::new().with_deck_size(3);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_opening_hand() {
        let config = GameConfig::new().with_starting_hand_size(9);
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfig("opening hand exceeds hand limit"))
        );
        assert!(GameConfig::new().with_starting_hand_size(7).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_single_row() {
        let config = GameConfig::new().with_board(1, 7);
        assert!(config.validate().is_err());
    }
}
