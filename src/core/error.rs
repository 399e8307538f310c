//! Error taxonomy for rejected operations.
//!
//! In-game actions never return these to the caller: the action boundary
//! turns them into `GameState::message` and leaves the rest of the state
//! untouched. The `Display` strings are therefore the player-facing text.
//!
//! Setup operations (initialization, preview decks, deck selection) do
//! return `Result<_, GameError>`.

use thiserror::Error;

use crate::board::Position;
use crate::cards::CardId;

/// Everything that can make the engine refuse an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Archetype key not present in the catalog.
    #[error("Invalid card type!")]
    UnknownArchetype { key: String },

    /// Card costs more than the acting player's available mana.
    #[error("Not enough mana!")]
    NotEnoughMana { cost: u32, available: u32 },

    /// Card is not in the acting player's hand.
    #[error("Card not in hand!")]
    CardNotInHand(CardId),

    /// Placement outside the acting player's spawn row.
    #[error("Must place on spawn row {expected}!")]
    WrongSpawnRow { expected: usize, row: usize },

    /// Placement target already holds a unit.
    #[error("Cell occupied!")]
    CellOccupied(Position),

    /// Placement target is not on the board.
    #[error("Invalid position!")]
    OutOfBounds { row: usize, col: usize },

    /// Configuration rejected by `GameConfig::validate`.
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(&'static str),

    /// Deck choice issued while no deck selection is running.
    #[error("No deck selection in progress")]
    NotSelectingDeck,
}

impl GameError {
    /// Whether the error leaves the current card selection in place.
    ///
    /// Selection failures clear the selection; placement failures keep it
    /// so the player can pick another cell.
    #[must_use]
    pub fn keeps_selection(&self) -> bool {
        matches!(
            self,
            GameError::WrongSpawnRow { .. } | GameError::CellOccupied(_) | GameError::OutOfBounds { .. }
        )
    }
}
