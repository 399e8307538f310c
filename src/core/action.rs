//! Actions external callers issue against a game.
//!
//! Human UIs and the scripted opponent speak the same vocabulary:
//! select a card, place it, end the turn. `BattlePhase` and `AddLog` are
//! auxiliary actions the opponent driver also uses.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A single request to change the game state.
///
/// ## Example
///
/// ```
/// use grid_ccg::core::Action;
///
/// let place = Action::PlaceCard { row: 0, col: 3 };
/// assert!(place.is_play_phase());
/// assert!(!Action::EndTurn.is_play_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Pick a hand card for placement.
    SelectCard(Card),
    /// Place the selected card.
    PlaceCard { row: usize, col: usize },
    /// Battle, hand over, draw, advance, refresh mana.
    EndTurn,
    /// Run the current player's battle pass and a win check.
    BattlePhase,
    /// Append a narrative entry.
    AddLog(String),
}

impl Action {
    /// Whether this action happens inside a play phase (no phase change).
    #[must_use]
    pub fn is_play_phase(&self) -> bool {
        matches!(self, Action::SelectCard(_) | Action::PlaceCard { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectCard(card) => write!(f, "select {} ({})", card.name, card.id),
            Action::PlaceCard { row, col } => write!(f, "place at {row},{col}"),
            Action::EndTurn => f.write_str("end turn"),
            Action::BattlePhase => f.write_str("battle phase"),
            Action::AddLog(_) => f.write_str("add log"),
        }
    }
}
