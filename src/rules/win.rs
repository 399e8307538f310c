//! Health-based win detection.

use crate::core::{GameState, PlayerId};

/// The winner by health, if either player has dropped to zero or below.
///
/// Player 0 is checked first, so when both are down player 1 wins.
#[must_use]
pub fn check_win_condition(state: &GameState) -> Option<PlayerId> {
    PlayerId::both()
        .find(|&id| state.player(id).health <= 0)
        .map(PlayerId::opponent)
}

/// Declare a health winner on `state` and log the announcement.
///
/// Returns whether the game ended.
pub fn settle_winner(state: &mut GameState) -> bool {
    if state.game_over {
        return true;
    }
    match check_win_condition(state) {
        Some(winner) => {
            state.declare_winner(winner);
            let message = state.message.clone();
            state.push_log(message);
            true
        }
        None => false,
    }
}
