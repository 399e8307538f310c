//! Turn pipeline: card selection, placement, drawing and end of turn.
//!
//! Every operation takes a snapshot and returns a new one. Rule
//! violations never surface as `Err` here; they come back as a copy of
//! the input whose `message` carries the player-facing reason (see
//! `GameState::rejected`). Once the game is over every operation is a
//! no-op.

use crate::board::Position;
use crate::cards::{Archetype, Card};
use crate::core::{GameError, GameState, PlayerId};

use super::combat::{advance_units, battle_units};
use super::win::settle_winner;

/// Outcome of one draw attempt.
enum Draw {
    Drawn(String),
    Burned(String),
    Fatigue(i32),
}

/// Pick a hand card for placement.
#[must_use]
pub fn select_card(state: &GameState, card: &Card) -> GameState {
    if state.game_over {
        return state.clone();
    }

    match validate_selection(state, card) {
        Ok(selected) => {
            log::debug!("{} selected {}", state.current_player, selected.name);
            let mut next = state.clone();
            next.selected_card = Some(selected);
            next.message = "Select a spawn position".to_string();
            next
        }
        Err(err) => state.rejected(&err),
    }
}

fn validate_selection(state: &GameState, card: &Card) -> Result<Card, GameError> {
    Archetype::from_key(&card.archetype)?;

    let player = state.current();
    let in_hand = player.hand_card(card.id).ok_or(GameError::CardNotInHand(card.id))?;
    if in_hand.cost > player.mana {
        return Err(GameError::NotEnoughMana {
            cost: in_hand.cost,
            available: player.mana,
        });
    }
    Ok(in_hand.clone())
}

/// Place the selected card on the current player's spawn row.
///
/// Without a selection this is a no-op.
#[must_use]
pub fn place_card(state: &GameState, row: usize, col: usize) -> GameState {
    if state.game_over {
        return state.clone();
    }
    let Some(selected) = state.selected_card.as_ref() else {
        return state.clone();
    };

    let pos = match validate_placement(state, selected, row, col) {
        Ok(pos) => pos,
        Err(err) => return state.rejected(&err),
    };

    let mut next = state.clone();
    let player = next.current_player;
    let Some(card) = next.current_mut().remove_from_hand(selected.id) else {
        return state.rejected(&GameError::CardNotInHand(selected.id));
    };
    next.current_mut().mana -= card.cost;
    next.selected_card = None;
    next.message = "Card placed!".to_string();
    next.log_turn(format!("{player} placed {} at {pos}", card.name));
    next.spawn_unit(pos, card, player);
    next
}

fn validate_placement(state: &GameState, card: &Card, row: usize, col: usize) -> Result<Position, GameError> {
    let expected = state.spawn_row(state.current_player);
    if row != expected {
        return Err(GameError::WrongSpawnRow { expected, row });
    }

    let pos = Position::new(row, col);
    if !state.board.contains(pos) {
        return Err(GameError::OutOfBounds { row, col });
    }
    if !state.board.is_empty(pos) {
        return Err(GameError::CellOccupied(pos));
    }

    // The selection may be stale if the hand or mana changed since.
    let player = state.current();
    let in_hand = player.hand_card(card.id).ok_or(GameError::CardNotInHand(card.id))?;
    if in_hand.cost > player.mana {
        return Err(GameError::NotEnoughMana {
            cost: in_hand.cost,
            available: player.mana,
        });
    }
    Ok(pos)
}

/// Draw one card for `player`.
///
/// A full hand burns the top card instead. An empty deck deals fatigue,
/// one point more than the previous fatigue draw.
#[must_use]
pub fn draw_card_or_fatigue(state: &GameState, player: PlayerId) -> GameState {
    let mut next = state.clone();
    let hand_limit = next.config.hand_limit;
    let fatigue_step = next.config.fatigue_step;

    let outcome = {
        let seat = next.player_mut(player);
        match seat.pop_deck() {
            Some(card) if seat.hand.len() < hand_limit => {
                let name = card.name.clone();
                seat.hand.push_back(card);
                Some(Draw::Drawn(name))
            }
            Some(card) => Some(Draw::Burned(card.name)),
            None if seat.hand.len() < hand_limit => {
                seat.fatigue_damage += fatigue_step;
                seat.health -= seat.fatigue_damage;
                Some(Draw::Fatigue(seat.fatigue_damage))
            }
            None => None,
        }
    };

    match outcome {
        Some(Draw::Drawn(name)) => next.log_turn(format!("{player} draws {name}")),
        Some(Draw::Burned(name)) => next.log_turn(format!("{player} burns {name} (hand full)!")),
        Some(Draw::Fatigue(damage)) => {
            log::debug!("{player} fatigue {damage}");
            next.log_turn(format!("{player} takes {damage} fatigue damage!"));
        }
        None => {}
    }
    next
}

/// Grow a player's mana capacity by one (up to the cap) and refill it.
pub fn refresh_mana(state: &mut GameState, player: PlayerId) {
    let max_mana = state.config.max_mana;
    let seat = state.player_mut(player);
    seat.mana_capacity = (seat.mana_capacity + 1).min(max_mana);
    seat.mana = seat.mana_capacity;
}

/// Battle for the current player, then check health.
#[must_use]
pub fn battle_phase(state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }
    let mut next = battle_units(state);
    settle_winner(&mut next);
    next
}

/// Close the current player's turn and open the opponent's.
///
/// Order: battle and win check, switch player (turn number grows when
/// play returns to player 0), draw, advance, refresh mana. A win during
/// battle or advance stops the sequence; the current player stays put on
/// a battle win.
#[must_use]
pub fn end_turn(state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }

    let mut next = battle_phase(state);
    if next.game_over {
        return next;
    }

    let upcoming = state.current_player.opponent();
    next.current_player = upcoming;
    next.selected_card = None;
    if upcoming == PlayerId::FIRST {
        next.turn += 1;
    } else {
        next.is_first_turn = false;
    }

    next = draw_card_or_fatigue(&next, upcoming);
    next.log_turn(format!("Draw phase - {upcoming} draws a card"));

    if !next.is_first_turn {
        next = advance_units(&next);
        if next.game_over {
            return next;
        }
        next.log_turn(format!("Advance phase - {upcoming}'s units advance"));
    }

    refresh_mana(&mut next, upcoming);
    next.message = next.play_phase_message(upcoming);
    log::debug!("turn {}: {} to play with {} mana", next.turn, upcoming, next.current().mana);
    next
}
