//! Movement and combat resolution.
//!
//! Both passes act for `state.current_player` only. They snapshot that
//! player's units up front (front line first, see
//! `Board::units_in_processing_order`) and skip any entry whose cell no
//! longer holds the same `UnitId` by the time it is reached.

use smallvec::SmallVec;

use crate::board::{Board, Position};
use crate::cards::Unit;
use crate::core::{GameState, PlayerId};

/// Column offsets scanned in front of an attacker: forward, left, right.
const ATTACK_SCAN: [isize; 3] = [0, -1, 1];

/// Column offsets checked for taunt zones of control.
const TAUNT_ZONE: [isize; 3] = [-1, 0, 1];

/// Pick the cell a unit at `pos` attacks, if any enemy is in reach.
///
/// Taunt enemies win over plain ones; ties go to scan order.
#[must_use]
pub fn select_target(board: &Board, pos: Position, player: PlayerId) -> Option<Position> {
    let enemies: SmallVec<[(Position, bool); 3]> = ATTACK_SCAN
        .iter()
        .filter_map(|&d_col| board.offset(pos, player.direction(), d_col))
        .filter_map(|cell| {
            board
                .get(cell)
                .filter(|u| u.is_enemy_of(player))
                .map(|u| (cell, u.has_taunt()))
        })
        .collect();

    enemies
        .iter()
        .find(|(_, taunt)| *taunt)
        .or_else(|| enemies.first())
        .map(|(cell, _)| *cell)
}

/// First enemy Taunt unit whose zone covers `dest`.
///
/// The zone is the unit's own cell and the two cells beside it in the
/// same row, so a taunt diagonally ahead still blocks.
#[must_use]
pub fn taunt_blocker(board: &Board, dest: Position, player: PlayerId) -> Option<(Position, &Unit)> {
    TAUNT_ZONE
        .iter()
        .filter_map(|&d_col| board.offset(dest, 0, d_col))
        .find_map(|cell| {
            board
                .get(cell)
                .filter(|u| u.is_enemy_of(player) && u.has_taunt())
                .map(|u| (cell, u))
        })
}

/// Advance every unit of the current player one row.
///
/// A unit stepping off the far edge wins the game on the spot and ends
/// the pass. Occupied destinations and taunt zones hold a unit in place.
#[must_use]
pub fn advance_units(state: &GameState) -> GameState {
    let mut next = state.clone();
    let player = state.current_player;

    for (pos, snapshot) in state.board.units_in_processing_order(player) {
        if !next.board.holds(pos, snapshot.id) {
            continue;
        }

        let Some(dest) = next.board.offset(pos, player.direction(), 0) else {
            next.declare_winner(player);
            let line = format!("{} reached enemy spawn! {}", snapshot.name(), next.message);
            next.log_turn(line);
            return next;
        };

        if !next.board.is_empty(dest) {
            log::trace!("{} at {pos} held by occupied {dest}", snapshot.name());
            continue;
        }

        if let Some((cell, blocker)) = taunt_blocker(&next.board, dest, player) {
            let line = format!(
                "{} cannot move due to enemy Taunt unit {} at {}",
                snapshot.name(),
                blocker.name(),
                cell
            );
            next.log_turn(line);
            continue;
        }

        next.board.move_unit(pos, dest);
        log::trace!("{} moved {pos} -> {dest}", snapshot.name());
        next.log_turn(format!("{} moved to {}", snapshot.name(), dest));
    }

    next
}

/// Every unit of the current player strikes one enemy ahead of it.
///
/// Damage that kills a unit standing on the defender's home row spills
/// over onto the defending player. Surviving Rage units grow stronger.
/// Win conditions are not checked here.
#[must_use]
pub fn battle_units(state: &GameState) -> GameState {
    let mut next = state.clone();
    let player = state.current_player;
    let defender = player.opponent();
    let enemy_home = state.spawn_row(defender);
    let rage_bonus = state.config.rage_bonus;

    for (pos, snapshot) in state.board.units_in_processing_order(player) {
        let Some(attacker) = next.board.get(pos).filter(|u| u.id == snapshot.id).cloned() else {
            continue;
        };
        let Some(target_pos) = select_target(&next.board, pos, player) else {
            continue;
        };
        let Some(mut target) = next.board.get(target_pos).cloned() else {
            continue;
        };

        let damage = attacker.current_attack;
        let original_health = target.current_health;
        let remaining = original_health - damage;

        if target_pos.row == enemy_home && remaining <= 0 {
            let excess = damage - original_health;
            if excess > 0 {
                next.player_mut(defender).health -= excess;
                next.log_turn(format!("Excess damage of {excess} dealt to {defender}'s health!"));
            }
        }

        next.log_turn(format!(
            "{} attacks {} at {} for {} damage!",
            attacker.name(),
            target.name(),
            target_pos,
            damage
        ));

        if remaining <= 0 {
            next.board.take(target_pos);
            next.log_turn(format!("{} is defeated!", target.name()));
            continue;
        }

        target.current_health = remaining;
        if target.has_rage() {
            target.current_attack += rage_bonus;
            next.log_turn(format!("{} gains +{} attack from Rage!", target.name(), rage_bonus));
        }
        next.board.set(target_pos, target);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Archetype, Card, CardId};
    use crate::core::{GameConfig, GameMode};

    fn state() -> GameState {
        GameState::new(GameConfig::default(), [Archetype::Orc, Archetype::Undead], GameMode::PlayerVsPlayer)
    }

    fn card(id: u32, attack: i32, health: i32) -> Card {
        Card::new(CardId::new(id), format!("C{id}"), 1, attack, health, Archetype::Orc)
    }

    #[test]
    fn test_select_target_prefers_forward() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 1), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 2), card(2, 1, 1), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 3), card(3, 1, 1), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 4), card(4, 1, 1), PlayerId::SECOND);

        assert_eq!(select_target(&s.board, Position::new(1, 3), PlayerId::FIRST), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_select_target_left_before_right() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 1), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 2), card(2, 1, 1), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 4), card(3, 1, 1), PlayerId::SECOND);

        assert_eq!(select_target(&s.board, Position::new(1, 3), PlayerId::FIRST), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_select_target_ignores_friends() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 1), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 1, 1), PlayerId::FIRST);

        assert_eq!(select_target(&s.board, Position::new(1, 3), PlayerId::FIRST), None);
    }

    #[test]
    fn test_select_target_player_two_looks_down() {
        let mut s = state();
        s.spawn_unit(Position::new(3, 0), card(1, 1, 1), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 1), card(2, 1, 1), PlayerId::FIRST);

        // Column 0 has no left neighbour; the right diagonal is found.
        assert_eq!(select_target(&s.board, Position::new(3, 0), PlayerId::SECOND), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_taunt_blocker_zone() {
        let mut s = state();
        s.spawn_unit(Position::new(2, 4), card(1, 1, 1).with_taunt(), PlayerId::SECOND);

        assert!(taunt_blocker(&s.board, Position::new(2, 3), PlayerId::FIRST).is_some());
        assert!(taunt_blocker(&s.board, Position::new(2, 5), PlayerId::FIRST).is_some());
        assert!(taunt_blocker(&s.board, Position::new(2, 2), PlayerId::FIRST).is_none());
        // Own taunt units never block.
        assert!(taunt_blocker(&s.board, Position::new(2, 3), PlayerId::SECOND).is_none());
    }

    #[test]
    fn test_advance_front_line_first() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 1), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 1, 1), PlayerId::FIRST);

        let next = advance_units(&s);

        assert_eq!(next.board.get(Position::new(3, 3)).map(|u| u.card.id), Some(CardId::new(2)));
        assert_eq!(next.board.get(Position::new(2, 3)).map(|u| u.card.id), Some(CardId::new(1)));
        assert!(next.board.is_empty(Position::new(1, 3)));
        // Snapshot untouched.
        assert!(!s.board.is_empty(Position::new(1, 3)));
    }

    #[test]
    fn test_advance_blocked_by_occupant() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 1), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 1, 1), PlayerId::SECOND);
        let log_len = s.log.len();

        let next = advance_units(&s);

        assert_eq!(next.board.get(Position::new(1, 3)).map(|u| u.card.id), Some(CardId::new(1)));
        assert_eq!(next.log.len(), log_len);
    }

    #[test]
    fn test_advance_blocked_by_diagonal_taunt() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 1), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 4), card(2, 1, 1).with_taunt(), PlayerId::SECOND);

        let next = advance_units(&s);

        assert!(!next.board.is_empty(Position::new(1, 3)));
        assert!(next.board.is_empty(Position::new(2, 3)));
        assert!(next.log.back().unwrap().contains("cannot move due to enemy Taunt unit C2 at 2,4"));
    }

    #[test]
    fn test_advance_off_board_wins() {
        let mut s = state();
        s.current_player = PlayerId::SECOND;
        s.spawn_unit(Position::new(0, 5), card(1, 1, 1), PlayerId::SECOND);
        s.spawn_unit(Position::new(3, 5), card(2, 1, 1), PlayerId::SECOND);

        let next = advance_units(&s);

        assert!(next.game_over);
        assert_eq!(next.winner, Some(PlayerId::SECOND));
        assert_eq!(next.message, "Player 2 Wins!");
        assert_eq!(next.log.back().unwrap(), "Turn 1: C1 reached enemy spawn! Player 2 Wins!");
        // The pass stopped before the second unit moved.
        assert!(!next.board.is_empty(Position::new(3, 5)));
    }

    #[test]
    fn test_battle_kills_at_zero() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 3, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 1, 3), PlayerId::SECOND);

        let next = battle_units(&s);

        assert!(next.board.is_empty(Position::new(2, 3)));
        assert_eq!(next.log.back().unwrap(), "Turn 1: C2 is defeated!");
    }

    #[test]
    fn test_battle_prefers_taunt() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 2, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 1, 5), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 2), card(3, 1, 5).with_taunt(), PlayerId::SECOND);

        let next = battle_units(&s);

        assert_eq!(next.board.get(Position::new(2, 2)).unwrap().current_health, 3);
        assert_eq!(next.board.get(Position::new(2, 3)).unwrap().current_health, 5);
    }

    #[test]
    fn test_rage_on_survival() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 2, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 4, 10).with_rage(), PlayerId::SECOND);

        let next = battle_units(&s);
        let target = next.board.get(Position::new(2, 3)).unwrap();

        assert_eq!(target.current_health, 8);
        assert_eq!(target.current_attack, 7);
        assert_eq!(target.max_health, 10);
        assert_eq!(next.log.back().unwrap(), "Turn 1: C2 Rager gains +3 attack from Rage!");
    }

    #[test]
    fn test_rage_does_not_fire_on_death() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 9, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 3), card(2, 4, 2).with_rage(), PlayerId::SECOND);

        let next = battle_units(&s);

        assert!(next.board.is_empty(Position::new(2, 3)));
        assert!(!next.log.iter().any(|l| l.contains("from Rage")));
    }

    #[test]
    fn test_excess_damage_on_home_row() {
        let mut s = state();
        s.spawn_unit(Position::new(3, 2), card(1, 5, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(4, 2), card(2, 1, 1), PlayerId::SECOND);

        let next = battle_units(&s);

        assert_eq!(next.player(PlayerId::SECOND).health, 26);
        assert!(next.board.is_empty(Position::new(4, 2)));
        assert!(next.log.iter().any(|l| l == "Turn 1: Excess damage of 4 dealt to Player 2's health!"));
    }

    #[test]
    fn test_no_excess_off_home_row() {
        let mut s = state();
        s.spawn_unit(Position::new(2, 2), card(1, 5, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(3, 2), card(2, 1, 1), PlayerId::SECOND);

        let next = battle_units(&s);

        assert_eq!(next.player(PlayerId::SECOND).health, 30);
        assert!(next.board.is_empty(Position::new(3, 2)));
    }

    #[test]
    fn test_exact_kill_on_home_row_has_no_excess() {
        let mut s = state();
        s.spawn_unit(Position::new(3, 2), card(1, 4, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(4, 2), card(2, 1, 4), PlayerId::SECOND);

        let next = battle_units(&s);

        assert_eq!(next.player(PlayerId::SECOND).health, 30);
        assert!(next.board.is_empty(Position::new(4, 2)));
    }

    #[test]
    fn test_one_target_per_attacker() {
        let mut s = state();
        s.spawn_unit(Position::new(1, 3), card(1, 1, 5), PlayerId::FIRST);
        s.spawn_unit(Position::new(2, 2), card(2, 1, 5), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 3), card(3, 1, 5), PlayerId::SECOND);
        s.spawn_unit(Position::new(2, 4), card(4, 1, 5), PlayerId::SECOND);

        let next = battle_units(&s);
        let damaged = next.board.units().filter(|(_, u)| u.current_health < u.max_health).count();

        assert_eq!(damaged, 1);
    }
}
