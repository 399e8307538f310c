//! Units - cards placed on the board.
//!
//! A `Unit` copies its `Card` at placement time and tracks the stats that
//! change in combat. Every unit gets a `UnitId` unique within the game, so
//! a combat pass can tell whether a cell still holds the unit it recorded.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::PlayerId;

/// Unique identifier of a unit within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A board occupant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// The card this unit was created from, as it was in hand.
    pub card: Card,
    pub owner: PlayerId,
    /// Fixed at placement, after Battlecast.
    pub max_health: i32,
    pub current_health: i32,
    /// Grows with Rage.
    pub current_attack: i32,
}

impl Unit {
    /// Instantiate a unit from a card.
    ///
    /// A Battlecast card gains `battlecast_bonus` attack, health and max health.
    #[must_use]
    pub fn from_card(id: UnitId, card: Card, owner: PlayerId, battlecast_bonus: i32) -> Self {
        let bonus = if card.has_battlecast { battlecast_bonus } else { 0 };
        Self {
            id,
            max_health: card.health + bonus,
            current_health: card.health + bonus,
            current_attack: card.attack + bonus,
            card,
            owner,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    #[must_use]
    pub fn has_taunt(&self) -> bool {
        self.card.has_taunt
    }

    #[must_use]
    pub fn has_rage(&self) -> bool {
        self.card.has_rage
    }

    #[must_use]
    pub fn is_enemy_of(&self, player: PlayerId) -> bool {
        self.owner != player
    }
}
