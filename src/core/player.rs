//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Player 0 starts on row 0
//! and advances towards higher rows; player 1 starts on the last row and
//! advances towards row 0.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Health, mana, deck, hand and fatigue for one seat.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Archetype, Card, CardId};

/// One of the two players. Indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first and spawns on row 0.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who spawns on the last row.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID. Only 0 and 1 are meaningful.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Row delta applied when this player's units advance.
    #[must_use]
    pub const fn direction(self) -> isize {
        if self.0 == 0 {
            1
        } else {
            -1
        }
    }

    /// This player's spawn (home) row on a board with `rows` rows.
    ///
    /// ```
    /// use grid_ccg::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.home_row(5), 0);
    /// assert_eq!(PlayerId::SECOND.home_row(5), 4);
    /// ```
    #[must_use]
    pub const fn home_row(self, rows: usize) -> usize {
        if self.0 == 0 {
            0
        } else {
            rows - 1
        }
    }

    /// Both players in seat order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use grid_ccg::core::{PlayerId, PlayerMap};
///
/// let mut health: PlayerMap<i32> = PlayerMap::new(|_| 30);
/// health[PlayerId::SECOND] -= 4;
///
/// assert_eq!(health[PlayerId::FIRST], 30);
/// assert_eq!(health[PlayerId::SECOND], 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's seat state.
///
/// `deck` is drawn from the back; `hand` is unordered for rule purposes
/// but keeps draw order for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub health: i32,
    pub mana: u32,
    pub mana_capacity: u32,
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub archetype: Archetype,
    /// Cumulative fatigue counter; each empty-deck draw deals the new total.
    pub fatigue_damage: i32,
}

impl Player {
    /// Create a player with an empty deck and hand.
    #[must_use]
    pub fn new(id: PlayerId, archetype: Archetype, health: i32, mana: u32) -> Self {
        Self {
            id,
            health,
            mana,
            mana_capacity: mana,
            deck: Vector::new(),
            hand: Vector::new(),
            archetype,
            fatigue_damage: 0,
        }
    }

    /// Find a card in hand by ID.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove a card from hand.
    ///
    /// Returns the removed card, or `None` if it was not in hand.
    pub fn remove_from_hand(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Take the top (last) card of the deck.
    pub fn pop_deck(&mut self) -> Option<Card> {
        self.deck.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_direction_and_home_rows() {
        assert_eq!(PlayerId::FIRST.direction(), 1);
        assert_eq!(PlayerId::SECOND.direction(), -1);
        assert_eq!(PlayerId::FIRST.home_row(7), 0);
        assert_eq!(PlayerId::SECOND.home_row(7), 6);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &0), (PlayerId::SECOND, &10)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_hand_and_deck() {
        let mut player = Player::new(PlayerId::FIRST, Archetype::Orc, 30, 1);
        player.deck.push_back(Card::new(CardId::new(1), "Bottom", 1, 1, 1, Archetype::Orc));
        player.deck.push_back(Card::new(CardId::new(2), "Top", 2, 2, 2, Archetype::Orc));

        let drawn = player.pop_deck().unwrap();
        assert_eq!(drawn.id, CardId::new(2));
        player.hand.push_back(drawn);

        assert!(player.hand_card(CardId::new(2)).is_some());
        assert_eq!(player.remove_from_hand(CardId::new(2)).map(|c| c.name), Some("Top".to_string()));
        assert!(player.remove_from_hand(CardId::new(2)).is_none());
        assert_eq!(player.deck.len(), 1);
    }
}
