//! Cards as they sit in a deck or hand.
//!
//! A `Card` is immutable once generated. Placing it on the board copies it
//! into a `Unit`, which owns the mutable combat stats.

use serde::{Deserialize, Serialize};

use super::archetype::Archetype;

/// Identifier of a card within one player's deck.
///
/// Unique per deck and stable for the whole game. The two players' decks
/// reuse the same range, so a `CardId` only means something together with
/// its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

pub(crate) const TAUNT_TEXT: &str = "Has Taunt: Enemies must attack this unit first.";
pub(crate) const BASIC_TEXT: &str = "Basic unit with no special abilities";

/// Battlecast bonus under the standard rules.
pub const STANDARD_BATTLECAST_BONUS: i32 = 2;

/// Rage bonus under the standard rules.
pub const STANDARD_RAGE_BONUS: i32 = 3;

/// A card in a deck or hand.
///
/// `archetype` holds the catalog key rather than the enum so that cards
/// coming back from a UI boundary can carry keys the catalog rejects.
///
/// ## Example
///
/// ```
/// use grid_ccg::cards::{Archetype, Card, CardId};
///
/// let card = Card::new(CardId::new(1), "Orc Guardian", 3, 2, 5, Archetype::Orc).with_taunt();
/// assert!(card.has_taunt);
/// assert_eq!(card.max_health, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub cost: u32,
    pub attack: i32,
    pub health: i32,
    /// Health at generation time.
    pub max_health: i32,
    /// Archetype catalog key.
    pub archetype: String,
    pub has_taunt: bool,
    pub has_battlecast: bool,
    pub has_rage: bool,
    pub description: String,
}

impl Card {
    /// Create a plain card with no abilities.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        attack: i32,
        health: i32,
        archetype: Archetype,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            attack,
            health,
            max_health: health,
            archetype: archetype.key().to_string(),
            has_taunt: false,
            has_battlecast: false,
            has_rage: false,
            description: BASIC_TEXT.to_string(),
        }
    }

    /// Give the card Taunt.
    #[must_use]
    pub fn with_taunt(mut self) -> Self {
        self.has_taunt = true;
        self.description = TAUNT_TEXT.to_string();
        self
    }

    /// Give the card Battlecast with the standard +2/+2.
    #[must_use]
    pub fn with_battlecast(self) -> Self {
        self.with_battlecast_bonus(STANDARD_BATTLECAST_BONUS)
    }

    /// Give the card Battlecast, describing a `bonus`/`bonus` gain on placement.
    ///
    /// The gain itself is applied from `GameConfig::battlecast_bonus` when
    /// the unit is spawned; pass the same value here.
    #[must_use]
    pub fn with_battlecast_bonus(mut self, bonus: i32) -> Self {
        self.has_battlecast = true;
        self.name.push_str(" Battlecaster");
        self.description
            .push_str(&format!(" Battlecast: Gains +{bonus}/+{bonus} when played."));
        self
    }

    /// Give the card Rage with the standard +3 attack.
    #[must_use]
    pub fn with_rage(self) -> Self {
        self.with_rage_bonus(STANDARD_RAGE_BONUS)
    }

    /// Give the card Rage, describing a `bonus` attack gain on surviving damage.
    #[must_use]
    pub fn with_rage_bonus(mut self, bonus: i32) -> Self {
        self.has_rage = true;
        self.name.push_str(" Rager");
        self.description
            .push_str(&format!(" Rage: Gains +{bonus} attack when it takes damage."));
        self
    }

    /// Override the archetype key (used to model cards from untrusted input).
    #[must_use]
    pub fn with_archetype_key(mut self, key: impl Into<String>) -> Self {
        self.archetype = key.into();
        self
    }

    /// Whether the card carries Battlecast or Rage.
    #[must_use]
    pub fn has_effect(&self) -> bool {
        self.has_battlecast || self.has_rage
    }
}
