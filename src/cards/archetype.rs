//! Archetype catalog.
//!
//! The four playable factions. Icons and colours belong to the UI; the
//! engine only needs the key, a display name, a blurb and the stat bias
//! the generator applies.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Linear stat bias against card cost.
///
/// Generated stats are `floor(cost * per_cost + jitter)` with jitter in `[0, 2)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatBias {
    pub attack_per_cost: f64,
    pub health_per_cost: f64,
}

impl StatBias {
    /// Profile used for every Taunt card regardless of archetype.
    pub const GUARDIAN: StatBias = StatBias::new(0.6, 1.4);

    /// Profile for archetypes without a specific bias.
    pub const EVEN: StatBias = StatBias::new(1.0, 1.0);

    #[must_use]
    pub const fn new(attack_per_cost: f64, health_per_cost: f64) -> Self {
        Self {
            attack_per_cost,
            health_per_cost,
        }
    }
}

/// Static metadata for one archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeInfo {
    pub archetype: Archetype,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub bias: StatBias,
}

static CATALOG: [ArchetypeInfo; 4] = [
    ArchetypeInfo {
        archetype: Archetype::Orc,
        key: "orc",
        name: "Orc",
        description: "Aggressive warriors with high attack",
        bias: StatBias::new(1.2, 0.8),
    },
    ArchetypeInfo {
        archetype: Archetype::Undead,
        key: "undead",
        name: "Undead",
        description: "Masters of summoning and board control",
        bias: StatBias::EVEN,
    },
    ArchetypeInfo {
        archetype: Archetype::Human,
        key: "human",
        name: "Human",
        description: "Versatile healers and magic users",
        bias: StatBias::new(0.9, 1.1),
    },
    ArchetypeInfo {
        archetype: Archetype::Minotaur,
        key: "minotaur",
        name: "Minotaur",
        description: "Tanky warriors with high durability",
        bias: StatBias::new(0.8, 1.3),
    },
];

/// A playable faction. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Orc,
    Undead,
    Human,
    Minotaur,
}

impl Archetype {
    /// All archetypes in catalog order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Orc,
        Archetype::Undead,
        Archetype::Human,
        Archetype::Minotaur,
    ];

    /// Look up an archetype by its key.
    ///
    /// ```
    /// use grid_ccg::cards::Archetype;
    ///
    /// assert_eq!(Archetype::from_key("orc").unwrap(), Archetype::Orc);
    /// assert!(Archetype::from_key("elf").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, GameError> {
        CATALOG
            .iter()
            .find(|info| info.key == key)
            .map(|info| info.archetype)
            .ok_or_else(|| GameError::UnknownArchetype { key: key.to_string() })
    }

    /// Catalog entry for this archetype.
    #[must_use]
    pub fn info(self) -> &'static ArchetypeInfo {
        &CATALOG[self as usize]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.info().key
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[must_use]
    pub fn bias(self) -> StatBias {
        self.info().bias
    }
}

impl std::str::FromStr for Archetype {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
