//! Card system: archetypes, cards, units, and generation.
//!
//! ## Key Types
//!
//! - `Archetype`: The four factions and their stat bias
//! - `Card`: Immutable deck/hand card
//! - `Unit`: A card placed on the board, with mutable combat stats
//! - `generate_deck`: Randomized 15-card deck per archetype

pub mod archetype;
pub mod card;
pub mod generator;
pub mod unit;

pub use archetype::{Archetype, ArchetypeInfo, StatBias};
pub use card::{Card, CardId};
pub use generator::{generate_card, generate_deck, generate_preview_deck};
pub use unit::{Unit, UnitId};
