//! # grid-ccg
//!
//! A deterministic two-player grid battle card game engine.
//!
//! Players draw cards from randomized archetype decks, spend mana to place
//! them as units on their spawn row, and at the end of each turn their
//! units fight the enemies in front of them. On the opponent's turn start
//! the opponent's units march forward; a unit that walks off the far edge
//! wins the game, as does reducing the enemy player to zero health.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a `GameState` snapshot
//!    and returns a new one. Snapshots are `im`-backed, so cloning is cheap
//!    and callers may keep as much history as they like.
//!
//! 2. **Injected randomness**: deck generation draws from a `RandomSource`;
//!    the same seed always yields the same decks.
//!
//! 3. **Configuration over constants**: board size, health, mana, hand
//!    limit and deck recipe live in `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Archetypes, cards, units and deck generation
//! - `board`: The battlefield grid
//! - `rules`: Turn pipeline, combat, win detection, sessions

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

pub use crate::core::{
    Action, GameConfig, GameError, GameMode, GameRng, GameRngState, GameState, Phase, Player, PlayerId, PlayerMap,
    RandomSource,
};

pub use crate::board::{Board, Position};

pub use crate::cards::{Archetype, ArchetypeInfo, Card, CardId, StatBias, Unit, UnitId};

pub use crate::rules::{check_win_condition, GameEngine, RulesEngine, Session};
