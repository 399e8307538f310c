//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! Everything the turn pipeline and combat resolver operate on lives here.
//! Rules are configured via `GameConfig` rather than hard-coded constants.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::GameConfig;
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{GameMode, GameState, Phase};
