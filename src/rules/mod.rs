//! Game rules: turn pipeline, combat, win detection and lifecycle.
//!
//! ## Key Types
//!
//! - `RulesEngine`: The action seam (`apply_action`, `legal_actions`)
//! - `GameEngine`: Builds games and implements `RulesEngine`
//! - `Session`: Deck selection, restart and return to menu

pub mod combat;
pub mod engine;
pub mod session;
pub mod turn;
pub mod win;

pub use combat::{advance_units, battle_units, select_target, taunt_blocker};
pub use engine::{dispatch, GameEngine, RulesEngine};
pub use session::{DeckSelection, Session};
pub use turn::{battle_phase, draw_card_or_fatigue, end_turn, place_card, refresh_mana, select_card};
pub use win::{check_win_condition, settle_winner};
