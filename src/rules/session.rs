//! Game lifecycle around a single match.
//!
//! A `Session` starts in deck selection, becomes a running game once both
//! seats have an archetype, and can be restarted with the same archetypes
//! or sent back to deck selection. In player-vs-AI mode the AI's
//! archetype is picked at random as soon as the human chooses.

use crate::cards::Archetype;
use crate::core::{Action, GameError, GameMode, GameState, Phase, PlayerId, RandomSource};

use super::engine::{GameEngine, RulesEngine};

/// Deck selection progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckSelection {
    pub mode: GameMode,
    /// Player 1's archetype once chosen (player-vs-player only).
    pub first_choice: Option<Archetype>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Session {
    SelectingDeck(DeckSelection),
    Playing(GameState),
}

impl Session {
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Session::SelectingDeck(DeckSelection {
            mode,
            first_choice: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Session::SelectingDeck(_) => Phase::SelectingDeck,
            Session::Playing(state) => state.phase(),
        }
    }

    /// The running game, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        match self {
            Session::SelectingDeck(_) => None,
            Session::Playing(state) => Some(state),
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        match self {
            Session::SelectingDeck(selection) => selection.mode,
            Session::Playing(state) => state.mode,
        }
    }

    /// Record the next seat's archetype choice.
    ///
    /// Starts the game once both seats are filled.
    pub fn choose_deck<R: RandomSource>(
        &self,
        engine: &mut GameEngine<R>,
        key: &str,
    ) -> Result<Session, GameError> {
        let Session::SelectingDeck(selection) = self else {
            return Err(GameError::NotSelectingDeck);
        };
        let archetype = Archetype::from_key(key)?;

        let (first, second) = match (selection.first_choice, selection.mode) {
            (Some(first), _) => (first, archetype),
            (None, GameMode::PlayerVsAi) => {
                let ai = engine.random_archetype();
                log::debug!("AI picked {}", ai.name());
                (archetype, ai)
            }
            (None, GameMode::PlayerVsPlayer) => {
                return Ok(Session::SelectingDeck(DeckSelection {
                    mode: selection.mode,
                    first_choice: Some(archetype),
                }));
            }
        };

        Ok(Session::Playing(engine.start_game(first, second, selection.mode)?))
    }

    /// Apply an in-game action. Ignored during deck selection.
    #[must_use]
    pub fn dispatch<E: RulesEngine>(&self, rules: &E, action: &Action) -> Session {
        match self {
            Session::Playing(state) => Session::Playing(rules.apply_action(state, action)),
            Session::SelectingDeck(_) => self.clone(),
        }
    }

    /// New game with the same archetypes and mode.
    ///
    /// During deck selection there is nothing to restart.
    pub fn restart<R: RandomSource>(&self, engine: &mut GameEngine<R>) -> Result<Session, GameError> {
        match self {
            Session::Playing(state) => {
                let first = state.player(PlayerId::FIRST).archetype;
                let second = state.player(PlayerId::SECOND).archetype;
                Ok(Session::Playing(engine.start_game(first, second, state.mode)?))
            }
            Session::SelectingDeck(_) => Ok(self.clone()),
        }
    }

    /// Abandon the current game and return to deck selection.
    #[must_use]
    pub fn back_to_menu(&self) -> Session {
        Session::new(self.mode())
    }
}
