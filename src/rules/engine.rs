//! Game construction and action dispatch.
//!
//! `GameEngine` owns the rule configuration and the random source. It
//! builds new games (deck generation, opening hands) and implements
//! `RulesEngine`, the seam every caller goes through to move a game
//! forward: human UIs, the scripted opponent and tests alike.

use crate::board::Position;
use crate::cards::{generate_deck, generate_preview_deck, Archetype, Card};
use crate::core::{Action, GameConfig, GameError, GameMode, GameRng, GameRngState, GameState, PlayerId, RandomSource};

use super::turn::{battle_phase, end_turn, place_card, select_card};

/// Rules seam for driving a game.
///
/// ## Implementation Notes
///
/// - `apply_action` never mutates its input and never fails; rejected
///   actions come back as a state carrying the reason in `message`
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    /// Apply an action to a snapshot.
    fn apply_action(&self, state: &GameState, action: &Action) -> GameState;

    /// The winner, once the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<PlayerId> {
        if state.game_over {
            state.winner
        } else {
            None
        }
    }

    /// Every action the current player can take that would not be rejected.
    ///
    /// `EndTurn` is always available while the game runs.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.game_over {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if state.selected_card.is_some() {
            let row = state.spawn_row(state.current_player);
            actions.extend(
                (0..state.board.cols())
                    .filter(|&col| state.board.is_empty(Position::new(row, col)))
                    .map(|col| Action::PlaceCard { row, col }),
            );
        }

        let player = state.current();
        actions.extend(
            player
                .hand
                .iter()
                .filter(|card| card.cost <= player.mana)
                .map(|card| Action::SelectCard(card.clone())),
        );
        actions.push(Action::EndTurn);
        actions
    }
}

/// Route one action to its transition.
#[must_use]
pub fn dispatch(state: &GameState, action: &Action) -> GameState {
    log::trace!("{}: {action}", state.current_player);
    match action {
        Action::SelectCard(card) => select_card(state, card),
        Action::PlaceCard { row, col } => place_card(state, *row, *col),
        Action::EndTurn => end_turn(state),
        Action::BattlePhase => battle_phase(state),
        Action::AddLog(entry) => {
            let mut next = state.clone();
            next.push_log(entry.clone());
            next
        }
    }
}

/// Builds games and applies actions.
///
/// ## Example
///
/// ```
/// use grid_ccg::core::{Action, GameConfig, PlayerId};
/// use grid_ccg::rules::{GameEngine, RulesEngine};
///
/// let mut engine = GameEngine::new(GameConfig::default(), 42);
/// let state = engine.initialize_game("orc", "human").unwrap();
/// assert_eq!(state.current().hand.len(), 3);
///
/// let next = engine.apply_action(&state, &Action::EndTurn);
/// assert_eq!(next.current_player, PlayerId::SECOND);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Engine with a seeded ChaCha8 stream.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        let rng = GameRng::from_entropy();
        log::info!("engine seeded with {}", rng.seed());
        Self::with_rng(config, rng)
    }

    /// Engine resuming a captured random stream.
    #[must_use]
    pub fn from_rng_state(config: GameConfig, state: &GameRngState) -> Self {
        Self::with_rng(config, GameRng::from_state(state))
    }

    /// Capture the random stream, e.g. before building a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Engine over any random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a player-vs-player game from two archetype keys.
    pub fn initialize_game(&mut self, first: &str, second: &str) -> Result<GameState, GameError> {
        let first = Archetype::from_key(first)?;
        let second = Archetype::from_key(second)?;
        self.start_game(first, second, GameMode::PlayerVsPlayer)
    }

    /// Start a game: generate both decks and deal opening hands.
    pub fn start_game(
        &mut self,
        first: Archetype,
        second: Archetype,
        mode: GameMode,
    ) -> Result<GameState, GameError> {
        self.config.validate()?;

        let mut state = GameState::new(self.config.clone(), [first, second], mode);
        for (id, archetype) in [(PlayerId::FIRST, first), (PlayerId::SECOND, second)] {
            let deck = generate_deck(archetype, &self.config, &mut self.rng);
            let player = state.player_mut(id);
            player.deck = deck.into_iter().collect();
            for _ in 0..self.config.starting_hand_size {
                if let Some(card) = player.pop_deck() {
                    player.hand.push_back(card);
                }
            }
        }

        log::info!("new {mode:?} game: {} vs {}", first.name(), second.name());
        Ok(state)
    }

    /// An unshuffled deck for browsing an archetype.
    pub fn generate_preview_deck(&mut self, key: &str) -> Result<Vec<Card>, GameError> {
        self.config.validate()?;
        let archetype = Archetype::from_key(key)?;
        Ok(generate_preview_deck(archetype, &self.config, &mut self.rng))
    }

    /// Uniformly pick an archetype, as the scripted opponent does.
    pub fn random_archetype(&mut self) -> Archetype {
        let last = (Archetype::ALL.len() - 1) as u32;
        Archetype::ALL[self.rng.gen_range_inclusive(0, last) as usize]
    }
}

impl<R: RandomSource> RulesEngine for GameEngine<R> {
    fn apply_action(&self, state: &GameState, action: &Action) -> GameState {
        dispatch(state, action)
    }
}
