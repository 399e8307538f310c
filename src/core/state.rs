//! Game state snapshot.
//!
//! `GameState` is the single value every transition consumes and
//! produces. Collections are `im` persistent structures, so
//! `state.clone()` is cheap and a transition that clones, mutates and
//! returns the clone never touches the snapshot it was given.
//!
//! ## Contents
//!
//! - Rule configuration
//! - Board and both players (health, mana, deck, hand, fatigue)
//! - Turn bookkeeping: current player, turn number, first-turn flag
//! - Outcome: game over flag and winner
//! - Transient UI selection and status message
//! - Append-only narrative log

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::GameError;
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Board, Position};
use crate::cards::{Archetype, Card, Unit, UnitId};

/// Who is on the other side of player 2's seat. Only affects messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsAi,
}

/// Coarse lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players are still picking archetypes.
    SelectingDeck,
    /// The given player is in their play phase.
    Playing(PlayerId),
    /// Absorbing state.
    GameOver { winner: Option<PlayerId> },
}

/// Complete game snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Rules this game runs under.
    pub config: GameConfig,

    pub board: Board,

    pub players: PlayerMap<Player>,

    /// Player whose play phase it is.
    pub current_player: PlayerId,

    /// Turn number (starts at 1, increments when play returns to player 0).
    pub turn: u32,

    pub game_over: bool,

    pub winner: Option<PlayerId>,

    /// Card picked for placement, if any.
    pub selected_card: Option<Card>,

    /// Suppresses the advance phase until player 1 has been reached.
    pub is_first_turn: bool,

    /// Narrative log, one entry per notable event. Never truncated.
    pub log: Vector<String>,

    /// Last player-facing status line.
    pub message: String,

    pub mode: GameMode,

    next_unit_id: u32,
}

impl GameState {
    /// Create a state with empty decks and hands.
    ///
    /// Use `GameEngine::initialize_game` for a playable game; this
    /// constructor is the blank slate it fills.
    #[must_use]
    pub fn new(config: GameConfig, archetypes: [Archetype; 2], mode: GameMode) -> Self {
        let players = PlayerMap::new(|id| {
            Player::new(id, archetypes[id.index()], config.starting_health, config.starting_mana)
        });

        let mut log = Vector::new();
        log.push_back("Game started! Player 1 begins.".to_string());

        Self {
            board: Board::new(config.rows, config.cols),
            players,
            current_player: PlayerId::FIRST,
            turn: 1,
            game_over: false,
            winner: None,
            selected_card: None,
            is_first_turn: true,
            log,
            message: "Player 1 Turn: Draw phase - Starting your turn!".to_string(),
            mode,
            next_unit_id: 0,
            config,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver { winner: self.winner }
        } else {
            Phase::Playing(self.current_player)
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_mut(&mut self) -> &mut Player {
        let id = self.current_player;
        &mut self.players[id]
    }

    /// The acting player's spawn row.
    #[must_use]
    pub fn spawn_row(&self, player: PlayerId) -> usize {
        player.home_row(self.config.rows)
    }

    // === Log ===

    /// Append a raw log entry.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push_back(entry.into());
    }

    /// Append a log entry prefixed with the current turn.
    pub fn log_turn(&mut self, entry: impl std::fmt::Display) {
        let line = format!("Turn {}: {}", self.turn, entry);
        self.log.push_back(line);
    }

    // === Units ===

    /// Allocate a fresh unit ID.
    pub fn alloc_unit_id(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    /// Turn a card into a unit and write it into a cell.
    ///
    /// Applies Battlecast. Does not touch hand or mana.
    pub fn spawn_unit(&mut self, pos: Position, card: Card, owner: PlayerId) -> UnitId {
        let id = self.alloc_unit_id();
        let unit = Unit::from_card(id, card, owner, self.config.battlecast_bonus);
        self.board.set(pos, unit);
        id
    }

    // === Messages ===

    /// Display label for a seat, honouring the game mode.
    #[must_use]
    pub fn seat_label(&self, player: PlayerId) -> String {
        if player == PlayerId::SECOND && self.mode == GameMode::PlayerVsAi {
            "AI".to_string()
        } else {
            player.to_string()
        }
    }

    /// "Player 1 Wins!", "Player 2 Wins!" or "AI Wins!".
    #[must_use]
    pub fn win_message(&self, winner: PlayerId) -> String {
        format!("{} Wins!", self.seat_label(winner))
    }

    /// Status line announcing a player's play phase.
    #[must_use]
    pub fn play_phase_message(&self, player: PlayerId) -> String {
        let label = if player == PlayerId::SECOND && self.mode == GameMode::PlayerVsAi {
            "AI Turn".to_string()
        } else {
            format!("{player} Turn")
        };
        format!("{label}: Play phase - Place your units!")
    }

    /// Enter the terminal state with `winner`.
    pub fn declare_winner(&mut self, winner: PlayerId) {
        self.game_over = true;
        self.winner = Some(winner);
        self.message = self.win_message(winner);
        log::info!("game over on turn {}: {} wins", self.turn, winner);
    }

    /// Copy of this state reporting a rejected action.
    ///
    /// Only `message` changes, plus the selection for errors that void it.
    #[must_use]
    pub fn rejected(&self, error: &GameError) -> Self {
        log::warn!("{} action rejected: {error:?}", self.current_player);
        let mut next = self.clone();
        next.message = error.to_string();
        if !error.keeps_selection() {
            next.selected_card = None;
        }
        next
    }
}
