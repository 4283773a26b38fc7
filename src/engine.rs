//! Tic-tac-toe game engine.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::state::GameState;
use tracing::{debug, info, instrument};

/// Owns one game and applies moves and resets to it.
///
/// Single-threaded and synchronous. Independent games each get their own
/// engine; nothing is shared between instances.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: Self::initialize(),
        }
    }

    /// Produces the canonical starting state.
    pub fn initialize() -> GameState {
        GameState::new()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the cells the current player may still take.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.state.legal_moves()
    }

    /// Places the current mark at `(row, column)`.
    ///
    /// A rejected move leaves the state exactly as it was; the caller may
    /// ignore the error and keep rendering [`GameEngine::state`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<&GameState, MoveError> {
        self.play(Move::new(row, column))
    }

    /// Applies a parsed [`Move`]. See [`GameEngine::apply_move`].
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn play(&mut self, mv: Move) -> Result<&GameState, MoveError> {
        match self.state.apply(mv) {
            Ok(next) => {
                if next.outcome().is_decided() {
                    info!(outcome = %next.outcome(), "Game decided");
                }
                self.state = next;
                Ok(&self.state)
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                Err(e)
            }
        }
    }

    /// Discards the current game and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        info!("Game reset");
        self.state = Self::initialize();
        &self.state
    }
}
