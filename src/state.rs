//! Complete game state and its pure transition.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract, assert_transition};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Square};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, instrument};

/// Board, whose turn it is, and the outcome derived from the board.
///
/// Only [`GameState::apply`] produces a changed state, so the fields can
/// never drift apart. Serializes to a JSON snapshot for presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next; left at the last mover once decided.
    current_turn: Mark,
    /// Outcome of `board`.
    outcome: Outcome,
}

impl GameState {
    /// Creates the canonical starting state: empty board, First to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::First,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the empty cells while the game is undecided, otherwise nothing.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.outcome.is_decided() {
            Vec::new()
        } else {
            Position::empty_positions(&self.board)
        }
    }

    /// Places the current mark, returning the next state.
    ///
    /// The outcome is recomputed over the whole board. The turn passes to the
    /// opponent only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyDecided`] once won or drawn
    /// - [`MoveError::OutOfRange`] for coordinates outside `0..3`
    /// - [`MoveError::CellOccupied`] when the cell holds a mark
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn apply(&self, mv: Move) -> Result<GameState, MoveError> {
        let pos = MoveContract::pre(self, &mv)?;

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.current_turn));
        next.outcome = rules::evaluate(&next.board);
        if !next.outcome.is_decided() {
            next.current_turn = self.current_turn.opponent();
        }
        debug!(position = %pos, outcome = ?next.outcome, "Mark placed");

        assert_transition(self, &next);
        Ok(next)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, current_turn: Mark, outcome: Outcome) -> Self {
        Self {
            board,
            current_turn,
            outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
