//! Game rules for tic-tac-toe.
//!
//! Pure functions over a whole board. Nothing here carries state between
//! moves; the outcome is recomputed from scratch after every placement.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates the board: a completed line wins, otherwise a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
