//! Derived game outcome.

use crate::types::Mark;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Never stored independently of the board it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    /// No line completed and cells remain.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins!", mark),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}
