//! Cell selections and the errors they can produce.
//!
//! A [`Move`] is the caller's intent: "place the current mark at this cell".
//! It names no player; the engine always plays the mark whose turn it is.

use crate::outcome::Outcome;
use crate::position::Position;
use std::str::FromStr;
use tracing::instrument;

/// A requested placement at `(row, column)`.
///
/// Coordinates are not range-checked here; the engine reports
/// out-of-range selections as [`MoveError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// Row, expected in `0..3`.
    pub row: usize,
    /// Column, expected in `0..3`.
    pub column: usize,
}

impl Move {
    /// Returns the board position, if the coordinates are on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.row, self.column)
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::new(pos.row(), pos.column())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Text that is neither `row column` nor a position label.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot read {:?} as a move (expected \"row column\" or a label like \"center\")", input)]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts `"1 2"`, `"1,2"` or a label such as `"top-left"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };

        if let Some(pos) = Position::from_label(s) {
            return Ok(pos.into());
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [row, column] => {
                let row = row.parse::<usize>().map_err(|_| err())?;
                let column = column.parse::<usize>().map_err(|_| err())?;
                Ok(Self::new(row, column))
            }
            _ => Err(err()),
        }
    }
}

/// Why a move was declined. The game state is never changed by a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, column)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameAlreadyDecided(Outcome),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("1 2".parse::<Move>(), Ok(Move::new(1, 2)));
        assert_eq!(" 0,0 ".parse::<Move>(), Ok(Move::new(0, 0)));
        assert_eq!("2, 1".parse::<Move>(), Ok(Move::new(2, 1)));
    }

    #[test]
    fn test_parse_out_of_range_is_still_a_move() {
        let mv: Move = "3 0".parse().unwrap();
        assert_eq!(mv.position(), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("center".parse::<Move>(), Ok(Move::new(1, 1)));
        assert_eq!("Top-Left".parse::<Move>(), Ok(Move::new(0, 0)));
        assert_eq!("bottom right".parse::<Move>(), Ok(Move::new(2, 2)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Move>().is_err());
        assert!("-1 0".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
        assert!("middle".parse::<Move>().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::CellOccupied(Position::Center);
        assert_eq!(err.to_string(), "Center is already occupied");

        let err = MoveError::OutOfRange { row: 3, column: 0 };
        assert!(err.to_string().contains("off the board"));
    }
}
