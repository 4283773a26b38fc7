//! Core domain types for tic-tac-toe.

use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
pub enum Mark {
    /// First player, shown as "X". Always opens the game.
    #[display("X")]
    First,
    /// Second player, shown as "O".
    #[display("O")]
    Second,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Returns the display symbol ("X" or "O").
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::First => "X",
            Mark::Second => "O",
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, column)`, or `None` off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Square> {
        Position::from_coords(row, column).map(|pos| self.get(pos))
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the board as three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = [Square; 3]> + '_ {
        self.squares.chunks_exact(3).map(|row| [row[0], row[1], row[2]])
    }

    /// Counts the cells holding `mark`.
    #[instrument(skip(self))]
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            let cells: Vec<&str> = row
                .iter()
                .map(|sq| sq.mark().map_or(".", Mark::symbol))
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
