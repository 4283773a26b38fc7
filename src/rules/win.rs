//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Every line of three, in tie-break order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed line in [`LINES`] order,
/// so a board with several completed lines still has one answer.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => Some(mark),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in cells {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::First),
            (Position::TopCenter, Mark::First),
            (Position::TopRight, Mark::First),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::First));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(&[
            (Position::TopCenter, Mark::Second),
            (Position::Center, Mark::Second),
            (Position::BottomCenter, Mark::Second),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::Second));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::Second),
            (Position::Center, Mark::Second),
            (Position::BottomLeft, Mark::Second),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::Second));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Mark::First),
            (Position::TopCenter, Mark::First),
            (Position::TopRight, Mark::Second),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_multiple_rows_first_row_wins() {
        let board = board_with(&[
            (Position::BottomLeft, Mark::Second),
            (Position::BottomCenter, Mark::Second),
            (Position::BottomRight, Mark::Second),
            (Position::TopLeft, Mark::First),
            (Position::TopCenter, Mark::First),
            (Position::TopRight, Mark::First),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::First));
    }

    #[test]
    fn test_multiple_columns_leftmost_wins() {
        let board = board_with(&[
            (Position::TopRight, Mark::First),
            (Position::MiddleRight, Mark::First),
            (Position::BottomRight, Mark::First),
            (Position::TopLeft, Mark::Second),
            (Position::MiddleLeft, Mark::Second),
            (Position::BottomLeft, Mark::Second),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::Second));
    }
}
