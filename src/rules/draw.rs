//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: full board and no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::First));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let marks = [
            Mark::First,
            Mark::Second,
            Mark::First,
            Mark::Second,
            Mark::First,
            Mark::First,
            Mark::Second,
            Mark::First,
            Mark::Second,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::First));
        board.set(Position::TopCenter, Square::Occupied(Mark::First));
        board.set(Position::TopRight, Square::Occupied(Mark::First));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::Second));
        board.set(Position::Center, Square::Occupied(Mark::Second));

        assert!(!is_draw(&board));
    }
}
