//! Tests for tic-tac-toe positions.

use strictly_tictactoe::{Board, Mark, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_coordinates_agree_with_index() {
    for pos in Position::ALL {
        assert_eq!(Position::from_coords(pos.row(), pos.column()), Some(pos));
        assert_eq!(pos.to_index(), pos.row() * 3 + pos.column());
    }
    assert_eq!(Position::from_coords(0, 2), Some(Position::TopRight));
    assert_eq!(Position::from_coords(2, 0), Some(Position::BottomLeft));
    assert_eq!(Position::from_coords(3, 0), None);
    assert_eq!(Position::from_coords(1, 3), None);
}

#[test]
fn test_from_label() {
    assert_eq!(Position::from_label("center"), Some(Position::Center));
    assert_eq!(Position::from_label("MIDDLE_RIGHT"), Some(Position::MiddleRight));
    assert_eq!(Position::from_label("top"), None);
}

#[test]
fn test_empty_positions_empty_board() {
    let board = Board::new();
    assert_eq!(Position::empty_positions(&board).len(), 9);
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::First));
    board.set(Position::Center, Square::Occupied(Mark::Second));

    let valid = Position::empty_positions(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
