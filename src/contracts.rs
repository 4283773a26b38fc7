//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move may be applied at all; a failed
//! precondition becomes a [`MoveError`] and the state is left untouched.
//! Postconditions verify the transition kept every invariant.

use crate::action::{Move, MoveError};
use crate::invariants::{GameStateInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::state::GameState;
use crate::types::Square;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a passing precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not been won or drawn.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects any move once the outcome is settled.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        let outcome = state.outcome();
        if outcome.is_decided() {
            Err(MoveError::GameAlreadyDecided(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates fall on the board.
pub struct OnBoard;

impl OnBoard {
    /// Resolves the move to a position.
    #[instrument]
    pub fn check(mov: &Move) -> Result<Position, MoveError> {
        mov.position().ok_or(MoveError::OutOfRange {
            row: mov.row,
            column: mov.column,
        })
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a position that already holds a mark.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: on board, undecided, empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, yielding the target position.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<Position, MoveError> {
        let pos = OnBoard::check(mov)?;
        GameUndecided::check(state)?;
        CellIsEmpty::check(pos, state)?;
        Ok(pos)
    }
}

/// Contract for placing the current mark.
///
/// Postconditions:
/// - Exactly one previously empty cell became occupied; no other cell changed
/// - All [`GameStateInvariants`] hold afterwards
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    type Checked = Position;

    fn pre(state: &GameState, action: &Move) -> Result<Position, MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match GameStateInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let changed: Vec<_> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(b, a)| b != a)
            .collect();
        let single_placement =
            matches!(changed.as_slice(), [(Square::Empty, Square::Occupied(_))]);
        if !single_placement {
            violations.push(InvariantViolation::new(
                "A move fills exactly one empty cell",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts the transition kept its contract (panics on violation in debug builds).
#[instrument(skip(before, after))]
pub fn assert_transition(before: &GameState, after: &GameState) {
    let result = MoveContract::post(before, after);
    if let Err(violations) = &result {
        warn!(?violations, "Move postcondition violated");
    }
    debug_assert!(result.is_ok(), "Move postcondition violated: {:?}", result);
}
