//! First-class invariants over [`GameState`].
//!
//! Invariants are logical properties that hold after every successful move.
//! A violation is a bug in the engine, never a user error, so they are
//! checked in debug builds and logged rather than returned to callers.

use crate::outcome::Outcome;
use crate::rules;
use crate::state::GameState;
use crate::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: First has placed the same number of marks as Second, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let first = state.board().count(Mark::First);
        let second = state.board().count(Mark::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First marks minus Second marks is 0 or 1"
    }
}

/// Invariant: the current turn agrees with the marks on the board.
///
/// While in progress, First is to move exactly when the counts are equal.
/// Once decided, the turn stays with whoever moved last.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let balanced = state.board().count(Mark::First) == state.board().count(Mark::Second);
        let expected = match (state.outcome().is_decided(), balanced) {
            (false, true) | (true, false) => Mark::First,
            (false, false) | (true, true) => Mark::Second,
        };
        state.current_turn() == expected
    }

    fn description() -> &'static str {
        "Current turn matches the mark counts on the board"
    }
}

/// Invariant: the stored outcome equals a fresh evaluation of the board.
pub struct OutcomeDerivedInvariant;

impl Invariant<GameState> for OutcomeDerivedInvariant {
    fn holds(state: &GameState) -> bool {
        let fresh: Outcome = rules::evaluate(state.board());
        state.outcome() == fresh
    }

    fn description() -> &'static str {
        "Outcome is derived from the board"
    }
}

/// All game-state invariants as a composable set.
pub type GameStateInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    OutcomeDerivedInvariant,
);
