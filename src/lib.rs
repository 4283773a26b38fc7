//! Strictly Tic-Tac-Toe - a tic-tac-toe game-state engine
//!
//! The engine owns the board, whose turn it is and the outcome, and is the
//! only thing that changes them. Presentation code reads [`GameState`] and
//! forwards cell selections and restarts into [`GameEngine`].
//!
//! # Architecture
//!
//! - **Engine**: move application and reset over a single [`GameState`]
//! - **Rules**: pure win/draw evaluation over a whole [`Board`]
//! - **Contracts**: move preconditions and postcondition invariants
//! - **Console**: a line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, Mark, MoveError, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.apply_move(row, column).unwrap();
//! }
//! assert_eq!(engine.state().outcome(), Outcome::Won(Mark::First));
//!
//! // The board is frozen until reset.
//! assert!(matches!(
//!     engine.apply_move(2, 2),
//!     Err(MoveError::GameAlreadyDecided(_))
//! ));
//! engine.reset();
//! assert_eq!(engine.state().current_turn(), Mark::First);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod console;
mod contracts;
mod engine;
mod invariants;
mod outcome;
mod position;
mod state;
mod types;

pub mod rules;

// Crate-level exports - Core types
pub use outcome::Outcome;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Mark, Square};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError, ParseMoveError};

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, Contract, GameUndecided, LegalMove, MoveContract, OnBoard};
pub use invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeDerivedInvariant, TurnParityInvariant,
};

// Crate-level exports - Terminal front end
pub use config::{ConfigError, FrontendConfig, Symbols};
pub use console::{Command, Console, render_board, replay, status_text};
