//! Line-oriented terminal front end.
//!
//! Reads commands, forwards cell selections and restarts to the engine,
//! and re-derives the board picture and status text from engine state after
//! every input. Holds no game state of its own.

use crate::action::{Move, ParseMoveError};
use crate::config::{FrontendConfig, Symbols};
use crate::engine::GameEngine;
use crate::outcome::Outcome;
use crate::state::GameState;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

const HELP: &str = "Enter a move as \"row column\" (0-2 each, e.g. \"1 1\") or a cell name \
(\"center\", \"top-left\"). Type \"restart\" for a new game or \"quit\" to leave.";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a cell.
    Move(Move),
    /// Start a new game.
    Restart,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
}

impl FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restart" | "r" | "new" => Ok(Command::Restart),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => s.parse().map(Command::Move),
        }
    }
}

/// Human-readable status for the current state.
pub fn status_text(state: &GameState, symbols: &Symbols) -> String {
    match state.outcome() {
        Outcome::InProgress => format!("Current turn: Player {}", symbols.of(state.current_turn())),
        Outcome::Won(mark) => format!("Player {} wins!", symbols.of(mark)),
        Outcome::Draw => "Draw!".to_string(),
    }
}

/// Draws the board, optionally with row and column numbers.
pub fn render_board(state: &GameState, config: &FrontendConfig) -> String {
    let symbols = config.symbols();
    let coords = *config.show_coordinates();
    let mut out = String::new();

    if coords {
        out.push_str("    0   1   2\n");
    }
    for (r, row) in state.board().rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|sq| match sq.mark() {
                Some(mark) => symbols.of(mark).to_string(),
                None => ".".to_string(),
            })
            .collect();
        if coords {
            out.push_str(&format!("{}   ", r));
        } else {
            out.push(' ');
        }
        out.push_str(&cells.join(" | "));
        out.push('\n');
        if r < 2 {
            out.push_str(if coords { "   ---+---+---\n" } else { "---+---+---\n" });
        }
    }
    out
}

/// Applies a scripted sequence, skipping rejected moves.
///
/// Returns every rejected move with the reason it was declined.
#[instrument(skip(engine, moves))]
pub fn replay(
    engine: &mut GameEngine,
    moves: impl IntoIterator<Item = Move>,
) -> Vec<(Move, crate::MoveError)> {
    moves
        .into_iter()
        .filter_map(|mv| engine.play(mv).err().map(|e| (mv, e)))
        .collect()
}

/// Interactive session over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    engine: GameEngine,
    config: FrontendConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(config: FrontendConfig, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the engine driving this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", HELP)?;
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.trim().parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Restart) => {
                    self.engine.reset();
                    self.show()?;
                }
                Ok(Command::Move(mv)) => match self.engine.play(mv).map(|_| ()) {
                    Ok(()) => self.show()?,
                    Err(e) => writeln!(self.output, "Move ignored: {}", e)?,
                },
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        let state = self.engine.state();
        let board = render_board(state, &self.config);
        let status = status_text(state, self.config.symbols());
        write!(self.output, "\n{}\n{}\n", board, status)?;
        if state.outcome().is_decided() {
            writeln!(
                self.output,
                "*** {} *** Type \"restart\" to play again.",
                status
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_command_parsing() {
        assert_eq!("restart".parse::<Command>(), Ok(Command::Restart));
        assert_eq!(" Q ".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("1 1".parse::<Command>(), Ok(Command::Move(Move::new(1, 1))));
        assert!("dance".parse::<Command>().is_err());
    }

    #[test]
    fn test_status_text() {
        let symbols = Symbols::default();
        let mut engine = GameEngine::new();
        assert_eq!(
            status_text(engine.state(), &symbols),
            "Current turn: Player X"
        );

        engine.apply_move(0, 0).unwrap();
        assert_eq!(
            status_text(engine.state(), &symbols),
            "Current turn: Player O"
        );

        for (r, c) in [(1, 1), (0, 1), (1, 0), (0, 2)] {
            engine.apply_move(r, c).unwrap();
        }
        assert_eq!(engine.state().outcome(), Outcome::Won(Mark::First));
        assert_eq!(status_text(engine.state(), &symbols), "Player X wins!");
    }

    #[test]
    fn test_render_without_coordinates() {
        let config = FrontendConfig::from_toml("show_coordinates = false").unwrap();
        let mut engine = GameEngine::new();
        engine.apply_move(1, 1).unwrap();
        assert_eq!(
            render_board(engine.state(), &config),
            " . | . | .\n---+---+---\n . | X | .\n---+---+---\n . | . | .\n"
        );
    }

    #[test]
    fn test_replay_reports_rejections() {
        let mut engine = GameEngine::new();
        let rejected = replay(
            &mut engine,
            [Move::new(0, 0), Move::new(0, 0), Move::new(5, 1), Move::new(2, 2)],
        );
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].0, Move::new(0, 0));
        assert_eq!(engine.state().board().count(Mark::First), 1);
        assert_eq!(engine.state().board().count(Mark::Second), 1);
    }
}
