//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Move;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a scripted sequence of moves and print the result
    Replay {
        /// Moves as "row,column" or cell names (e.g. 0,0 1,1 center)
        #[arg(required = true)]
        moves: Vec<Move>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema of the state snapshot
    Schema,
}
