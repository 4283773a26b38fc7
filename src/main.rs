//! Strictly Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_tictactoe::{
    Console, FrontendConfig, GameEngine, GameState, Move, render_board, replay, status_text,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = FrontendConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, json } => run_replay(&config, moves, json),
        Command::Schema => run_schema(),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: FrontendConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = io::stdin();
    let mut console = Console::new(config, stdin.lock(), io::stdout());
    console.run()?;
    Ok(())
}

/// Apply scripted moves and print the final state
#[instrument(skip(config))]
fn run_replay(config: &FrontendConfig, moves: Vec<Move>, json: bool) -> Result<()> {
    let mut engine = GameEngine::new();
    for (mv, e) in replay(&mut engine, moves) {
        warn!(mv = %mv, error = %e, "Scripted move rejected");
        eprintln!("Skipped {}: {}", mv, e);
    }

    let state = engine.state();
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        print!("{}", render_board(state, config));
        println!("{}", status_text(state, config.symbols()));
    }
    Ok(())
}

/// Print the JSON Schema of `GameState`
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(GameState);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
