//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_tictactoe::GameEngine;
use strictly_tictactoe_cli::{AppConfig, Cli, Command, announce, play, render_board, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(config: &AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let game = play(config, stdin.lock(), &mut stdout)?;
    info!(status = ?game.status(), moves = game.history().len(), "Session finished");
    Ok(())
}

/// Apply scripted moves and print the result
fn run_replay(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    let game = replay(moves)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        print_summary(config, &game);
    }
    Ok(())
}

fn print_summary(config: &AppConfig, game: &GameEngine) {
    println!("{}", render_board(&game.board()));
    match announce(game.status()) {
        Some(line) if *config.announce_result() => println!("{}", line),
        Some(_) => {}
        None => println!("{} to move", game.current_turn()),
    }
}
