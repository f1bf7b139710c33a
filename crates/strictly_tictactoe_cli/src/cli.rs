//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, reading moves from stdin
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Moves as "row,col", X first
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["tictactoe", "play"]).unwrap();
        assert!(matches!(cli.command, Command::Play));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_replay_with_config() {
        let cli = Cli::try_parse_from([
            "tictactoe", "replay", "0,0", "1,1", "--json", "--config", "game.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        match cli.command {
            Command::Replay { moves, json } => {
                assert_eq!(moves, vec!["0,0", "1,1"]);
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
