//! Terminal game sessions driving a [`GameEngine`].

use crate::config::AppConfig;
use crate::input::{PlayerCommand, parse_command};
use crate::render::{announce, prompt, render_board};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::GameEngine;
use tracing::{debug, info, instrument, warn};

/// Plays one interactive game, reading moves from `input`.
///
/// Rejected moves are reported and the player is asked again. The session
/// ends at game over, on `quit`, or at end of input. Returns the engine in
/// whatever state the session left it.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(config: &AppConfig, mut input: R, output: &mut W) -> Result<GameEngine> {
    let mut game = GameEngine::new();
    writeln!(output, "{}\n", render_board(&game.board()))?;

    let mut line = String::new();
    while !game.is_over() {
        let open = game.open_cells();
        let hints = config.show_hints().then_some(open.as_slice());
        write!(output, "{}", prompt(game.current_turn(), hints))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            info!("Input closed before game end");
            writeln!(output)?;
            break;
        }

        match parse_command(&line) {
            Ok(PlayerCommand::Quit) => {
                info!("Player quit");
                break;
            }
            Ok(PlayerCommand::Place { row, col }) => match game.place(row, col) {
                Ok(_) => writeln!(output, "{}\n", render_board(&game.board()))?,
                Err(e) => {
                    debug!(%e, "Move rejected");
                    writeln!(output, "Rejected: {}", e)?;
                }
            },
            Err(e) => {
                warn!(%e, "Unreadable input");
                writeln!(output, "{}", e)?;
            }
        }
    }

    if *config.announce_result() {
        if let Some(line) = announce(game.status()) {
            writeln!(output, "{}", line)?;
        }
    }
    Ok(game)
}

/// Applies a scripted list of `row,col` moves to a fresh game.
///
/// Stops at the first move that cannot be parsed or is rejected.
#[instrument(skip_all, fields(moves = moves.len()))]
pub fn replay<S: AsRef<str>>(moves: &[S]) -> Result<GameEngine> {
    let mut game = GameEngine::new();
    for (number, text) in moves.iter().enumerate() {
        let text = text.as_ref();
        let (row, col) = match parse_command(text)? {
            PlayerCommand::Place { row, col } => (row, col),
            PlayerCommand::Quit => break,
        };
        game.place(row, col)
            .with_context(|| format!("Move {} ({}) rejected", number + 1, text))?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_tictactoe::{GameError, GameStatus, Mark};

    fn run(config: &AppConfig, script: &str) -> (GameEngine, String) {
        let mut out = Vec::new();
        let game = play(config, Cursor::new(script), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_play_to_win() {
        let (game, out) = run(&AppConfig::default(), "0 0\n1 0\n0,1\n1,1\n0 2\n");
        assert_eq!(game.winner(), Some(Mark::X));
        assert!(out.ends_with("Game over X wins\n"));
        assert!(out.contains(" X | X | X"));
    }

    #[test]
    fn test_rejections_do_not_end_session() {
        let (game, out) = run(&AppConfig::default(), "0 0\n0 0\n9 9\nnonsense\n1 1\n");
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.mark_at(1, 1), Ok(Some(Mark::O)));
        assert!(out.contains("Rejected: Cell (0, 0) is already occupied by X"));
        assert!(out.contains("Rejected: Position (9, 9) is outside the board"));
        assert!(out.contains("Cannot read \"nonsense\""));
    }

    #[test]
    fn test_quit_and_eof() {
        let (game, out) = run(&AppConfig::default(), "1 1\nquit\n2 2\n");
        assert_eq!(game.history().len(), 1);
        assert!(!out.contains("Game over"));

        let (game, _) = run(&AppConfig::default(), "1 1\n");
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_config_toggles_output() {
        let config = AppConfig::from_toml("show_hints = false\nannounce_result = false").unwrap();
        let (game, out) = run(&config, "0 0\n1 0\n0 1\n1 1\n0 2\n");
        assert!(game.is_over());
        assert!(!out.contains("open:"));
        assert!(!out.contains("Game over"));

        let (_, out) = run(&AppConfig::default(), "q\n");
        assert!(out.contains("X to move [open: (0, 0)"));
    }

    #[test]
    fn test_replay() {
        let game = replay(&["1,1", "0,0", "2 2"]).unwrap();
        assert_eq!(game.current_turn(), Mark::O);

        let err = replay(&["1,1", "1,1"]).unwrap_err();
        assert_eq!(err.to_string(), "Move 2 (1,1) rejected");
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::OccupiedCell { .. })
        ));

        assert!(replay(&["one,two"]).is_err());
    }
}
