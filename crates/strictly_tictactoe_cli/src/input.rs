//! Parsing of typed moves.

use derive_more::{Display, Error};
use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Place the current mark at `(row, col)`.
    Place {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// End the session.
    Quit,
}

/// Input that is not a move or a quit request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read {input:?} as a move; expected \"row col\" or \"row,col\"")]
pub struct InputError {
    /// The offending input, trimmed.
    pub input: String,
}

/// Parses `row col`, `row,col` or `q`/`quit`.
///
/// Coordinates are not range-checked here; the engine reports positions
/// outside the board.
#[instrument]
pub fn parse_command(line: &str) -> Result<PlayerCommand, InputError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(PlayerCommand::Quit);
    }

    let error = || InputError {
        input: trimmed.to_string(),
    };
    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row.parse().map_err(|_| error())?;
            let col = col.parse().map_err(|_| error())?;
            Ok(PlayerCommand::Place { row, col })
        }
        _ => Err(error()),
    }
}
