//! Text rendering of engine state.

use strictly_tictactoe::{Cell, GameStatus, Grid, Mark};

const ROW_SEPARATOR: &str = "\n-----------\n";

/// Renders the board: marks separated by `" | "`, empty cells as a space,
/// rows separated by a dashed line.
pub fn render_board(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            let cells: Vec<&str> = row.iter().map(|cell| cell.map_or(" ", Mark::label)).collect();
            format!(" {}", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

/// The game-over line for a terminal status.
pub fn announce(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(mark) => Some(format!("Game over {} wins", mark)),
        GameStatus::Draw => Some("Game over: draw".to_string()),
    }
}

/// Prompt asking `turn` for a move, optionally listing the open cells.
pub fn prompt(turn: Mark, open: Option<&[Cell]>) -> String {
    match open {
        Some(cells) if !cells.is_empty() => {
            let listed: Vec<String> = cells.iter().map(Cell::to_string).collect();
            format!("{} to move [open: {}]: ", turn, listed.join(" "))
        }
        _ => format!("{} to move: ", turn),
    }
}
