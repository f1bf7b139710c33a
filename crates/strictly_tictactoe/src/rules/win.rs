//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

const fn at(index: usize) -> Cell {
    Cell::ALL[index]
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [at(0), at(1), at(2)],
    [at(3), at(4), at(5)],
    [at(6), at(7), at(8)],
    // Columns
    [at(0), at(3), at(6)],
    [at(1), at(4), at(7)],
    [at(2), at(5), at(8)],
    // Diagonals
    [at(0), at(4), at(8)],
    [at(2), at(4), at(6)],
];

/// Checks whether `mark` occupies every cell of some line.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.get(*cell) == Some(mark)))
}

/// Returns the mark owning a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let first = board.get(a);
        if first.is_some() && first == board.get(b) && first == board.get(c) {
            return first;
        }
    }
    None
}
