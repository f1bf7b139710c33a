//! Validated board coordinates.

use super::error::GameError;
use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, addressed by `(row, col)` with both in `0..3`.
///
/// A `Cell` can only be built from in-range coordinates, so holding one
/// means the position is on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Validates raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] if either coordinate is outside `0..3`.
    #[instrument]
    pub fn new(row: i32, col: i32) -> Result<Self, GameError> {
        match (to_axis(row), to_axis(col)) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(GameError::InvalidPosition { row, col }),
        }
    }

    /// Row, `0..3`.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, `0..3`.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Creates a cell from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

fn to_axis(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v < BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_every_on_board_pair() {
        for row in 0..3 {
            for col in 0..3 {
                let cell = Cell::new(row, col).unwrap();
                assert_eq!(cell.row(), row as usize);
                assert_eq!(cell.col(), col as usize);
            }
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for (row, col) in [(-1, 0), (3, 0), (0, -1), (0, 3), (i32::MIN, i32::MAX)] {
            assert_eq!(
                Cell::new(row, col),
                Err(GameError::InvalidPosition { row, col })
            );
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(2, 1).unwrap().to_string(), "(2, 1)");
    }
}
