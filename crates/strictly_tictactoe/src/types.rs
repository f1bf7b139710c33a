//! Core domain types for tic-tac-toe.

use super::position::Cell;
use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Plain-value snapshot of the board, indexed `[row][col]`.
///
/// `None` marks an empty cell.
pub type Grid = [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE];

/// The token a player places on a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// First player.
    #[display("X")]
    X,
    /// Second player.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display label for this mark.
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at the given cell, if any.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.row()][cell.col()]
    }

    /// Places a mark, overwriting whatever was there.
    ///
    /// Legality is the engine's concern; this is raw storage.
    pub(crate) fn set(&mut self, cell: Cell, mark: Mark) {
        self.cells[cell.row()][cell.col()] = Some(mark);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Returns an independent copy of the cells.
    pub fn grid(&self) -> Grid {
        self.cells
    }
}

impl From<Grid> for Board {
    fn from(cells: Grid) -> Self {
        Self { cells }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// True for both terminal states.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Mark::X.to_string(), Mark::X.label());
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_grid_is_a_copy() {
        let mut board = Board::new();
        let mut grid = board.grid();
        grid[1][1] = Some(Mark::O);
        assert_eq!(board.occupied(), 0);

        board.set(Cell::ALL[4], Mark::X);
        assert_eq!(grid[1][1], Some(Mark::O));
        assert_eq!(board.grid()[1][1], Some(Mark::X));
    }

    #[test]
    fn test_empty_cells_shrink() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        board.set(Cell::ALL[0], Mark::X);
        board.set(Cell::ALL[8], Mark::O);
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Cell::ALL[0]));
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::Won(Mark::O).winner(), Some(Mark::O));
    }
}
