//! Move records kept in the game history.

use super::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// A successful placement: a mark put on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{mark} -> {cell}")]
pub struct Move {
    mark: Mark,
    cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }

    /// Returns the mark that was placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell that was filled.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}
