//! Errors raised by the rules engine.

use super::types::Mark;

/// A rejected engine operation.
///
/// Every variant signals caller misuse; the engine state is left untouched
/// when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Row or column outside `0..3`.
    #[display("Position ({row}, {col}) is outside the board")]
    InvalidPosition {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    IllegalState,

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied by {occupant}")]
    OccupiedCell {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
        /// Mark already on the cell.
        occupant: Mark,
    },
}
