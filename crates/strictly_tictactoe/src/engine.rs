//! The tic-tac-toe state machine.
//!
//! [`GameEngine`] owns the board, the turn order and the game status. It is
//! the only thing that mutates a [`Board`], and it only does so through
//! [`GameEngine::place`].

use super::action::Move;
use super::error::GameError;
use super::position::Cell;
use super::rules;
use super::types::{Board, GameStatus, Grid, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe rules engine.
///
/// Starts with an empty board and [`Mark::X`] to move. Moves alternate until
/// a line is completed or the board fills up; after that every `place` call
/// is rejected with [`GameError::IllegalState`] and the turn stays frozen on
/// the last mover.
///
/// The engine performs no synchronization. Share it across threads behind a
/// single lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_turn: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks run in order and the first failure wins; a failed call leaves
    /// the engine unchanged.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPosition`] if `row` or `col` is outside `0..3`.
    /// - [`GameError::IllegalState`] if the game is already over.
    /// - [`GameError::OccupiedCell`] if the cell already holds a mark.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn place(&mut self, row: i32, col: i32) -> Result<GameStatus, GameError> {
        let cell = Cell::new(row, col).inspect_err(|e| debug!(%e, "Move rejected"))?;
        self.place_cell(cell)
    }

    /// Places the current player's mark on an already validated cell.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::place`], minus the position check.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn place_cell(&mut self, cell: Cell) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move rejected: game over");
            return Err(GameError::IllegalState);
        }
        if let Some(occupant) = self.board.get(cell) {
            debug!(%occupant, "Move rejected: cell occupied");
            return Err(GameError::OccupiedCell {
                row: cell.row(),
                col: cell.col(),
                occupant,
            });
        }

        let mover = self.current_turn;
        self.board.set(cell, mover);
        self.history.push(Move::new(mover, cell));
        debug!(%mover, %cell, "Mark placed");

        if rules::completes_line(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, moves = self.history.len(), "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.current_turn = mover.opponent();
        }

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(self.status)
    }

    /// Whose move is next. Frozen on the last mover once the game is over.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The winning mark; `None` while in progress or on a draw.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Independent copy of the board.
    pub fn board(&self) -> Grid {
        self.board.grid()
    }

    /// Returns the mark at `(row, col)`, or `None` if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] if `row` or `col` is outside `0..3`.
    #[instrument(skip(self))]
    pub fn mark_at(&self, row: i32, col: i32) -> Result<Option<Mark>, GameError> {
        Cell::new(row, col).map(|cell| self.board.get(cell))
    }

    /// Every successful move, first move first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent successful move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Cells that can still be played. Empty once the game is over.
    pub fn open_cells(&self) -> Vec<Cell> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }

    /// Plain-value view of the whole game, for presentation or export.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board(),
            current_turn: self.current_turn,
            status: self.status,
            history: self.history.clone(),
        }
    }

    pub(crate) fn board_ref(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn with_board(&self, board: Board) -> Self {
        Self {
            board,
            ..self.clone()
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of a game's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board cells, `[row][col]`.
    pub board: Grid,
    /// Whose move is next (or the last mover, once over).
    pub current_turn: Mark,
    /// Game status.
    pub status: GameStatus,
    /// Moves played so far.
    pub history: Vec<Move>,
}
