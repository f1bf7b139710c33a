//! Pure tic-tac-toe rules engine.
//!
//! [`GameEngine`] owns a 3x3 board, the turn order and the win/draw status.
//! It performs no I/O: rendering the board or announcing results belongs to
//! whoever reads the engine's query methods.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameError, GameStatus, Mark};
//!
//! let mut game = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.place(row, col)?;
//! }
//! assert_eq!(game.place(0, 2)?, GameStatus::Won(Mark::X));
//! assert_eq!(game.place(2, 2), Err(GameError::IllegalState));
//! # Ok::<(), GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use engine::{GameEngine, GameSnapshot};
pub use error::GameError;
pub use position::Cell;
pub use types::{BOARD_SIZE, Board, GameStatus, Grid, Mark};
