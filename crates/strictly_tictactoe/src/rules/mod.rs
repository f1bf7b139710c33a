//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from the engine
//! so invariant checks can reuse them without mutating anything.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, completes_line, winner};
