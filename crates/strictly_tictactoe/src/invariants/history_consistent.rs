//! History consistency invariant: history matches the occupied cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: every move in history is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board_ref();

        game.history().len() == board.occupied()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.cell()) == Some(mv.mark()))
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}
