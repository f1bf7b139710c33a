//! Terminal status invariant: the stored status agrees with the board.

use super::super::{GameEngine, GameStatus, rules};
use super::Invariant;

/// Invariant: `Won(m)` iff `m` owns a line, `Draw` iff the board is full with
/// no line, `InProgress` otherwise.
pub struct TerminalStatusInvariant;

impl Invariant<GameEngine> for TerminalStatusInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board_ref();
        match game.status() {
            GameStatus::Won(mark) => rules::winner(board) == Some(mark),
            GameStatus::Draw => rules::is_draw(board),
            GameStatus::InProgress => {
                rules::winner(board).is_none() && !rules::is_full(board)
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board (win iff line, draw iff full)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_new_game_holds() {
        assert!(TerminalStatusInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let mut game = GameEngine::new();
        for (r, c) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            game.place(r, c).unwrap();
        }
        assert_eq!(game.winner(), Some(Mark::X));
        assert!(TerminalStatusInvariant::holds(&game));
    }

    #[test]
    fn test_unnoticed_line_violates() {
        let game = GameEngine::new();
        let grid = [
            [Some(Mark::O), Some(Mark::O), Some(Mark::O)],
            [None; 3],
            [None; 3],
        ];
        let corrupted = game.with_board(Board::from(grid));
        assert!(!TerminalStatusInvariant::holds(&corrupted));
    }
}
