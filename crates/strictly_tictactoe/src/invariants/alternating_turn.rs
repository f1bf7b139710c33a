//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// While the game is in progress the turn belongs to the opponent of the
/// last mover. Once it is over the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.current_turn() == Mark::X;
        };

        if history[0].mark() != Mark::X {
            return false;
        }
        if history.windows(2).any(|w| w[0].mark() == w[1].mark()) {
            return false;
        }

        let expected = if game.is_over() {
            last.mark()
        } else {
            last.mark().opponent()
        };
        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
