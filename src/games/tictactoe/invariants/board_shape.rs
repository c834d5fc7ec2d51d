//! Board shape invariant: the board is square and matches the game's phase.

use super::super::{Game, GameStatus};
use super::Invariant;

/// Invariant: the board holds exactly `dimension²` cells, and only an
/// unstarted engine has a zero-sized board.
pub struct BoardShapeInvariant;

impl Invariant<Game> for BoardShapeInvariant {
    fn holds(game: &Game) -> bool {
        let n = game.dimension();
        let square = game.board().len() == n * n;
        let sized = (n == 0) == (game.status() == GameStatus::NotStarted);
        square && sized
    }

    fn description() -> &'static str {
        "Board is square with dimension >= 1 once a game has started"
    }
}
