//! Turn consistency invariant: the player to move follows from the board.

use super::super::{Game, GameStatus, Marker};
use super::Invariant;

/// Invariant: while in progress, X moves when the counts are equal and O
/// moves when X is ahead. Outside of play nobody is to move.
pub struct TurnConsistentInvariant;

impl Invariant<Game> for TurnConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.status() {
            GameStatus::InProgress => {
                let x = game.board().count(Marker::X);
                let o = game.board().count(Marker::O);
                let expected = if x == o { Marker::X } else { Marker::O };
                game.current_player() == expected
            }
            GameStatus::Won(winner) => winner.is_player() && game.current_player() == Marker::Empty,
            GameStatus::NotStarted | GameStatus::Tied | GameStatus::Ended => {
                game.current_player() == Marker::Empty
            }
        }
    }

    fn description() -> &'static str {
        "Player to move matches the board (X, O, X, O, ...; nobody once over)"
    }
}
