//! Balanced markers invariant: X is never behind O, and never more than one ahead.

use super::super::{Game, Marker};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// Holds because X always opens and turns strictly alternate.
pub struct BalancedMarkersInvariant;

impl Invariant<Game> for BalancedMarkersInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Marker::X);
        let o = game.board().count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Marker counts stay balanced (X equal to O or one ahead)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Game::new();
        game.start_game(3).unwrap();
        for idx in [4, 0, 8, 2, 6] {
            game.submit_move(idx).unwrap();
            assert!(BalancedMarkersInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = Game::new();
        game.start_game(3).unwrap();
        game.board.set(0, Marker::O).unwrap();
        assert!(!BalancedMarkersInvariant::holds(&game));
    }
}
