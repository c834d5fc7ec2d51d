//! Tie detection for N×N tic-tac-toe.

use super::super::types::Board;
use super::win::completed_line;
use tracing::instrument;

/// Checks if every cell holds a player's marker.
#[instrument(skip(board), fields(n = board.dimension()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True when the board is full and `last_move` completed nothing for the
/// player who made it.
#[instrument(skip(board), fields(n = board.dimension()))]
pub fn is_tie(board: &Board, last_move: usize) -> bool {
    let Some(mover) = board.get(last_move) else {
        return false;
    };
    is_full(board) && completed_line(board, last_move, mover).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Marker;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(2);
        board.set(0, Marker::X).unwrap();
        assert!(!is_full(&board));
        assert!(!is_tie(&board, 0));
    }

    #[test]
    fn test_tie_detection() {
        // x o x / x o o / o x x
        use Marker::{O, X};
        let board = Board::from_cells(3, vec![X, O, X, X, O, O, O, X, X]).unwrap();
        assert!(is_full(&board));
        assert!(is_tie(&board, 8));
    }

    #[test]
    fn test_not_tie_if_last_move_wins() {
        use Marker::{O, X};
        // x o x / o x o / o x x - main diagonal completed by 8
        let board = Board::from_cells(3, vec![X, O, X, O, X, O, O, X, X]).unwrap();
        assert!(is_full(&board));
        assert!(!is_tie(&board, 8));
    }
}
