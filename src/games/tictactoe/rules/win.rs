//! Win detection for N×N tic-tac-toe.

use super::super::lines::Line;
use super::super::types::{Board, Marker};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first line through `last_move` held entirely by `mover`.
///
/// Lines are tried in [`Line`] declaration order. Diagonals are only
/// considered when `last_move` lies on them. Returns `None` for an
/// out-of-range `last_move` or a non-player `mover`.
#[instrument(skip(board), fields(n = board.dimension()))]
pub fn completed_line(board: &Board, last_move: usize, mover: Marker) -> Option<Line> {
    let n = board.dimension();
    if !mover.is_player() || last_move >= board.len() {
        return None;
    }

    Line::iter().find(|line| {
        line.through(last_move, n)
            .is_some_and(|cells| cells.iter().all(|&i| board.get(i) == Some(mover)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, cells: &[usize], marker: Marker) {
        for &i in cells {
            board.set(i, marker).unwrap();
        }
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new(3);
        assert_eq!(completed_line(&board, 4, Marker::X), None);
    }

    #[test]
    fn test_row_on_four_by_four() {
        let mut board = Board::new(4);
        place(&mut board, &[8, 9, 10, 11], Marker::O);
        assert_eq!(completed_line(&board, 10, Marker::O), Some(Line::Row));
    }

    #[test]
    fn test_column() {
        let mut board = Board::new(3);
        place(&mut board, &[1, 4, 7], Marker::X);
        assert_eq!(completed_line(&board, 1, Marker::X), Some(Line::Column));
    }

    #[test]
    fn test_main_diagonal() {
        let mut board = Board::new(4);
        place(&mut board, &[0, 5, 10, 15], Marker::X);
        assert_eq!(completed_line(&board, 10, Marker::X), Some(Line::MainDiagonal));
    }

    #[test]
    fn test_anti_diagonal() {
        let mut board = Board::new(3);
        place(&mut board, &[2, 4, 6], Marker::O);
        assert_eq!(completed_line(&board, 6, Marker::O), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_diagonal_ignored_when_move_is_off_it() {
        let mut board = Board::new(3);
        place(&mut board, &[0, 4, 8, 1], Marker::X);
        // Cell 1 is on neither diagonal and its row/column are incomplete.
        assert_eq!(completed_line(&board, 1, Marker::X), None);
    }

    #[test]
    fn test_row_reported_before_column() {
        let mut board = Board::new(3);
        place(&mut board, &[0, 1, 2, 3, 6], Marker::X);
        assert_eq!(completed_line(&board, 0, Marker::X), Some(Line::Row));
    }

    #[test]
    fn test_empty_mover_never_wins() {
        let board = Board::new(2);
        assert_eq!(completed_line(&board, 0, Marker::Empty), None);
    }
}
