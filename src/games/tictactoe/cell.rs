//! Two-dimensional cell coordinates.
//!
//! The engine speaks in flat indices. Presentation layers that think in
//! rows and columns convert here with `index = row * n + col`.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` position on an N×N board, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Cell {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Cell {
    /// Converts to a flat index, or `None` when off an `n`×`n` board.
    #[instrument]
    pub fn to_index(self, n: usize) -> Option<usize> {
        if self.row < n && self.col < n {
            self.row.checked_mul(n)?.checked_add(self.col)
        } else {
            None
        }
    }

    /// Converts a flat index back to coordinates, or `None` when off the board.
    #[instrument]
    pub fn from_index(index: usize, n: usize) -> Option<Self> {
        // With n² past usize::MAX every index fits on the board.
        let on_board = n.checked_mul(n).is_none_or(|len| index < len);
        (n > 0 && on_board).then(|| Self::new(index / n, index % n))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
