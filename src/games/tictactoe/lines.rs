//! Line index builder.
//!
//! Pure index arithmetic for the lines running through a cell on an N×N
//! board. Every function expects `n >= 1` and `idx < n * n`.

use serde::{Deserialize, Serialize};

/// A kind of line a move can complete.
///
/// Declaration order is the order the outcome evaluator checks them in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Line {
    /// Horizontal line.
    #[display("row")]
    Row,
    /// Vertical line.
    #[display("column")]
    Column,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Cells of this line through `idx`, or `None` when `idx` is not on it.
    ///
    /// Rows and columns pass through every cell; diagonals only through
    /// their own members.
    pub fn through(self, idx: usize, n: usize) -> Option<Vec<usize>> {
        match self {
            Line::Row => Some(row_indices(idx, n)),
            Line::Column => Some(col_indices(idx, n)),
            Line::MainDiagonal => on_main_diagonal(idx, n).then(|| diagonals(n).0),
            Line::AntiDiagonal => on_anti_diagonal(idx, n).then(|| diagonals(n).1),
        }
    }
}

/// All `n` cells in `idx`'s row, ascending.
pub fn row_indices(idx: usize, n: usize) -> Vec<usize> {
    let start = idx / n * n;
    (start..start + n).collect()
}

/// All `n` cells in `idx`'s column, ascending.
pub fn col_indices(idx: usize, n: usize) -> Vec<usize> {
    (idx % n..n * n).step_by(n).collect()
}

/// Main diagonal `0, n+1, 2(n+1), …` and anti-diagonal `n-1, 2(n-1), …`.
///
/// Both hold `n` cells. On a 1×1 board both are `[0]`.
pub fn diagonals(n: usize) -> (Vec<usize>, Vec<usize>) {
    let main = (0..n).map(|k| k * (n + 1)).collect();
    let anti = (1..=n).map(|k| k * (n - 1)).collect();
    (main, anti)
}

/// True when `idx` lies on the main diagonal.
pub fn on_main_diagonal(idx: usize, n: usize) -> bool {
    idx / n == idx % n
}

/// True when `idx` lies on the anti-diagonal.
pub fn on_anti_diagonal(idx: usize, n: usize) -> bool {
    idx / n + idx % n == n - 1
}
