//! Outcome evaluation for N×N tic-tac-toe.
//!
//! This module contains pure functions that judge a board right after a
//! move. Rules are kept apart from the state machine so they can be checked
//! against arbitrary boards, including ones normal play never reaches.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::completed_line;

use super::types::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Verdict on the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing decided, play continues.
    Pending,
    /// The mover completed a line.
    Win(Marker),
    /// Board full with no completed line.
    Tie,
}

/// Judges the board after `mover` played `last_move`.
///
/// Lines through `last_move` are checked in [`Line`](super::lines::Line)
/// order (row, column, main diagonal, anti-diagonal) and the first one fully
/// held by `mover` wins. Failing that, a full board is a tie.
#[instrument(skip(board), fields(n = board.dimension()))]
pub fn evaluate(board: &Board, last_move: usize, mover: Marker) -> Outcome {
    if let Some(line) = completed_line(board, last_move, mover) {
        debug!(%line, "Line completed");
        return Outcome::Win(mover);
    }

    if is_full(board) {
        return Outcome::Tie;
    }

    Outcome::Pending
}
