//! Moves and the errors that can come out of applying them.
//!
//! An accepted move is a domain event: the cell played, the player who played
//! it, the verdict it produced, and the resulting game snapshot.

use super::rules::Outcome;
use super::snapshot::GameSnapshot;
use super::types::{GameStatus, Marker};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Result of an accepted move, handed back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveResult {
    /// Cell that was played.
    index: usize,
    /// Player who played it.
    mover: Marker,
    /// Verdict of the outcome evaluator for this move.
    outcome: Outcome,
    /// Game state after the move.
    snapshot: GameSnapshot,
}

impl MoveResult {
    /// Status after the move.
    pub fn status(&self) -> GameStatus {
        self.snapshot.status
    }

    /// Player to move next (`Empty` once the game is over).
    pub fn current_player(&self) -> Marker {
        self.snapshot.current_player
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IllegalMoveReason {
    /// No game is being played.
    #[display("game is not in progress")]
    NotInProgress,
    /// Index does not name a cell on the board.
    #[display("index is outside the board")]
    OutOfRange,
    /// Cell already holds a marker.
    #[display("cell is already occupied")]
    Occupied,
}

/// Error from a game operation.
///
/// Every operation that returns one of these has left the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board dimension must be a positive integer whose square fits in memory.
    #[display("Invalid board dimension {}: must be at least 1 and fit in memory", _0)]
    InvalidDimension(usize),

    /// Move refused.
    #[display("Illegal move at cell {}: {}", index, reason)]
    IllegalMove {
        /// Requested cell.
        index: usize,
        /// Why it was refused.
        reason: IllegalMoveReason,
    },

    /// Termination requested while no game was in progress.
    #[display("Cannot end a game whose status is '{}'", _0)]
    InvalidTransition(GameStatus),

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::IllegalMove {
            index: 7,
            reason: IllegalMoveReason::Occupied,
        };
        assert_eq!(
            err.to_string(),
            "Illegal move at cell 7: cell is already occupied"
        );
        assert!(GameError::InvalidDimension(0).to_string().contains("at least 1"));
        assert!(
            GameError::InvalidTransition(GameStatus::Tied)
                .to_string()
                .contains("it's a tie!")
        );
    }
}
