//! Contract-based validation for the game state machine.
//!
//! Contracts pair preconditions, checked before an operation touches any
//! state, with postconditions that confirm the game invariants afterwards:
//! {P} operation {Q}

use super::action::{GameError, IllegalMoveReason};
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet};
use super::types::GameStatus;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a game must be in progress.
pub struct GameIsActive;

impl GameIsActive {
    /// Fails with `NotInProgress` for any other status.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), GameError> {
        if game.status() == GameStatus::InProgress {
            Ok(())
        } else {
            Err(GameError::IllegalMove {
                index,
                reason: IllegalMoveReason::NotInProgress,
            })
        }
    }
}

/// Precondition: the index must name a cell on the board.
pub struct IndexInRange;

impl IndexInRange {
    /// Fails with `OutOfRange` for `index >= N²`.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), GameError> {
        if index < game.board().len() {
            Ok(())
        } else {
            Err(GameError::IllegalMove {
                index,
                reason: IllegalMoveReason::OutOfRange,
            })
        }
    }
}

/// Precondition: the cell must be unoccupied.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `Occupied` when the cell holds a marker.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), GameError> {
        if game.board().is_vacant(index) {
            Ok(())
        } else {
            Err(GameError::IllegalMove {
                index,
                reason: IllegalMoveReason::Occupied,
            })
        }
    }
}

/// Composite precondition: active game, index on the board, empty cell.
///
/// Checked in that order, so the first failing reason is reported.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), GameError> {
        GameIsActive::check(index, game)?;
        IndexInRange::check(index, game)?;
        CellIsEmpty::check(index, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts
// ─────────────────────────────────────────────────────────────

/// Folds invariant violations into a single error.
fn check_invariants(after: &Game) -> Result<(), GameError> {
    GameInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for starting a game with a given dimension.
pub struct StartContract;

impl Contract<Game, usize> for StartContract {
    fn pre(_game: &Game, dimension: &usize) -> Result<(), GameError> {
        if *dimension == 0 || dimension.checked_mul(*dimension).is_none() {
            return Err(GameError::InvalidDimension(*dimension));
        }
        Ok(())
    }

    fn post(_before: &Game, after: &Game) -> Result<(), GameError> {
        check_invariants(after)
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Index is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's marker
/// - Game invariants hold
pub struct MoveContract;

impl Contract<Game, usize> for MoveContract {
    fn pre(game: &Game, index: &usize) -> Result<(), GameError> {
        LegalMove::check(*index, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        let changed = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .collect::<Vec<_>>();

        match changed.as_slice() {
            [(old, new)] if !old.is_player() && **new == before.current_player() => {}
            _ => {
                return Err(GameError::InvariantViolation(format!(
                    "Postcondition failed: expected one cell to change, {} changed",
                    changed.len()
                )));
            }
        }

        check_invariants(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Marker;

    fn started(n: usize) -> Game {
        let mut game = Game::new();
        game.start_game(n).unwrap();
        game
    }

    #[test]
    fn test_precondition_empty_cell() {
        let game = started(3);
        assert!(MoveContract::pre(&game, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = started(3);
        game.submit_move(4).unwrap();
        assert!(matches!(
            MoveContract::pre(&game, &4),
            Err(GameError::IllegalMove {
                reason: IllegalMoveReason::Occupied,
                ..
            })
        ));
    }

    #[test]
    fn test_precondition_out_of_range() {
        let game = started(3);
        assert!(matches!(
            MoveContract::pre(&game, &9),
            Err(GameError::IllegalMove {
                index: 9,
                reason: IllegalMoveReason::OutOfRange
            })
        ));
    }

    #[test]
    fn test_inactive_reported_before_range() {
        let game = Game::new();
        assert!(matches!(
            MoveContract::pre(&game, &100),
            Err(GameError::IllegalMove {
                reason: IllegalMoveReason::NotInProgress,
                ..
            })
        ));
    }

    #[test]
    fn test_start_precondition() {
        let game = Game::new();
        assert_eq!(
            StartContract::pre(&game, &0),
            Err(GameError::InvalidDimension(0))
        );
        assert_eq!(
            StartContract::pre(&game, &usize::MAX),
            Err(GameError::InvalidDimension(usize::MAX))
        );
        assert!(StartContract::pre(&game, &1).is_ok());
        assert!(StartContract::post(&game, &started(4)).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = started(3);
        let mut after = game.clone();
        after.submit_move(0).unwrap();
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_extra_write() {
        let game = started(3);
        let mut after = game.clone();
        after.submit_move(0).unwrap();

        // Corrupt the board behind the state machine's back
        after.board.set(8, Marker::O).unwrap();
        assert!(MoveContract::post(&game, &after).is_err());
    }
}
