//! Tic-tac-toe on a square board of any size.

mod action;
mod cell;
mod contracts;
mod game;
mod invariants;
mod lines;
mod rules;
mod snapshot;
mod types;

pub use action::{GameError, IllegalMoveReason, MoveResult};
pub use cell::Cell;
pub use contracts::{
    CellIsEmpty, Contract, GameIsActive, IndexInRange, LegalMove, MoveContract, StartContract,
};
pub use game::{FIRST_PLAYER, Game};
pub use invariants::{
    BalancedMarkersInvariant, BoardShapeInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, TurnConsistentInvariant,
};
pub use lines::{Line, col_indices, diagonals, on_anti_diagonal, on_main_diagonal, row_indices};
pub use rules::{Outcome, completed_line, evaluate, is_full, is_tie};
pub use snapshot::GameSnapshot;
pub use types::{Board, GameStatus, Marker};
