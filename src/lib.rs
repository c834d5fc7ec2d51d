//! ntoe - tic-tac-toe on a square board of any size.
//!
//! The engine tracks turn order, validates moves and decides wins and ties
//! after every move. It has no dependency on any rendering technology; the
//! bundled terminal driver is one possible presentation layer.
//!
//! # Architecture
//!
//! - **Lines**: index arithmetic for rows, columns and diagonals
//! - **Rules**: the outcome evaluator (win, tie, or play on)
//! - **Game**: the state machine owning board, turn and status
//! - **Driver**: a line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use ntoe::{Game, GameStatus, Marker};
//!
//! # fn example() -> Result<(), ntoe::GameError> {
//! let mut game = Game::new();
//! game.start_game(3)?;
//! for index in [0, 1, 3, 4, 6] {
//!     game.submit_move(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Marker::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Terminal driver
pub use driver::{
    HELP, Input, InputError, OutputFormat, Session, parse_input, render, run_check, run_session,
};

// Crate-level exports - Game types
pub use games::tictactoe::{
    BalancedMarkersInvariant, Board, BoardShapeInvariant, Cell, CellIsEmpty, Contract,
    FIRST_PLAYER, Game, GameError, GameInvariants, GameIsActive, GameSnapshot, GameStatus,
    IllegalMoveReason, IndexInRange, Invariant, InvariantSet, InvariantViolation, LegalMove,
    Line, Marker, MoveContract, MoveResult, Outcome, StartContract, TurnConsistentInvariant,
    col_indices, completed_line, diagonals, evaluate, is_full, is_tie, on_anti_diagonal,
    on_main_diagonal, row_indices,
};
