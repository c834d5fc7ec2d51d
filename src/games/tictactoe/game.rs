//! Game state machine for N×N tic-tac-toe.
//!
//! `Game` owns the board, the player to move and the status. All mutation
//! goes through [`Game::start_game`], [`Game::submit_move`] and
//! [`Game::end_game`], and each either applies fully or leaves the game as
//! it was.
//!
//! ```text
//! NotStarted ──start──▶ InProgress ──move──▶ Won | Tied
//!                           │
//!                           └──end──▶ Ended
//! ```
//!
//! Starting a new game is allowed from every status.

use super::action::{GameError, MoveResult};
use super::contracts::{Contract, MoveContract, StartContract};
use super::rules::{self, Outcome};
use super::snapshot::GameSnapshot;
use super::types::{Board, GameStatus, Marker};
use tracing::{debug, info, instrument, warn};

/// The player who opens every game.
pub const FIRST_PLAYER: Marker = Marker::X;

/// Tic-tac-toe game on a square board of any size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub(super) board: Board,
    pub(super) current_player: Marker,
    pub(super) status: GameStatus,
}

impl Game {
    /// Creates an engine with no game started.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game on a `dimension` × `dimension` board.
    ///
    /// Whatever was on the previous board is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimension`] when `dimension` is zero or
    /// too large for its N² cells to be held.
    #[instrument(skip(self), fields(previous = ?self.status))]
    pub fn start_game(&mut self, dimension: usize) -> Result<(), GameError> {
        StartContract::pre(self, &dimension).inspect_err(|e| warn!(%e, "Start refused"))?;

        let board = Board::try_new(dimension).inspect_err(|e| warn!(%e, "Start refused"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board = board;
        self.current_player = FIRST_PLAYER;
        self.status = GameStatus::InProgress;

        #[cfg(debug_assertions)]
        if let Err(e) = StartContract::post(&before, self) {
            warn!(%e, "Postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }

        info!(dimension, cells = self.board.len(), "Game started");
        Ok(())
    }

    /// Places the current player's marker at `index`.
    ///
    /// On a win or tie the game becomes terminal and the current player is
    /// cleared; otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if no game is in progress, `index`
    /// is off the board or the cell is occupied. In debug builds a failed
    /// postcondition rolls the move back and returns
    /// [`GameError::InvariantViolation`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveResult, GameError> {
        MoveContract::pre(self, &index).inspect_err(|e| warn!(%e, "Move refused"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.current_player;
        self.board.set(index, mover)?;

        let outcome = rules::evaluate(&self.board, index, mover);
        match outcome {
            Outcome::Win(winner) => {
                self.status = GameStatus::Won(winner);
                self.current_player = Marker::Empty;
                info!(%winner, index, "Game won");
            }
            Outcome::Tie => {
                self.status = GameStatus::Tied;
                self.current_player = Marker::Empty;
                info!(index, "Game tied");
            }
            Outcome::Pending => {
                self.current_player = mover.opponent();
                debug!(index, next = %self.current_player, "Turn passes");
            }
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(%e, "Postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }

        Ok(MoveResult::new(index, mover, outcome, self.snapshot()))
    }

    /// Stops the game in progress without a winner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] unless a game is in progress.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            warn!(status = ?self.status, "End refused");
            return Err(GameError::InvalidTransition(self.status));
        }

        self.status = GameStatus::Ended;
        self.current_player = Marker::Empty;
        info!("Game ended early");
        Ok(())
    }

    /// Starts a game and plays `moves` in order, alternating from X.
    ///
    /// # Errors
    ///
    /// Fails on the first rejected operation, including any move listed
    /// after the game has already been decided.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(dimension: usize, moves: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        game.start_game(dimension)?;
        for &index in moves {
            game.submit_move(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, `Empty` unless a game is in progress.
    pub fn current_player(&self) -> Marker {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the board side length, zero before the first game.
    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    /// Captures the current state for a presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
