//! Core domain types for N×N tic-tac-toe.

use super::action::{GameError, IllegalMoveReason};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Contents of a cell, doubling as player identity.
///
/// A player is any non-empty marker. X always opens a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Unoccupied cell, or "no player".
    #[default]
    #[display("")]
    Empty,
    /// First player.
    #[display("x")]
    X,
    /// Second player.
    #[display("o")]
    O,
}

impl Marker {
    /// Returns the opponent of a player. `Empty` has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
            Marker::Empty => Marker::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_player(self) -> bool {
        self != Marker::Empty
    }
}

/// Square board of side `dimension`, flattened row-major.
///
/// A cell at `(row, col)` lives at `row * dimension + col`. The cell vector
/// is sized once at construction and never grows or shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    dimension: usize,
    cells: Vec<Marker>,
}

impl Board {
    /// Creates an all-empty board of `dimension` × `dimension` cells.
    ///
    /// # Panics
    ///
    /// Panics when `dimension²` overflows `usize`. Use [`Board::try_new`] for
    /// untrusted sizes.
    #[instrument]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Marker::Empty; dimension * dimension],
        }
    }

    /// Creates an all-empty board, refusing sizes that cannot be held.
    ///
    /// Fails with [`GameError::InvalidDimension`] when `dimension²` overflows
    /// `usize` or the cells cannot be allocated.
    #[instrument]
    pub fn try_new(dimension: usize) -> Result<Self, GameError> {
        let len = dimension
            .checked_mul(dimension)
            .ok_or(GameError::InvalidDimension(dimension))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GameError::InvalidDimension(dimension))?;
        cells.resize(len, Marker::Empty);
        Ok(Self { dimension, cells })
    }

    /// Builds a board from explicit cell contents.
    ///
    /// Fails with [`GameError::InvalidDimension`] when `dimension` is zero or
    /// `cells` does not hold exactly `dimension²` entries.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(dimension: usize, cells: Vec<Marker>) -> Result<Self, GameError> {
        if dimension == 0 || dimension.checked_mul(dimension) != Some(cells.len()) {
            return Err(GameError::InvalidDimension(dimension));
        }
        Ok(Self { dimension, cells })
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (`dimension²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for the zero-sized board held before any game starts.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the marker at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Marker> {
        self.cells.get(index).copied()
    }

    /// Writes a marker into a cell.
    pub fn set(&mut self, index: usize, marker: Marker) -> Result<(), GameError> {
        let cell = self.cells.get_mut(index).ok_or(GameError::IllegalMove {
            index,
            reason: IllegalMoveReason::OutOfRange,
        })?;
        *cell = marker;
        Ok(())
    }

    /// True when the cell exists and holds no marker.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Marker::Empty))
    }

    /// True when every cell holds a player's marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| m.is_player())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Marker] {
        &self.cells
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|m| **m == marker).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for Board {
    /// Renders rows separated by newlines, cells by `|`, empty cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dimension.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|m| match m {
                    Marker::Empty => ".".to_string(),
                    player => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Lifecycle of a single game.
///
/// Display text is what a presentation layer shows under the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// No game has been started yet.
    #[default]
    #[display("no game started")]
    NotStarted,
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// The given player completed a line.
    #[display("the winner is {_0}!")]
    Won(Marker),
    /// Board filled with no completed line.
    #[display("it's a tie!")]
    Tied,
    /// Stopped early at a player's request.
    #[display("game over")]
    Ended,
}

impl GameStatus {
    /// Won, tied or ended: no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Tied | GameStatus::Ended)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty() {
        let board = Board::new(4);
        assert_eq!(board.len(), 16);
        assert_eq!(board.count(Marker::Empty), 16);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_out_of_range_is_rejected() {
        let mut board = Board::new(2);
        let result = board.set(4, Marker::X);
        assert!(matches!(
            result,
            Err(GameError::IllegalMove {
                index: 4,
                reason: IllegalMoveReason::OutOfRange
            })
        ));
        assert_eq!(board, Board::new(2));
    }

    #[test]
    fn test_try_new_refuses_overflowing_dimension() {
        assert_eq!(Board::try_new(3).unwrap(), Board::new(3));
        assert_eq!(
            Board::try_new(usize::MAX),
            Err(GameError::InvalidDimension(usize::MAX))
        );
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(Board::try_new(side), Err(GameError::InvalidDimension(side)));
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(Board::from_cells(usize::MAX, vec![Marker::Empty; 1]).is_err());
        assert!(Board::from_cells(2, vec![Marker::Empty; 3]).is_err());
        assert!(Board::from_cells(0, Vec::new()).is_err());
        assert!(Board::from_cells(2, vec![Marker::X; 4]).unwrap().is_full());
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_cells(
            2,
            vec![Marker::X, Marker::Empty, Marker::Empty, Marker::O],
        )
        .unwrap();
        assert_eq!(board.to_string(), "x|.\n.|o");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Won(Marker::O).to_string(), "the winner is o!");
        assert_eq!(GameStatus::Tied.to_string(), "it's a tie!");
        assert_eq!(GameStatus::Ended.to_string(), "game over");
        assert!(GameStatus::Ended.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
        assert_eq!(Marker::Empty.opponent(), Marker::Empty);
    }
}
