//! Serializable view of a game for presentation layers.

use super::game::Game;
use super::types::{GameStatus, Marker};
use serde::{Deserialize, Serialize};

/// Copy of everything a presentation layer needs to draw one frame.
///
/// Detached from the engine: holding a snapshot never blocks further moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length of the board, zero before the first game.
    pub dimension: usize,
    /// Cells in row-major order.
    pub board: Vec<Marker>,
    /// Player to move (`Empty` outside of play).
    pub current_player: Marker,
    /// Game status.
    pub status: GameStatus,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            dimension: game.dimension(),
            board: game.board().cells().to_vec(),
            current_player: game.current_player(),
            status: game.status(),
        }
    }
}

impl GameSnapshot {
    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Marker> {
        self.status.winner()
    }

    /// One line of text describing whose turn it is or how the game went.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("current player: {}", self.current_player),
            status => status.to_string(),
        }
    }

    /// Draws the board as a text grid.
    ///
    /// Empty cells show their index when `show_indices` is set, `.` otherwise.
    /// Columns are padded to the width of the largest index.
    pub fn render(&self, show_indices: bool) -> String {
        let n = self.dimension;
        if n == 0 {
            return String::new();
        }

        let width = (n * n - 1).to_string().len();
        let mut out = String::new();
        for (row, cells) in self.board.chunks(n).enumerate() {
            if row > 0 {
                out.push('\n');
                out.push_str(&vec!["-".repeat(width); n].join("-+-"));
                out.push('\n');
            }
            let line = cells
                .iter()
                .enumerate()
                .map(|(col, marker)| {
                    let text = match marker {
                        Marker::Empty if show_indices => (row * n + col).to_string(),
                        Marker::Empty => ".".to_string(),
                        player => player.to_string(),
                    };
                    format!("{:>width$}", text)
                })
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(&line);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_indices() {
        let mut game = Game::new();
        game.start_game(2).unwrap();
        game.submit_move(1).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.render(true), "0 | x\n--+--\n2 | 3");
        assert_eq!(snapshot.render(false), ". | x\n--+--\n. | .");
    }

    #[test]
    fn test_render_pads_wide_indices() {
        let mut game = Game::new();
        game.start_game(4).unwrap();
        let first_row = game.snapshot().render(true).lines().next().unwrap().to_string();
        assert_eq!(first_row, " 0 |  1 |  2 |  3");
    }

    #[test]
    fn test_status_line() {
        let mut game = Game::new();
        assert_eq!(game.snapshot().status_line(), "no game started");
        game.start_game(1).unwrap();
        assert_eq!(game.snapshot().status_line(), "current player: x");
        game.submit_move(0).unwrap();
        assert_eq!(game.snapshot().status_line(), "the winner is x!");
        assert_eq!(game.snapshot().winner(), Some(Marker::X));
    }

    #[test]
    fn test_serializes_lowercase_markers() {
        let mut game = Game::new();
        game.start_game(1).unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["board"][0], "empty");
        assert_eq!(json["current_player"], "x");
        assert_eq!(json["status"], "in_progress");
    }
}
