//! Line-oriented terminal driver.
//!
//! A thin presentation layer over [`Game`]: it reads commands, forwards
//! them to the engine and prints the resulting snapshot. No rules live here.

mod input;

pub use input::{HELP, Input, InputError, parse_input};

use crate::config::EngineConfig;
use crate::games::tictactoe::{Game, GameSnapshot, GameStatus, IllegalMoveReason};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How snapshots are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Text grid plus a status line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Interactive session state: the engine plus output settings.
#[derive(Debug)]
pub struct Session<'a> {
    game: Game,
    config: &'a EngineConfig,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    /// Creates a session with no game started.
    pub fn new(config: &'a EngineConfig, format: OutputFormat) -> Self {
        Self {
            game: Game::new(),
            config,
            format,
        }
    }

    /// Returns the engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one command and returns the text to print.
    ///
    /// Engine errors are reported in the returned text; the session keeps
    /// going. Returns `None` for `quit`.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Option<String> {
        let applied = match input {
            Input::Quit => return None,
            Input::Help => return Some(HELP.to_string()),
            Input::Show => Ok(()),
            Input::New(n) => self
                .game
                .start_game(n.unwrap_or(*self.config.default_dimension())),
            Input::Move(index) => self.game.submit_move(index).map(|_| ()),
            Input::MoveAt(cell) => match cell.to_index(self.game.dimension()) {
                Some(index) => self.game.submit_move(index).map(|_| ()),
                None if self.game.status() != GameStatus::InProgress => {
                    return Some(self.error(format!(
                        "cannot play cell {}: {}",
                        cell,
                        IllegalMoveReason::NotInProgress
                    )));
                }
                None => {
                    return Some(self.error(format!(
                        "cell {} is outside the board",
                        cell
                    )));
                }
            },
            Input::End => self.game.end_game(),
        };

        match applied {
            Ok(()) => Some(self.render(&self.game.snapshot())),
            Err(e) => Some(self.error(e.to_string())),
        }
    }

    /// Formats a snapshot in the session's output format.
    pub fn render(&self, snapshot: &GameSnapshot) -> String {
        render(snapshot, self.format, *self.config.show_indices())
    }

    fn error(&self, message: String) -> String {
        match self.format {
            OutputFormat::Text => format!("error: {}", message),
            OutputFormat::Json => serde_json::json!({ "error": message }).to_string(),
        }
    }
}

/// Formats a snapshot as text or JSON.
pub fn render(snapshot: &GameSnapshot, format: OutputFormat, show_indices: bool) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(snapshot)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string()),
        OutputFormat::Text => {
            let board = snapshot.render(show_indices);
            if board.is_empty() {
                snapshot.status_line()
            } else {
                format!("{}\n{}", board, snapshot.status_line())
            }
        }
    }
}

/// Runs an interactive session until `quit` or end of input.
///
/// Returns the engine as it stood when the session closed.
#[instrument(skip_all, fields(format = ?format))]
pub fn run_session<R, W>(
    input: R,
    mut output: W,
    config: &EngineConfig,
    format: OutputFormat,
) -> Result<Game>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(config, format);
    info!("Session started");
    if format == OutputFormat::Text {
        writeln!(output, "tic tac toe (type 'help' for commands)")?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let reply = match parse_input(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => {
                debug!(?command, "Command parsed");
                match session.handle(command) {
                    Some(reply) => reply,
                    None => break,
                }
            }
            Err(e) => {
                warn!(%e, "Unparseable input");
                session.error(e.to_string())
            }
        };
        writeln!(output, "{}", reply).context("Failed to write output")?;
        output.flush()?;
    }

    info!(status = ?session.game.status(), "Session closed");
    Ok(session.game)
}

/// Plays a fixed list of moves and writes the final snapshot.
///
/// # Errors
///
/// Fails if the dimension is zero or any move is rejected.
#[instrument(skip(output, moves), fields(move_count = moves.len()))]
pub fn run_check<W: Write>(
    mut output: W,
    dimension: usize,
    moves: &[usize],
    format: OutputFormat,
    show_indices: bool,
) -> Result<GameSnapshot> {
    let game = Game::replay(dimension, moves).context("Replay failed")?;
    let snapshot = game.snapshot();
    writeln!(output, "{}", render(&snapshot, format, show_indices))?;
    Ok(snapshot)
}
