//! Parsing of typed commands.

use crate::games::tictactoe::Cell;
use std::fmt;
use tracing::instrument;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Start a game, optionally with an explicit dimension.
    New(Option<usize>),
    /// Play a flat cell index.
    Move(usize),
    /// Play a `(row, col)` coordinate.
    MoveAt(Cell),
    /// End the current game early.
    End,
    /// Redraw the current state.
    Show,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError(pub String);

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InputError {}

/// Command list shown by `help`.
pub const HELP: &str = "\
commands:
  new [N]          start a game on an N x N board
  move <i>         play cell index i (row * N + col)
  move <row> <col> play by coordinates
  end              end the current game
  show             redraw the board
  help             show this list
  quit             leave";

fn number(word: &str) -> Result<usize, InputError> {
    word.parse()
        .map_err(|_| InputError(format!("expected a non-negative number, got '{}'", word)))
}

/// Parses one line of input. Blank lines yield `Ok(None)`.
///
/// Keywords are case-insensitive and `m`, `n`, `q` are accepted as
/// shorthands. A bare number is read as `move <i>`.
#[instrument]
pub fn parse_input(line: &str) -> Result<Option<Input>, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let input = match (head.to_lowercase().as_str(), args) {
        ("new" | "n", []) => Input::New(None),
        ("new" | "n", [n]) => Input::New(Some(number(n)?)),
        ("move" | "m", [i]) => Input::Move(number(i)?),
        ("move" | "m", [row, col]) => Input::MoveAt(Cell::new(number(row)?, number(col)?)),
        ("end", []) => Input::End,
        ("show", []) => Input::Show,
        ("help" | "?", []) => Input::Help,
        ("quit" | "exit" | "q", []) => Input::Quit,
        (word, []) if word.chars().all(|c| c.is_ascii_digit()) => Input::Move(number(word)?),
        (word, _) => {
            return Err(InputError(format!(
                "unrecognised command '{}' (type 'help')",
                word
            )));
        }
    };
    Ok(Some(input))
}
