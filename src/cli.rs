//! Command-line interface for ntoe.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

/// ntoe - tic-tac-toe on any N x N board
#[derive(Parser, Debug)]
#[command(name = "ntoe")]
#[command(about = "Tic-tac-toe rules engine with a terminal driver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print snapshots as JSON instead of a text grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Board dimension used by `new` without an argument
        #[arg(short, long, value_parser = dimension_parser())]
        dimension: Option<usize>,
    },

    /// Replay a list of moves and print the final state
    Check {
        /// Board dimension
        #[arg(short, long, value_parser = dimension_parser())]
        dimension: usize,

        /// Cell indices to play in order, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,
    },
}

/// Board dimensions start at 1.
fn dimension_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}
