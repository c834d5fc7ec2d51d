//! ntoe - terminal driver for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use ntoe::{EngineConfig, OutputFormat, run_check, run_session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command.unwrap_or(Command::Play { dimension: None }) {
        Command::Play { dimension } => run_play(config, dimension, format),
        Command::Check { dimension, moves } => run_replay(&config, dimension, &moves, format),
    }
}

/// Run the interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: EngineConfig, dimension: Option<usize>, format: OutputFormat) -> Result<()> {
    let config = match dimension {
        Some(n) => config.with_default_dimension(n)?,
        None => config,
    };
    info!(default_dimension = config.default_dimension(), "Starting interactive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config, format)?;
    Ok(())
}

/// Replay a move list non-interactively
#[instrument(skip(config, moves))]
fn run_replay(
    config: &EngineConfig,
    dimension: usize,
    moves: &[usize],
    format: OutputFormat,
) -> Result<()> {
    run_check(
        std::io::stdout().lock(),
        dimension,
        moves,
        format,
        *config.show_indices(),
    )?;
    Ok(())
}
