//! Noughts - Unified CLI
//!
//! Play tic-tac-toe at the console against a minimax engine, or pit the
//! engines against each other.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SeatArgs};
use noughts::{GameConfig, session};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { seats } => {
            let config = load_config(&seats)?;
            init_tracing(&config);
            info!(player_x = %config.player_x(), player_o = %config.player_o(), "Starting game");
            session::play(&config, &mut io::stdout(), seats.json)?;
            Ok(())
        }
        Command::Series { seats, games } => {
            let config = load_config(&seats)?.with_games(games);
            init_tracing(&config);
            info!(games = *config.games(), "Starting series");
            session::series(&config, &mut io::stdout(), seats.json)?;
            Ok(())
        }
    }
}

/// Reads the config file if one was given, then applies command-line overrides.
fn load_config(seats: &SeatArgs) -> Result<GameConfig> {
    let config = match &seats.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::default(),
    };

    Ok(config
        .with_player_x(seats.player_x)
        .with_player_o(seats.player_o)
        .with_seed(seats.seed))
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .try_init()
        .ok();
    debug!(?config, "Tracing initialized");
}
