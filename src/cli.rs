//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts_core::PlayerKind;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a perfect-play minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game (human X against minimax O by default)
    Play {
        /// Seating and configuration
        #[command(flatten)]
        seats: SeatArgs,
    },

    /// Play repeated engine-only games and print the tally
    Series {
        /// Seating and configuration
        #[command(flatten)]
        seats: SeatArgs,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<usize>,
    },
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct SeatArgs {
    /// Player seated as X: human, minimax or random
    #[arg(long = "x")]
    pub player_x: Option<PlayerKind>,

    /// Player seated as O: human, minimax or random
    #[arg(long = "o")]
    pub player_o: Option<PlayerKind>,

    /// Seed for random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
