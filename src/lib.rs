//! Noughts - console tic-tac-toe against a minimax opponent
//!
//! The game rules and the search engine live in [`noughts_core`]. This crate
//! adds what a playable program needs around them.
//!
//! # Architecture
//!
//! - **Config**: TOML game configuration with command-line overrides
//! - **Console**: the human player, reading moves typed as `row col` digits
//! - **Session**: seats players by kind and runs single games or series
//!
//! # Example
//!
//! ```
//! use noughts::{GameConfig, session};
//! use noughts_core::{Outcome, PlayerKind};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GameConfig::default()
//!     .with_player_x(Some(PlayerKind::Minimax))
//!     .with_player_o(Some(PlayerKind::Minimax));
//! let report = session::play(&config, &mut std::io::sink(), false)?;
//! assert_eq!(report.outcome, Outcome::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
pub mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console player
pub use console::{ConsolePlayer, ReadLine, parse_move};

// Crate-level exports - Session
pub use session::{Tally, build_player, play, play_with, series};
