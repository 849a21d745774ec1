//! Tic-tac-toe game logic with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, bounds checks and move validation
//! - **Rules**: win and draw detection over a board
//! - **Search**: exhaustive minimax that never loses
//! - **Players**: the [`MoveSource`] trait and its engine implementations
//! - **Game**: the turn-by-turn state machine and the [`Match`] orchestrator
//!
//! # Example
//!
//! ```
//! use noughts_core::{Match, MinimaxPlayer, Outcome};
//!
//! let mut game = Match::new(MinimaxPlayer::new("X"), MinimaxPlayer::new("O"));
//! let report = game.play().unwrap();
//! assert_eq!(report.outcome, Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod players;
mod random;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError, SIZE};
pub use board::{Board, BoardError};
pub use game::{Game, GameEvent, GameReport, GameStatus, Match};
pub use players::{MinimaxPlayer, MoveSource, PlayerKind, RandomPlayer, ScriptedPlayer, SourceError};
pub use random::random_move;
pub use rules::check_win;
pub use search::{Evaluation, SearchError, best_move};
pub use types::{Cell, Outcome, Player};
