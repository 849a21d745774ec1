//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] that decide whether a position is
//! terminal. They are kept apart from board storage so that the search
//! engine and the game loop share one definition of "won" and "drawn".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_win, winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Classifies a position as won, drawn or still in play.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::WinFor(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// True if the board is won or full.
pub fn is_terminal(board: &Board) -> bool {
    check_win(board) || is_full(board)
}
