//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which nobody completed a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board)
}
