//! Exhaustive minimax search.
//!
//! The engine explores every continuation of a position by placing a mark,
//! recursing, and taking the mark back. The board it is lent is therefore
//! cell-for-cell identical when the call returns. There is no pruning and
//! no memoization; the full 3x3 game tree is small enough to walk each turn.
//!
//! Scores are always from the point of view of the maximizing side of the
//! call: `+1` is a forced win, `0` a draw with best play, `-1` a forced loss.
//! Among equally scored moves the first in row-major order is kept, so the
//! chosen move is deterministic.

use crate::board::BoardError;
use crate::rules::{check_win, is_terminal};
use crate::{Board, Cell, Move, Player};
use tracing::{debug, error, instrument};

/// Game-theoretic value of a position.
pub type Score = i8;

/// The maximizing side can force a win.
pub const WIN: Score = 1;
/// Best play from both sides ends in a draw.
pub const DRAW: Score = 0;
/// The maximizing side loses against best play.
pub const LOSS: Score = -1;

/// Score of a position together with the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Evaluation {
    /// Value from the maximizing side's perspective.
    pub score: Score,
    /// Best cell to play; `None` when the position is already terminal.
    pub best_move: Option<Move>,
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The position is already won or full; there is nothing to choose.
    #[display("Cannot search a finished position")]
    TerminalPosition,

    /// A tentative placement was rejected by the board.
    #[display("Search touched an invalid cell: {}", _0)]
    Board(BoardError),
}

impl From<BoardError> for SearchError {
    fn from(err: BoardError) -> Self {
        SearchError::Board(err)
    }
}

/// Computes the optimal move for `player` on a position that is still in play.
///
/// # Errors
///
/// Returns [`SearchError::TerminalPosition`] if the board is already won or
/// full. Callers are expected to check [`is_terminal`] first.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn best_move(board: &mut Board, player: Player) -> Result<Move, SearchError> {
    if is_terminal(board) {
        error!(?player, "Search requested on a terminal position");
        return Err(SearchError::TerminalPosition);
    }

    let mut search = Minimax::default();
    let evaluation = search.evaluate(board, player, true)?;
    debug!(
        ?player,
        score = evaluation.score,
        best_move = ?evaluation.best_move,
        nodes = search.nodes,
        "Search complete"
    );

    evaluation.best_move.ok_or(SearchError::TerminalPosition)
}

/// Evaluates a position for `mover`, the side about to play.
///
/// `maximizing` says whether scores are reported from `mover`'s side (`true`)
/// or from the opponent's side (`false`). At a terminal node the side to move
/// has just been beaten, so a won board scores [`LOSS`] when maximizing and
/// [`WIN`] when minimizing.
pub fn minimax(board: &mut Board, mover: Player, maximizing: bool) -> Result<Evaluation, SearchError> {
    Minimax::default().evaluate(board, mover, maximizing)
}

#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn evaluate(
        &mut self,
        board: &mut Board,
        mover: Player,
        maximizing: bool,
    ) -> Result<Evaluation, SearchError> {
        self.nodes += 1;

        if check_win(board) {
            let score = if maximizing { LOSS } else { WIN };
            return Ok(Evaluation::new(score, None));
        }
        if board.is_full() {
            return Ok(Evaluation::new(DRAW, None));
        }

        let mut best: Option<Evaluation> = None;
        for mv in board.empty_cells() {
            board.set(mv, mover)?;
            let reply = self.evaluate(board, mover.opponent(), !maximizing);
            board.set(mv, Cell::Empty)?;
            let score = reply?.score;

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(Evaluation::new(score, Some(mv)));
            }
        }

        // Non-full boards always have at least one child.
        Ok(best.unwrap_or(Evaluation::new(DRAW, None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores_follow_maximizing_flag() {
        let mut won = Board::from_rows(["XXX", "OO ", "   "]);
        assert_eq!(minimax(&mut won, Player::O, true).unwrap(), Evaluation::new(LOSS, None));
        assert_eq!(minimax(&mut won, Player::O, false).unwrap(), Evaluation::new(WIN, None));

        let mut full = Board::from_rows(["XOX", "XOO", "OXX"]);
        assert_eq!(minimax(&mut full, Player::X, true).unwrap(), Evaluation::new(DRAW, None));
    }

    #[test]
    fn test_last_cell_is_forced() {
        let mut board = Board::from_rows(["XOX", "XOO", "OX "]);
        let evaluation = minimax(&mut board, Player::X, true).unwrap();
        assert_eq!(evaluation.best_move, Some(Move::new(2, 2)));
        assert_eq!(evaluation.score, DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        let evaluation = minimax(&mut board, Player::X, true).unwrap();
        assert_eq!(evaluation.score, DRAW);
        // Every opening draws, so the first cell wins the tie.
        assert_eq!(evaluation.best_move, Some(Move::new(0, 0)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        let mut board = Board::from_rows(["OOO", "XX ", "X  "]);
        assert_eq!(best_move(&mut board, Player::X), Err(SearchError::TerminalPosition));
    }
}
