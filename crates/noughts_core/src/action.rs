//! Moves and the ways they can be rejected.
//!
//! A move names a cell by row and column. Coordinates are not validated on
//! construction so that out-of-range input can be represented and rejected
//! by [`Board::validate`](crate::Board::validate) before it touches the board.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// A (row, column) pair identifying a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Returns true if both coordinates lie on the board.
    pub fn is_in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Iterates over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a proposed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// No move was supplied, or the input could not be parsed.
    #[display("No move given")]
    Missing,

    /// The coordinates are outside the board.
    #[display("Move {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Move),

    /// The cell is already taken.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Move),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
