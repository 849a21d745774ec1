//! The 3x3 grid and its queries.

use crate::action::{Move, MoveError, SIZE};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised by board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Row or column outside 0..=2.
    #[display("Move {} is out of bounds", _0)]
    OutOfBounds(#[error(not(source))] Move),
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of glyphs: `'X'`, `'O'`, anything else is empty.
    pub fn from_rows(rows: [&str; SIZE]) -> Self {
        let mut board = Self::new();
        for (row, text) in rows.iter().enumerate() {
            for (col, glyph) in text.chars().take(SIZE).enumerate() {
                board.cells[row][col] = match glyph {
                    'X' | 'x' => Cell::Occupied(Player::X),
                    'O' | 'o' => Cell::Occupied(Player::O),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    /// Gets the cell at the given move.
    pub fn get(&self, mv: Move) -> Result<Cell, BoardError> {
        if !mv.is_in_bounds() {
            return Err(BoardError::OutOfBounds(mv));
        }
        Ok(self.cells[mv.row][mv.col])
    }

    /// Overwrites the cell at the given move.
    ///
    /// Occupancy is not checked; run [`Board::validate`] first during real play.
    pub fn set(&mut self, mv: Move, cell: impl Into<Cell>) -> Result<(), BoardError> {
        if !mv.is_in_bounds() {
            return Err(BoardError::OutOfBounds(mv));
        }
        self.cells[mv.row][mv.col] = cell.into();
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-bounds cells are never empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Ok(Cell::Empty))
    }

    /// Checks if the move lies on the board.
    pub fn is_in_bounds(&self, mv: Move) -> bool {
        mv.is_in_bounds()
    }

    /// Checks a proposed move, explaining any rejection.
    ///
    /// `None` stands for missing or unparseable input and is always rejected.
    #[instrument(skip(self))]
    pub fn validate(&self, mv: Option<Move>) -> Result<Move, MoveError> {
        let mv = mv.ok_or(MoveError::Missing)?;
        if !self.is_in_bounds(mv) {
            return Err(MoveError::OutOfBounds(mv));
        }
        if !self.is_empty(mv) {
            return Err(MoveError::Occupied(mv));
        }
        Ok(mv)
    }

    /// True iff the move is in bounds and the cell is empty.
    pub fn is_valid_move(&self, mv: Option<Move>) -> bool {
        self.validate(mv).is_ok()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Returns the empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::all().map(|mv| (mv, self.cells[mv.row][mv.col]))
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Renders the board as `c0|c1|c2` rows joined by newlines.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.glyph().to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        assert_eq!(Board::new().render(), " | | \n | | \n | | ");
    }

    #[test]
    fn test_render_mixed_board() {
        let board = Board::from_rows(["XO ", " X ", "  O"]);
        assert_eq!(board.render(), "X|O| \n |X| \n | |O");
        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.get(Move::new(3, 0)),
            Err(BoardError::OutOfBounds(Move::new(3, 0)))
        );
        assert!(board.get(Move::new(0, 7)).is_err());
    }

    #[test]
    fn test_set_out_of_bounds_leaves_board_untouched() {
        let mut board = Board::new();
        assert!(board.set(Move::new(1, 3), Player::X).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(["X O", " X ", "O  "]);
        assert_eq!(
            board.empty_cells(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_count() {
        let board = Board::from_rows(["XOX", " O ", "X  "]);
        assert_eq!(board.count(Player::X), 3);
        assert_eq!(board.count(Player::O), 2);
    }
}
