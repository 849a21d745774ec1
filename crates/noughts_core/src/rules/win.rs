//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Move, Player};

/// The eight lines that win when one player fills them.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of the first completed line, rows before columns
/// before diagonals.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.get(Move::new(row, col)));
        match (a, b, c) {
            (Ok(Cell::Occupied(p1)), Ok(Cell::Occupied(p2)), Ok(Cell::Occupied(p3)))
                if p1 == p2 && p2 == p3 =>
            {
                Some(p1)
            }
            _ => None,
        }
    })
}

/// Checks if any line holds three identical non-empty cells.
///
/// The mover who just played is the only one who can have completed a line
/// in alternating play, so callers rarely need to know which player it was.
pub fn check_win(board: &Board) -> bool {
    winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows(["XXX", "OO ", "   "]);
        assert!(check_win(&board));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows(["XO ", "XO ", " O "]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows(["XXO", " O ", "O X"]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows(["XX ", "OO ", "   "]);
        assert!(!check_win(&board));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows(["XOX", "OXO", "OXO"]);
        assert!(!check_win(&board));
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut board = Board::new();
                for (row, col) in line {
                    board.set(Move::new(row, col), player).unwrap();
                }
                assert_eq!(winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_two_of_three_never_wins() {
        for line in LINES {
            for skip in 0..3 {
                let mut board = Board::new();
                for (i, (row, col)) in line.into_iter().enumerate() {
                    if i != skip {
                        board.set(Move::new(row, col), Player::X).unwrap();
                    }
                }
                assert!(!check_win(&board), "line {:?} skipping {}", line, skip);
            }
        }
    }
}
