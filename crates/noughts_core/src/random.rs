//! Uniform random move selection.

use crate::{Board, Move};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one of the board's empty cells uniformly at random.
///
/// Candidates are drawn from [`Board::empty_cells`], so a fixed seed on a
/// fixed board always yields the same move. Returns `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    board.empty_cells().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_random_move() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        let board = Board::from_rows(["XOX", "X O", "OXX"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(random_move(&board, &mut rng), Some(Move::new(1, 1)));
        }
    }

    #[test]
    fn test_same_seed_same_move() {
        let board = Board::from_rows(["X  ", " O ", "   "]);
        for seed in 0..50 {
            let first = random_move(&board, &mut StdRng::seed_from_u64(seed));
            let second = random_move(&board, &mut StdRng::seed_from_u64(seed));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_seeds_cover_every_empty_cell() {
        let board = Board::from_rows(["X  ", " O ", "  X"]);
        let empty: HashSet<Move> = board.empty_cells().into_iter().collect();

        let mut seen = HashSet::new();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = random_move(&board, &mut rng).unwrap();
            assert!(empty.contains(&mv), "{} is not empty", mv);
            seen.insert(mv);
        }
        assert_eq!(seen, empty);
    }
}
