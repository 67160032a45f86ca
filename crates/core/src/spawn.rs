//! Tile spawner - drops one new tile on a random empty cell
//!
//! The empty cell is chosen uniformly; the tile is a 2 with probability 90% and
//! a 4 with probability 10%. Draw order is fixed: cell first, then value.

use rand::RngCore;

use crate::board::{Board, Pos};
use crate::rng::{pick_below, roll_percent};
use crate::types::{Cell, FOUR_TILE_PERCENT, SPAWN_HIGH, SPAWN_LOW};

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub pos: Pos,
    pub value: Cell,
}

/// Place one random tile on `board`.
///
/// Returns `None` and leaves the board (and the RNG) untouched when the board
/// is full.
pub fn place_random_tile<R: RngCore + ?Sized>(board: &mut Board, rng: &mut R) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let pos = empty[pick_below(rng, empty.len())];
    let value = if roll_percent(rng, FOUR_TILE_PERCENT) {
        SPAWN_HIGH
    } else {
        SPAWN_LOW
    };
    board.set(pos.0 as usize, pos.1 as usize, value);

    Some(SpawnedTile { pos, value })
}

/// Return a copy of `board` with one random tile added.
///
/// A full board comes back unchanged.
pub fn spawn<R: RngCore + ?Sized>(board: &Board, rng: &mut R) -> Board {
    let mut out = *board;
    place_random_tile(&mut out, rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::Mode;

    #[test]
    fn adds_exactly_one_small_tile() {
        let mut rng = SimpleRng::new(42);
        let mut board = Board::new(Mode::Classic);
        for expected in 1..=16 {
            let next = spawn(&board, &mut rng);
            assert_eq!(next.count_tiles(), expected);

            let changed: Vec<_> = board
                .cells()
                .iter()
                .zip(next.cells())
                .filter(|(a, b)| a != b)
                .collect();
            assert_eq!(changed.len(), 1);
            assert_eq!(*changed[0].0, 0);
            assert!(*changed[0].1 == 2 || *changed[0].1 == 4);

            board = next;
        }
        assert!(board.is_full());
    }

    #[test]
    fn full_board_is_unchanged_and_draws_nothing() {
        let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        let mut rng = SimpleRng::new(9);
        let before = rng.state();
        assert_eq!(spawn(&board, &mut rng), board);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn single_empty_cell_is_always_chosen() {
        let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]])
            .unwrap();
        for seed in 1..20 {
            let mut b = board;
            let tile = place_random_tile(&mut b, &mut SimpleRng::new(seed)).unwrap();
            assert_eq!(tile.pos, (2, 2));
            assert_eq!(b.get(2, 2), Some(tile.value));
        }
    }

    #[test]
    fn fours_are_rare() {
        let mut rng = SimpleRng::new(7);
        let board = Board::new(Mode::Hardcore);
        let fours = (0..2000)
            .filter(|_| spawn(&board, &mut rng).max_tile() == 4)
            .count();
        assert!(fours > 100 && fours < 320, "fours = {}", fours);
    }
}
