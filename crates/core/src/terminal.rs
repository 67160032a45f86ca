//! Terminal detector - decides whether any move is left
//!
//! A board is terminal when it has no empty cell and no two horizontally or
//! vertically adjacent cells hold the same value. Diagonals never count.

use crate::board::Board;

/// Check whether `board` admits no further move.
pub fn is_terminal(board: &Board) -> bool {
    let n = board.side();
    for r in 0..n {
        let row = board.row(r);
        for c in 0..n {
            let v = row[c];
            if v == 0 {
                return false;
            }
            if c + 1 < n && row[c + 1] == v {
                return false;
            }
            if r + 1 < n && board.get(r + 1, c) == Some(v) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{pick_below, SimpleRng};

    fn brute_force(board: &Board) -> bool {
        let n = board.side() as isize;
        for r in 0..n {
            for c in 0..n {
                let v = board.get(r as usize, c as usize).unwrap();
                if v == 0 {
                    return false;
                }
                for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                    let (nr, nc) = (r + dr, c + dc);
                    if nr < 0 || nc < 0 || nr >= n || nc >= n {
                        continue;
                    }
                    if board.get(nr as usize, nc as usize) == Some(v) {
                        return false;
                    }
                }
            }
        }
        true
    }

    #[test]
    fn checkerboard_is_terminal() {
        let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn empty_cell_is_not_terminal() {
        let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]])
            .unwrap();
        assert!(!is_terminal(&board));
    }

    #[test]
    fn vertical_and_horizontal_pairs_keep_game_alive() {
        let vertical = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]])
            .unwrap();
        assert!(!is_terminal(&vertical));

        let horizontal =
            Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]).unwrap();
        assert!(!is_terminal(&horizontal));
    }

    #[test]
    fn diagonal_pairs_do_not_count() {
        let board = Board::from_rows(&[[2u32, 4, 8, 16], [4, 2, 16, 8], [8, 16, 2, 4], [16, 8, 4, 2]])
            .unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn agrees_with_brute_force_on_random_boards() {
        let mut rng = SimpleRng::new(31337);
        let values = [0u32, 2, 4, 8, 16];
        for side in [4usize, 5] {
            for _ in 0..500 {
                let rows: Vec<Vec<u32>> = (0..side)
                    .map(|_| {
                        (0..side)
                            // Bias toward full boards so both outcomes appear.
                            .map(|_| values[1 + pick_below(&mut rng, values.len() - 1)])
                            .collect()
                    })
                    .collect();
                let board = Board::from_rows(&rows).unwrap();
                assert_eq!(is_terminal(&board), brute_force(&board), "\n{}", board);
            }
        }
    }
}
