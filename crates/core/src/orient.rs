//! Orientation normalizer
//!
//! Every move is handled by one routine that slides rows toward the left edge.
//! A [`Transform`] turns the board so the requested edge becomes the left edge,
//! and its inverse turns the result back.

use crate::board::Board;
use crate::types::Direction;

/// One of the four board transforms a direction maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Leave the board as is.
    Identity,
    /// Reverse every row (left and right edges swap).
    Mirror,
    /// Rotate 90° counter-clockwise (top edge becomes the left edge).
    RotateCcw,
    /// Rotate 90° clockwise (bottom edge becomes the left edge).
    RotateCw,
}

impl Transform {
    /// Transform that undoes `self`.
    pub fn inverse(self) -> Transform {
        match self {
            Transform::Identity => Transform::Identity,
            Transform::Mirror => Transform::Mirror,
            Transform::RotateCcw => Transform::RotateCw,
            Transform::RotateCw => Transform::RotateCcw,
        }
    }

    /// Apply the transform, producing a new board.
    pub fn apply(self, board: &Board) -> Board {
        match self {
            Transform::Identity => *board,
            Transform::Mirror => mirror(board),
            Transform::RotateCcw => rotate_ccw(board),
            Transform::RotateCw => rotate_cw(board),
        }
    }
}

/// Map a slide direction to the transform that makes it a left slide.
pub fn transform_for(direction: Direction) -> Transform {
    match direction {
        Direction::Left => Transform::Identity,
        Direction::Right => Transform::Mirror,
        Direction::Up => Transform::RotateCcw,
        Direction::Down => Transform::RotateCw,
    }
}

/// Orient `board` so that sliding in `direction` is a left slide.
pub fn normalize(board: &Board, direction: Direction) -> Board {
    transform_for(direction).apply(board)
}

/// Undo [`normalize`] for the same `direction`.
pub fn restore(board: &Board, direction: Direction) -> Board {
    transform_for(direction).inverse().apply(board)
}

fn mirror(board: &Board) -> Board {
    let n = board.side();
    let mut out = *board;
    for r in 0..n {
        for c in 0..n {
            out.set(r, n - 1 - c, board.get(r, c).unwrap_or(0));
        }
    }
    out
}

// out[n-1-c][r] = in[r][c]
fn rotate_ccw(board: &Board) -> Board {
    let n = board.side();
    let mut out = *board;
    for r in 0..n {
        for c in 0..n {
            out.set(n - 1 - c, r, board.get(r, c).unwrap_or(0));
        }
    }
    out
}

// out[c][n-1-r] = in[r][c]
fn rotate_cw(board: &Board) -> Board {
    let n = board.side();
    let mut out = *board;
    for r in 0..n {
        for c in 0..n {
            out.set(c, n - 1 - r, board.get(r, c).unwrap_or(0));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(side: usize) -> Board {
        // Distinct powers of two so every cell is traceable.
        let rows: Vec<Vec<u32>> = (0..side)
            .map(|r| (0..side).map(|c| 2u32 << (r * side + c)).collect())
            .collect();
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn up_brings_top_edge_to_the_left() {
        let board = numbered(4);
        let turned = normalize(&board, Direction::Up);
        for i in 0..4 {
            // Left column holds the top row, read right to left.
            assert_eq!(turned.get(i, 0), board.get(0, 3 - i));
        }
    }

    #[test]
    fn down_brings_bottom_edge_to_the_left() {
        let board = numbered(4);
        let turned = normalize(&board, Direction::Down);
        for i in 0..4 {
            // Left column holds the bottom row, read left to right.
            assert_eq!(turned.get(i, 0), board.get(3, i));
        }
    }

    #[test]
    fn right_reverses_rows() {
        let board = numbered(5);
        let turned = normalize(&board, Direction::Right);
        for r in 0..5 {
            let mut expected = board.row(r).to_vec();
            expected.reverse();
            assert_eq!(turned.row(r), expected.as_slice());
        }
    }

    #[test]
    fn every_transform_round_trips() {
        for side in [4, 5] {
            let board = numbered(side);
            for dir in Direction::ALL {
                assert_eq!(restore(&normalize(&board, dir), dir), board, "{:?}", dir);
            }
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let board = numbered(5);
        let mut b = board;
        for _ in 0..4 {
            b = Transform::RotateCw.apply(&b);
        }
        assert_eq!(b, board);
    }
}
