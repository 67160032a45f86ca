//! Row compactor/merger - slides one row toward its left end
//!
//! 1. Compact: drop empty cells, keeping the order of tiles.
//! 2. Merge: scan left to right; two adjacent equal tiles become one tile of
//!    double value, and the scan skips past both. A freshly merged tile is never
//!    merged again in the same pass (`[2,2,2]` → `[4,2]`, `[2,2,2,2]` → `[4,4]`).
//! 3. Pad with empty cells back to the original length.
//!
//! Pure: no board, no RNG, no state.

use arrayvec::ArrayVec;

use crate::types::{Cell, MAX_SIDE};

/// A row of at most [`MAX_SIDE`] cells.
pub type Row = ArrayVec<Cell, MAX_SIDE>;

/// Result of sliding one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSlide {
    /// New row, same length as the input.
    pub row: Row,
    /// Sum of every tile created by a merge.
    pub score_delta: u64,
    /// Number of merges performed.
    pub merges: u32,
}

/// Slide and merge `row` toward index 0.
///
/// Rows longer than [`MAX_SIDE`] are a caller error; only the first
/// [`MAX_SIDE`] cells are considered.
///
/// ```
/// use tui_2048_core::merge::slide_row;
///
/// let slid = slide_row(&[2, 2, 4, 4]);
/// assert_eq!(slid.row.as_slice(), &[4, 8, 0, 0]);
/// assert_eq!(slid.score_delta, 12);
/// ```
pub fn slide_row(row: &[Cell]) -> RowSlide {
    let len = row.len().min(MAX_SIDE);

    let compact: Row = row[..len].iter().copied().filter(|&v| v != 0).collect();

    let mut merged = Row::new();
    let mut score_delta = 0u64;
    let mut merges = 0u32;
    let mut i = 0;
    while i < compact.len() {
        if i + 1 < compact.len() && compact[i] == compact[i + 1] {
            let value = compact[i] * 2;
            merged.push(value);
            score_delta += value as u64;
            merges += 1;
            i += 2;
        } else {
            merged.push(compact[i]);
            i += 1;
        }
    }

    // Merging writes tiles contiguously, but keep the output compact regardless.
    let mut out: Row = merged.into_iter().filter(|&v| v != 0).collect();
    while out.len() < len {
        out.push(0);
    }

    RowSlide {
        row: out,
        score_delta,
        merges,
    }
}
