//! Turn ledger - score and move count
//!
//! The ledger only changes through [`TurnLedger::commit`], once per committed
//! move, so both counters are a pure function of the move history.

/// Score and move counters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnLedger {
    score: u64,
    moves: u32,
}

impl TurnLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger of a session restored mid-game.
    pub fn with_totals(score: u64, moves: u32) -> Self {
        Self { score, moves }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Record one committed move that earned `score_delta` points.
    pub fn commit(self, score_delta: u64) -> Self {
        Self {
            score: self.score.saturating_add(score_delta),
            moves: self.moves.saturating_add(1),
        }
    }
}
