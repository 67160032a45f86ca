//! Per-mode best scores and top-10 leaderboards.
//!
//! The on-disk JSON keeps one object per concern, keyed by mode name:
//!
//! ```json
//! {
//!   "best": { "classic": 2048, "infinite": 0, "hardcore": 512 },
//!   "leaderboard": { "classic": [{ "score": 2048, "moves": 300, "timestamp_ms": 0 }], ... }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Mode, LEADERBOARD_CAPACITY};

/// One finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u64,
    pub moves: u32,
    /// Wall-clock end time, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl LeaderboardEntry {
    /// Whether `self` ranks at or above `other`: higher score first, then
    /// fewer moves. Equal entries keep insertion order.
    fn ranks_before(&self, other: &LeaderboardEntry) -> bool {
        self.score > other.score || (self.score == other.score && self.moves <= other.moves)
    }

    /// `YYYY-MM-DD HH:MM` in UTC.
    pub fn date_string(&self) -> String {
        format_utc_minutes(self.timestamp_ms)
    }
}

/// One value per mode, serialized as an object keyed by mode name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerMode<T> {
    #[serde(default)]
    pub classic: T,
    #[serde(default)]
    pub infinite: T,
    #[serde(default)]
    pub hardcore: T,
}

impl<T> PerMode<T> {
    pub fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Classic => &self.classic,
            Mode::Infinite => &self.infinite,
            Mode::Hardcore => &self.hardcore,
        }
    }

    pub fn get_mut(&mut self, mode: Mode) -> &mut T {
        match mode {
            Mode::Classic => &mut self.classic,
            Mode::Infinite => &mut self.infinite,
            Mode::Hardcore => &mut self.hardcore,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    best: PerMode<u64>,
    leaderboard: PerMode<Vec<LeaderboardEntry>>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self, mode: Mode) -> u64 {
        *self.best.get(mode)
    }

    /// Entries for `mode`, best first.
    pub fn leaderboard(&self, mode: Mode) -> &[LeaderboardEntry] {
        self.leaderboard.get(mode)
    }

    /// Raise the best score for `mode` if `score` beats it.
    pub fn observe_score(&mut self, mode: Mode, score: u64) -> bool {
        let best = self.best.get_mut(mode);
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }

    /// Record a finished game.
    ///
    /// Returns the 0-based rank of the new entry, or `None` when it did not
    /// make the top [`LEADERBOARD_CAPACITY`].
    pub fn record(&mut self, mode: Mode, score: u64, moves: u32, timestamp_ms: u64) -> Option<usize> {
        self.observe_score(mode, score);

        let entry = LeaderboardEntry {
            score,
            moves,
            timestamp_ms,
        };
        let entries = self.leaderboard.get_mut(mode);
        let rank = entries.partition_point(|e| e.ranks_before(&entry));
        if rank >= LEADERBOARD_CAPACITY {
            return None;
        }
        entries.insert(rank, entry);
        entries.truncate(LEADERBOARD_CAPACITY);
        Some(rank)
    }

    /// Restore ordering, capacity and best-score invariants after loading
    /// data that may have been edited by hand.
    pub fn normalize(&mut self) {
        for mode in Mode::ALL {
            let entries = self.leaderboard.get_mut(mode);
            entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.moves.cmp(&b.moves)));
            entries.truncate(LEADERBOARD_CAPACITY);
            let top = entries.first().map(|e| e.score).unwrap_or(0);
            self.observe_score(mode, top);
        }
    }
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM` (UTC), or `-` when the
/// timestamp is outside chrono's range.
pub fn format_utc_minutes(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
