use chrono::Utc;

use crate::core::{GameSession, GameSummary, MoveCommit, SessionObserver};
use crate::file::ScoreStore;
use crate::scoreboard::Scoreboard;
use crate::types::Mode;

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Session observer that keeps the score file up to date.
///
/// Best scores are raised on every committed move and written out at the next
/// session boundary; finished games go to the leaderboard and are saved at
/// once. Storage errors are logged and never reach the game.
pub struct ScoreKeeper {
    store: ScoreStore,
    clock: fn() -> u64,
    last_rank: Option<(Mode, usize)>,
}

impl ScoreKeeper {
    pub fn new(store: ScoreStore) -> Self {
        Self::with_clock(store, now_ms)
    }

    pub fn with_clock(store: ScoreStore, clock: fn() -> u64) -> Self {
        Self {
            store,
            clock,
            last_rank: None,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        self.store.board()
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    pub fn best(&self, mode: Mode) -> u64 {
        self.store.board().best(mode)
    }

    /// Leaderboard position of the last finished game, if it placed.
    pub fn last_rank(&self) -> Option<(Mode, usize)> {
        self.last_rank
    }

    /// Write pending changes (call before exiting).
    pub fn flush(&mut self) {
        if let Err(err) = self.store.flush() {
            log::warn!("failed to save scores: {err:#}");
        }
    }
}

impl SessionObserver for ScoreKeeper {
    fn game_started(&mut self, _session: &GameSession) {
        self.last_rank = None;
        self.flush();
    }

    fn move_committed(&mut self, _commit: &MoveCommit, session: &GameSession) {
        if self.store.board().best(session.mode()) < session.score() {
            self.store.board_mut().observe_score(session.mode(), session.score());
        }
    }

    fn game_over(&mut self, summary: &GameSummary) {
        let ts = (self.clock)();
        let rank = self
            .store
            .board_mut()
            .record(summary.mode, summary.score, summary.moves, ts);
        match rank {
            Some(rank) => log::info!(
                "leaderboard {}: score {} placed #{}",
                summary.mode,
                summary.score,
                rank + 1
            ),
            None => log::info!("leaderboard {}: score {} did not place", summary.mode, summary.score),
        }
        self.last_rank = rank.map(|r| (summary.mode, r));
        self.flush();
    }
}
