//! Game driver - owns the live session and its random source
//!
//! Frontends speak in [`GameAction`]s; the driver turns them into core moves,
//! counts the games started (logged as episodes) and reports the start,
//! commit and game-over boundaries to a [`SessionObserver`].

use rand::RngCore;

use tui_2048_core::{
    GameSession, GameSnapshot, GameSummary, MoveCommit, SessionObserver, SpawnedTile,
};
use tui_2048_types::{Direction, GameAction, Mode};

/// What an action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The board changed. `game_over` is set when this move ended the game.
    Moved { commit: MoveCommit, game_over: bool },
    /// A direction that changes nothing, or any move after game over.
    Unchanged,
    /// A new session was started.
    Restarted,
}

impl ActionOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, ActionOutcome::Moved { .. })
    }

    /// Whether anything visible changed (move or restart).
    pub fn changed(&self) -> bool {
        !matches!(self, ActionOutcome::Unchanged)
    }
}

pub struct Game<R: RngCore> {
    session: GameSession,
    rng: R,
    episode_id: u32,
    last_spawn: Option<SpawnedTile>,
}

impl<R: RngCore> Game<R> {
    /// Start a first session in `mode`.
    pub fn new<O: SessionObserver + ?Sized>(mode: Mode, mut rng: R, observer: &mut O) -> Self {
        let session = GameSession::start(mode, &mut rng);
        log::info!("game started: mode={} episode=0", mode);
        observer.game_started(&session);
        Self {
            session,
            rng,
            episode_id: 0,
            last_spawn: None,
        }
    }

    /// Continue from an existing session (fixtures, replays).
    pub fn from_session<O: SessionObserver + ?Sized>(session: GameSession, rng: R, observer: &mut O) -> Self {
        log::info!("game resumed: mode={} moves={}", session.mode(), session.moves());
        observer.game_started(&session);
        Self {
            session,
            rng,
            episode_id: 0,
            last_spawn: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn game_over(&self) -> bool {
        self.session.is_terminal()
    }

    /// Tile added by the last committed move.
    pub fn last_spawn(&self) -> Option<SpawnedTile> {
        self.last_spawn
    }

    pub fn apply_action<O: SessionObserver + ?Sized>(
        &mut self,
        action: GameAction,
        observer: &mut O,
    ) -> ActionOutcome {
        match action.direction() {
            Some(direction) => self.apply_direction(direction, observer),
            None => {
                self.restart(observer);
                ActionOutcome::Restarted
            }
        }
    }

    pub fn apply_direction<O: SessionObserver + ?Sized>(
        &mut self,
        direction: Direction,
        observer: &mut O,
    ) -> ActionOutcome {
        let outcome = self.session.apply_move(direction, &mut self.rng);
        let Some(commit) = MoveCommit::from_outcome(direction, &outcome) else {
            return ActionOutcome::Unchanged;
        };

        self.session = outcome.session;
        self.last_spawn = commit.spawned;
        observer.move_committed(&commit, &self.session);

        let game_over = self.session.is_terminal();
        if game_over {
            let summary = GameSummary::of(&self.session);
            log::info!(
                "game over: mode={} score={} moves={} max_tile={}",
                summary.mode,
                summary.score,
                summary.moves,
                summary.max_tile
            );
            observer.game_over(&summary);
        }

        ActionOutcome::Moved { commit, game_over }
    }

    /// Replace the session with a fresh one in the same mode.
    pub fn restart<O: SessionObserver + ?Sized>(&mut self, observer: &mut O) {
        self.start_mode(self.mode(), observer);
    }

    /// Replace the session with a fresh one in `mode`.
    ///
    /// A running session is abandoned; it never reaches the leaderboard.
    pub fn start_mode<O: SessionObserver + ?Sized>(&mut self, mode: Mode, observer: &mut O) {
        if !self.session.is_terminal() && self.session.moves() > 0 {
            log::debug!(
                "abandoning session: score={} moves={}",
                self.session.score(),
                self.session.moves()
            );
        }
        self.session = GameSession::start(mode, &mut self.rng);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_spawn = None;
        log::info!("game started: mode={} episode={}", mode, self.episode_id);
        observer.game_started(&self.session);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Refresh `snap` in place. `snap.best` is kept if higher than the score.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.fill_from(&self.session);
        snap.last_spawn = self.last_spawn;
    }
}
