//! Session events - hooks for collaborators that react to play
//!
//! The engine reports three moments to a [`SessionObserver`]: a session was
//! started, a move was committed and a session ended. Score persistence hangs
//! off these hooks instead of polling the session.

use crate::session::{GameSession, MoveOutcome};
use crate::spawn::SpawnedTile;
use crate::types::{Cell, Direction, Mode};

/// A move that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommit {
    pub direction: Direction,
    pub score_delta: u64,
    pub merges: u32,
    pub spawned: Option<SpawnedTile>,
}

impl MoveCommit {
    /// Build a commit from a move outcome; `None` for no-op moves.
    pub fn from_outcome(direction: Direction, outcome: &MoveOutcome) -> Option<Self> {
        outcome.moved.then_some(Self {
            direction,
            score_delta: outcome.score_delta,
            merges: outcome.merges,
            spawned: outcome.spawned,
        })
    }
}

/// Final figures of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub mode: Mode,
    pub score: u64,
    pub moves: u32,
    pub max_tile: Cell,
}

impl GameSummary {
    pub fn of(session: &GameSession) -> Self {
        Self {
            mode: session.mode(),
            score: session.score(),
            moves: session.moves(),
            max_tile: session.board().max_tile(),
        }
    }
}

/// Receiver for session events. Every hook defaults to doing nothing.
pub trait SessionObserver {
    fn game_started(&mut self, _session: &GameSession) {}

    fn move_committed(&mut self, _commit: &MoveCommit, _session: &GameSession) {}

    fn game_over(&mut self, _summary: &GameSummary) {}
}

impl SessionObserver for () {}

impl<A: SessionObserver, B: SessionObserver> SessionObserver for (A, B) {
    fn game_started(&mut self, session: &GameSession) {
        self.0.game_started(session);
        self.1.game_started(session);
    }

    fn move_committed(&mut self, commit: &MoveCommit, session: &GameSession) {
        self.0.move_committed(commit, session);
        self.1.move_committed(commit, session);
    }

    fn game_over(&mut self, summary: &GameSummary) {
        self.0.game_over(summary);
        self.1.game_over(summary);
    }
}

impl<T: SessionObserver + ?Sized> SessionObserver for &mut T {
    fn game_started(&mut self, session: &GameSession) {
        (**self).game_started(session);
    }

    fn move_committed(&mut self, commit: &MoveCommit, session: &GameSession) {
        (**self).move_committed(commit, session);
    }

    fn game_over(&mut self, summary: &GameSummary) {
        (**self).game_over(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rng::SimpleRng;

    #[derive(Default)]
    struct Tally {
        started: u32,
        commits: u32,
        over: u32,
    }

    impl SessionObserver for Tally {
        fn game_started(&mut self, _session: &GameSession) {
            self.started += 1;
        }
        fn move_committed(&mut self, _commit: &MoveCommit, _session: &GameSession) {
            self.commits += 1;
        }
        fn game_over(&mut self, _summary: &GameSummary) {
            self.over += 1;
        }
    }

    #[test]
    fn pair_fans_out_to_both() {
        let session = GameSession::start(Mode::Classic, &mut SimpleRng::new(1));
        let mut pair = (Tally::default(), Tally::default());
        pair.game_started(&session);
        pair.game_over(&GameSummary::of(&session));
        assert_eq!((pair.0.started, pair.1.started), (1, 1));
        assert_eq!((pair.0.over, pair.1.over), (1, 1));
        assert_eq!(pair.0.commits, 0);
    }

    #[test]
    fn commit_only_for_moves_that_changed_the_board() {
        let board = Board::from_rows(&[[2u32, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
            .unwrap();
        let session = GameSession::from_board(Mode::Classic, board).unwrap();
        let mut rng = SimpleRng::new(3);

        let up = session.apply_move(Direction::Up, &mut rng);
        assert!(MoveCommit::from_outcome(Direction::Up, &up).is_none());

        let left = session.apply_move(Direction::Left, &mut rng);
        let commit = MoveCommit::from_outcome(Direction::Left, &left).unwrap();
        assert_eq!(commit.score_delta, 4);
        assert_eq!(commit.merges, 1);
        assert!(commit.spawned.is_some());
    }

    #[test]
    fn summary_reports_max_tile() {
        let board = Board::from_rows(&[[2u32, 64, 0, 0], [0, 8, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
            .unwrap();
        let session = GameSession::from_board(Mode::Classic, board).unwrap();
        let summary = GameSummary::of(&session);
        assert_eq!(summary.max_tile, 64);
        assert_eq!(summary.mode, Mode::Classic);
        assert_eq!(summary.score, 0);
    }
}
