//! Session module - the complete game state and the move orchestrator
//!
//! A [`GameSession`] is a plain value: every committed move returns a new
//! session and the previous one is never modified. A move runs
//! normalize → slide every row → restore, then compares boards. An unchanged
//! board is a strict no-op; a changed board is committed, the ledger is updated,
//! one tile is spawned and the terminal check runs on the post-spawn board.

use rand::RngCore;

use crate::board::Board;
use crate::ledger::TurnLedger;
use crate::merge::slide_row;
use crate::orient::{normalize, restore};
use crate::spawn::{place_random_tile, SpawnedTile};
use crate::terminal::is_terminal;
use crate::types::{Direction, Mode, INITIAL_TILES};

/// Complete state of one play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSession {
    mode: Mode,
    board: Board,
    ledger: TurnLedger,
    terminal: bool,
}

/// Board produced by sliding in one direction, before any spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSlide {
    pub board: Board,
    pub score_delta: u64,
    pub merges: u32,
}

/// Result of [`GameSession::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Session after the move (identical to the input when `moved` is false).
    pub session: GameSession,
    /// Whether any cell changed.
    pub moved: bool,
    /// Points earned by this move.
    pub score_delta: u64,
    /// Number of merges performed.
    pub merges: u32,
    /// Tile added after the move, if any.
    pub spawned: Option<SpawnedTile>,
}

/// Slide every row of `board` in `direction` (steps 1-3 of a move).
pub fn slide_board(board: &Board, direction: Direction) -> BoardSlide {
    let mut work = normalize(board, direction);
    let mut score_delta = 0u64;
    let mut merges = 0u32;

    for r in 0..work.side() {
        let slid = slide_row(work.row(r));
        work.set_row(r, &slid.row);
        score_delta += slid.score_delta;
        merges += slid.merges;
    }

    BoardSlide {
        board: restore(&work, direction),
        score_delta,
        merges,
    }
}

/// Start a new game: empty board for `mode` plus two spawned tiles.
pub fn start_game<R: RngCore + ?Sized>(mode: Mode, rng: &mut R) -> GameSession {
    GameSession::start(mode, rng)
}

/// Apply one direction command to `session`.
pub fn apply_move<R: RngCore + ?Sized>(
    session: &GameSession,
    direction: Direction,
    rng: &mut R,
) -> MoveOutcome {
    session.apply_move(direction, rng)
}

impl GameSession {
    /// Create a new session with [`INITIAL_TILES`] spawned tiles
    pub fn start<R: RngCore + ?Sized>(mode: Mode, rng: &mut R) -> Self {
        let mut board = Board::new(mode);
        for _ in 0..INITIAL_TILES {
            place_random_tile(&mut board, rng);
        }
        Self {
            mode,
            board,
            ledger: TurnLedger::new(),
            terminal: false,
        }
    }

    /// Resume a session from a known board and counters.
    ///
    /// Returns `None` when the board size does not match the mode. The terminal
    /// flag is derived from the board.
    pub fn resume(mode: Mode, board: Board, ledger: TurnLedger) -> Option<Self> {
        if board.side() != mode.side() {
            return None;
        }
        Some(Self {
            mode,
            board,
            ledger,
            terminal: is_terminal(&board),
        })
    }

    /// Session on a fixed board with fresh counters (fixtures, replays).
    pub fn from_board(mode: Mode, board: Board) -> Option<Self> {
        Self::resume(mode, board, TurnLedger::new())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> TurnLedger {
        self.ledger
    }

    pub fn score(&self) -> u64 {
        self.ledger.score()
    }

    pub fn moves(&self) -> u32 {
        self.ledger.moves()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether sliding in `direction` would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.terminal && slide_board(&self.board, direction).board != self.board
    }

    /// Apply one direction command, returning the next session.
    ///
    /// Terminal sessions and moves that change nothing return `self` unchanged
    /// without drawing from `rng`.
    pub fn apply_move<R: RngCore + ?Sized>(&self, direction: Direction, rng: &mut R) -> MoveOutcome {
        let unchanged = MoveOutcome {
            session: *self,
            moved: false,
            score_delta: 0,
            merges: 0,
            spawned: None,
        };

        if self.terminal {
            return unchanged;
        }

        let slide = slide_board(&self.board, direction);
        if slide.board == self.board {
            return unchanged;
        }

        let mut board = slide.board;
        let spawned = place_random_tile(&mut board, rng);

        MoveOutcome {
            session: GameSession {
                mode: self.mode,
                board,
                ledger: self.ledger.commit(slide.score_delta),
                terminal: is_terminal(&board),
            },
            moved: true,
            score_delta: slide.score_delta,
            merges: slide.merges,
            spawned,
        }
    }
}
