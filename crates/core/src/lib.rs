//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the sliding-tile rules and the session state machine.
//! It has **no dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: A seeded RNG reproduces identical games (for tests and replays)
//! - **Testable**: Every rule is a pure function over plain values
//! - **Portable**: Runs in any environment (terminal, headless, benchmarks)
//! - **Allocation-free**: Boards and rows live on the stack
//!
//! # Module Structure
//!
//! - [`board`]: square grid of 4x4 or 5x5 tiles
//! - [`orient`]: rotations and mirrors that turn every direction into a left slide
//! - [`merge`]: the single-row slide and merge rule
//! - [`spawn`]: random tile placement (90% twos, 10% fours)
//! - [`terminal`]: game-over detection
//! - [`ledger`]: score and move counters
//! - [`session`]: the game session value and the move orchestrator
//! - [`events`]: observer hooks for score persistence
//! - [`snapshot`]: fixed-size copy of a session for views and observers
//! - [`rng`]: deterministic LCG and draw helpers
//!
//! # Game Rules
//!
//! - **Modes**: classic and infinite play on 4x4, hardcore on 5x5
//! - **Merging**: each tile merges at most once per move; the merged value is added to the score
//! - **No-op moves**: a move that changes nothing consumes no turn and spawns nothing
//! - **Game over**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameSession, SimpleRng};
//! use tui_2048_types::{Direction, Mode};
//!
//! let mut rng = SimpleRng::new(12345);
//! let session = GameSession::start(Mode::Classic, &mut rng);
//! assert_eq!(session.board().count_tiles(), 2);
//!
//! let outcome = session.apply_move(Direction::Left, &mut rng);
//! if outcome.moved {
//!     assert_eq!(outcome.session.moves(), 1);
//! } else {
//!     assert_eq!(outcome.session, session);
//! }
//! ```

pub mod board;
pub mod events;
pub mod ledger;
pub mod merge;
pub mod orient;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Pos};
pub use events::{GameSummary, MoveCommit, SessionObserver};
pub use ledger::TurnLedger;
pub use merge::{slide_row, RowSlide};
pub use orient::{normalize, restore, Transform};
pub use rng::{pick_below, roll_percent, SimpleRng};
pub use session::{apply_move, slide_board, start_game, BoardSlide, GameSession, MoveOutcome};
pub use snapshot::GameSnapshot;
pub use spawn::{place_random_tile, spawn, SpawnedTile};
pub use terminal::is_terminal;
