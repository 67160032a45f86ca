//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond parsing and naming, making
//! them usable in any context (core logic, input mapping, terminal rendering,
//! score persistence).
//!
//! # Board Dimensions
//!
//! | Mode | Side | Cells |
//! |------|------|-------|
//! | `classic` | 4 | 16 |
//! | `infinite` | 4 | 16 |
//! | `hardcore` | 5 | 25 |
//!
//! Boards are stored in fixed arrays sized for [`MAX_SIDE`], so every board fits
//! in [`MAX_CELLS`] cells regardless of mode.
//!
//! # Spawning
//!
//! A new tile is a 2 with probability 90% and a 4 with probability
//! [`FOUR_TILE_PERCENT`]%. A new game starts with [`INITIAL_TILES`] tiles.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Mode};
//!
//! assert_eq!(Mode::from_str("Hardcore"), Some(Mode::Hardcore));
//! assert_eq!(Mode::Hardcore.side(), 5);
//!
//! let action = GameAction::from(Direction::Up);
//! assert_eq!(action.direction(), Some(Direction::Up));
//! ```

use serde::{Deserialize, Serialize};

/// Largest supported board side (hardcore mode).
pub const MAX_SIDE: usize = 5;

/// Storage capacity of a board in cells.
pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

/// Board side for classic and infinite modes.
pub const CLASSIC_SIDE: usize = 4;

/// Board side for hardcore mode.
pub const HARDCORE_SIDE: usize = 5;

/// Value of an ordinary spawned tile.
pub const SPAWN_LOW: Cell = 2;

/// Value of a rare spawned tile.
pub const SPAWN_HIGH: Cell = 4;

/// Chance (in percent) that a spawned tile is [`SPAWN_HIGH`].
pub const FOUR_TILE_PERCENT: u32 = 10;

/// Tiles placed on an empty board when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Entries kept per mode on the leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Frontend event loop tick (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// A cell on the game board.
///
/// - `0`: empty
/// - any other value: a tile, always a power of two ≥ 2
pub type Cell = u32;

/// The four directions tiles can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game mode, fixed for the lifetime of one session.
///
/// Classic and infinite play on a 4x4 board, hardcore on 5x5. All three modes
/// end the same way: when no move is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Classic,
    Infinite,
    Hardcore,
}

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Mode; 3] = [Mode::Classic, Mode::Infinite, Mode::Hardcore];

    /// Board side length for this mode.
    pub fn side(&self) -> usize {
        match self {
            Mode::Classic | Mode::Infinite => CLASSIC_SIDE,
            Mode::Hardcore => HARDCORE_SIDE,
        }
    }

    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Mode::Classic),
            "infinite" => Some(Mode::Infinite),
            "hardcore" => Some(Mode::Hardcore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Infinite => "infinite",
            Mode::Hardcore => "hardcore",
        }
    }

    /// The mode after this one in menu order, wrapping around.
    pub fn next(&self) -> Mode {
        match self {
            Mode::Classic => Mode::Infinite,
            Mode::Infinite => Mode::Hardcore,
            Mode::Hardcore => Mode::Classic,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game actions that can be applied to a running game
///
/// Keyboard and swipe input both resolve to these actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward the left edge
    MoveLeft,
    /// Slide all tiles toward the right edge
    MoveRight,
    /// Slide all tiles toward the top edge
    MoveUp,
    /// Slide all tiles toward the bottom edge
    MoveDown,
    /// Start a fresh game in the same mode
    Restart,
}

impl GameAction {
    /// The slide direction carried by this action, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}
