//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and renders into a simple framebuffer that is
//! flushed to the terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions of a snapshot, testable without a terminal
//! - Tiles keep a roughly square look (2 columns per row of height)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod screens;

pub use tui_2048_core as core;
pub use tui_2048_store as store;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Hud, Viewport};
pub use palette::{tile_color, tile_style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{LeaderboardView, MenuView};
