//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key events into [`crate::types::GameAction`]s and screen commands,
//! and recognizes mouse swipes as directions.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, handle_ui_key, should_quit, UiCommand};
pub use swipe::SwipeTracker;
