//! Score persistence: per-mode best scores and leaderboards in a JSON file.
//!
//! [`Scoreboard`] holds the data and the ranking rules, [`ScoreStore`] binds
//! it to a file, and [`ScoreKeeper`] feeds it from game events.

pub mod file;
pub mod keeper;
pub mod scoreboard;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use file::ScoreStore;
pub use keeper::{now_ms, ScoreKeeper};
pub use scoreboard::{format_utc_minutes, LeaderboardEntry, PerMode, Scoreboard};
