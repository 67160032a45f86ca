//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one name (`tui_2048::{core, engine,
//! input, store, term, types}`) and hosts the frontend pieces that
//! tie them together: command-line arguments, share text and the screen state
//! machine driven by `main`.

pub mod app;
pub mod cli;
pub mod share;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
