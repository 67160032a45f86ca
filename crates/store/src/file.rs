//! JSON file persistence for the [`Scoreboard`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::scoreboard::Scoreboard;

/// A scoreboard bound to a file on disk.
#[derive(Debug)]
pub struct ScoreStore {
    path: Option<PathBuf>,
    board: Scoreboard,
    dirty: bool,
}

impl ScoreStore {
    /// Load the scoreboard from `path`.
    ///
    /// A missing file yields an empty board. An unreadable or corrupt file is
    /// logged and also yields an empty board; it is replaced on the next save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let board = match read_scoreboard(&path) {
            Ok(Some(board)) => {
                log::info!("loaded scores from {}", path.display());
                board
            }
            Ok(None) => {
                log::info!("no score file at {}, starting fresh", path.display());
                Scoreboard::new()
            }
            Err(err) => {
                log::warn!("ignoring score file: {err:#}");
                Scoreboard::new()
            }
        };
        Self {
            path: Some(path),
            board,
            dirty: false,
        }
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            board: Scoreboard::new(),
            dirty: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Mutable access; marks the store as needing a save.
    pub fn board_mut(&mut self) -> &mut Scoreboard {
        self.dirty = true;
        &mut self.board
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the scoreboard.
    ///
    /// The JSON goes to a sibling temp file first and is then renamed over the
    /// target, so a crash never leaves a half-written score file.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            self.dirty = false;
            return Ok(());
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create score directory {}", dir.display()))?;
        }

        let json = serde_json::to_vec_pretty(&self.board).context("serialize scores")?;
        let tmp = temp_path(path);
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("replace {} with {}", path.display(), tmp.display()))?;

        self.dirty = false;
        log::debug!("saved scores to {}", path.display());
        Ok(())
    }

    /// Save only if something changed since the last save.
    pub fn flush(&mut self) -> Result<()> {
        if self.dirty {
            self.save()
        } else {
            Ok(())
        }
    }
}

/// `Ok(None)` when the file does not exist.
fn read_scoreboard(path: &Path) -> Result<Option<Scoreboard>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("read {}", path.display()));
        }
    };
    let mut board: Scoreboard = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse {}", path.display()))?;
    board.normalize();
    Ok(Some(board))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
