//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::types::Mode;

/// Score file name, placed in `$HOME` by default.
pub const SCORES_FILE: &str = ".tui-2048-scores.json";

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Terminal 2048 with leaderboards")]
pub struct Args {
    /// Skip the menu and start a game in this mode (classic, infinite, hardcore).
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<Mode>,
    /// Seed for a reproducible tile sequence.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Score file (best scores and leaderboards).
    #[arg(long, env = "TUI2048_SCORES")]
    pub scores: Option<PathBuf>,
    /// Link appended to the share text.
    #[arg(long)]
    pub share_url: Option<String>,
    /// Write logs to this file; filter with RUST_LOG (default "info").
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s)
        .ok_or_else(|| format!("unknown mode '{}' (expected classic, infinite or hardcore)", s))
}

impl Args {
    pub fn scores_path(&self) -> PathBuf {
        self.scores.clone().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(SCORES_FILE)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_and_seed() {
        let args = Args::try_parse_from(["tui-2048", "--mode", "Hardcore", "--seed", "42"]).unwrap();
        assert_eq!(args.mode, Some(Mode::Hardcore));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["tui-2048", "--mode", "zen"]).is_err());
    }

    #[test]
    fn explicit_scores_path_wins() {
        let args = Args::try_parse_from(["tui-2048", "--scores", "/tmp/s.json"]).unwrap();
        assert_eq!(args.scores_path(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["tui-2048", "--no-ai"]).is_err());
        assert!(Args::try_parse_from(["tui-2048", "--ai-port", "7777"]).is_err());
    }
}
