//! Share text for a finished game.

use crate::types::Mode;

/// "I scored N on 2048 (mode mode)", plus a "Beat me" line when a URL is set.
pub fn share_text(mode: Mode, score: u64, url: Option<&str>) -> String {
    let mut text = format!("I scored {} on 2048 ({} mode)", score, mode);
    if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
        text.push_str("\nBeat me: ");
        text.push_str(url);
    }
    text
}
