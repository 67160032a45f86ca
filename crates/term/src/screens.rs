//! Menu and leaderboard screens.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{draw_border, Viewport};
use crate::store::{LeaderboardEntry, Scoreboard};
use crate::types::{Mode, LEADERBOARD_CAPACITY};

fn title_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(0, 255, 255),
        bold: true,
        ..CellStyle::default()
    }
}

fn dim_style() -> CellStyle {
    CellStyle {
        dim: true,
        ..CellStyle::default()
    }
}

/// Mode picker shown at startup and after leaving a game.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuView;

impl MenuView {
    pub fn render_into(&self, selected: Mode, scores: &Scoreboard, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = 40.min(viewport.width);
        let h = 12.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        draw_border(fb, x, y, w, h, CellStyle::default());

        let inner_x = x + 1;
        let inner_w = w.saturating_sub(2);
        fb.put_str_centered(inner_x, y + 1, inner_w, "2 0 4 8", title_style());

        let normal = CellStyle::default();
        let highlight = CellStyle {
            fg: Rgb::new(20, 20, 28),
            bg: Rgb::new(0, 200, 200),
            bold: true,
            dim: false,
        };

        for (i, mode) in Mode::ALL.iter().enumerate() {
            let row = y + 3 + i as u16;
            let style = if *mode == selected { highlight } else { normal };
            fb.fill_rect(inner_x + 1, row, inner_w.saturating_sub(2), 1, ' ', style);

            let mut end = fb.put_u32(inner_x + 2, row, i as u32 + 1, style);
            end = fb.put_str(end + 2, row, mode.as_str(), style);
            let size_x = end.max(inner_x + 16);
            let side = mode.side() as u64;
            end = fb.put_u64(size_x, row, side, style);
            end = fb.put_str(end, row, "x", style);
            fb.put_u64(end, row, side, style);

            let best_x = inner_x + 23;
            let end = fb.put_str(best_x, row, "best ", style);
            fb.put_u64(end, row, scores.best(*mode), style);
        }

        let dim = dim_style();
        fb.put_str(inner_x + 2, y + 7, "enter/1-3  play", dim);
        fb.put_str(inner_x + 2, y + 8, "b          leaderboard", dim);
        fb.put_str(inner_x + 2, y + 9, "q          quit", dim);
    }

    pub fn render(&self, selected: Mode, scores: &Scoreboard, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(selected, scores, viewport, &mut fb);
        fb
    }
}

/// Top-10 table for one mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeaderboardView;

impl LeaderboardView {
    /// `highlight` marks a row (the game that just finished).
    pub fn render_into(
        &self,
        mode: Mode,
        entries: &[LeaderboardEntry],
        highlight: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = 48.min(viewport.width);
        let h = (LEADERBOARD_CAPACITY as u16 + 7).min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        draw_border(fb, x, y, w, h, CellStyle::default());

        let inner_x = x + 2;
        let end = fb.put_str(inner_x, y + 1, "LEADERBOARD  ", title_style());
        fb.put_str(end, y + 1, mode.as_str(), title_style());

        let header = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let cols = [inner_x, inner_x + 4, inner_x + 14, inner_x + 22];
        for (col, name) in cols.iter().zip(["#", "SCORE", "MOVES", "DATE (UTC)"]) {
            fb.put_str(*col, y + 3, name, header);
        }

        if entries.is_empty() {
            fb.put_str(inner_x, y + 4, "No scores for this mode yet. Play a game!", dim_style());
        }

        let normal = CellStyle::default();
        let marked = CellStyle {
            fg: Rgb::new(250, 210, 90),
            bold: true,
            ..CellStyle::default()
        };
        for (i, entry) in entries.iter().take(LEADERBOARD_CAPACITY).enumerate() {
            let row = y + 4 + i as u16;
            let style = if highlight == Some(i) { marked } else { normal };
            fb.put_u32(cols[0], row, i as u32 + 1, style);
            fb.put_u64(cols[1], row, entry.score, style);
            fb.put_u32(cols[2], row, entry.moves, style);
            fb.put_str(cols[3], row, &entry.date_string(), style);
        }

        fb.put_str(inner_x, y + h.saturating_sub(2), "tab next mode  esc back", dim_style());
    }

    pub fn render(
        &self,
        mode: Mode,
        entries: &[LeaderboardEntry],
        highlight: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(mode, entries, highlight, viewport, &mut fb);
        fb
    }
}
