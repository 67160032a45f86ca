//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{tile_style, BOARD_BG};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything shown around the board that is not part of the game state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    /// One-line message under the board (share text, save errors).
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal columns/rows per board cell, largest first. The view picks the
/// first that fits the viewport.
const CELL_SIZES: [(u16, u16); 3] = [(8, 4), (7, 2), (6, 1)];

const PANEL_MIN_W: u16 = 12;

pub struct GameView {
    anchor_y: AnchorY,
    /// Fixed cell size; `None` picks one from [`CELL_SIZES`].
    cell: Option<(u16, u16)>,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            cell: None,
        }
    }
}

/// Board placement inside the viewport for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
    cell_w: u16,
    cell_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl Layout {
    fn new(side: u16, cell_w: u16, cell_h: u16) -> Self {
        let gap_x = 1;
        let gap_y = u16::from(cell_h >= 2);
        Self {
            x: 0,
            y: 0,
            frame_w: side * cell_w + gap_x + 2,
            frame_h: side * cell_h + gap_y + 2,
            cell_w,
            cell_h,
            gap_x,
            gap_y,
        }
    }

    /// Top-left corner and size of the tile at (row, col).
    fn tile_rect(&self, row: u16, col: u16) -> (u16, u16, u16, u16) {
        (
            self.x + 1 + self.gap_x + col * self.cell_w,
            self.y + 1 + self.gap_y + row * self.cell_h,
            self.cell_w - self.gap_x,
            self.cell_h - self.gap_y,
        )
    }
}

impl GameView {
    /// Use a fixed cell size instead of fitting to the viewport.
    pub fn with_cell_size(mut self, cell_w: u16, cell_h: u16) -> Self {
        self.cell = Some((cell_w.max(2), cell_h.max(1)));
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, side: u16, viewport: Viewport) -> Layout {
        let mut layout = match self.cell {
            Some((w, h)) => Layout::new(side, w, h),
            None => CELL_SIZES
                .iter()
                .map(|&(w, h)| Layout::new(side, w, h))
                // Leave room for the message line.
                .find(|l| l.frame_w <= viewport.width && l.frame_h < viewport.height)
                .unwrap_or_else(|| {
                    let (w, h) = CELL_SIZES[CELL_SIZES.len() - 1];
                    Layout::new(side, w, h)
                }),
        };

        let panel = if viewport.width >= layout.frame_w + 2 + PANEL_MIN_W {
            2 + PANEL_MIN_W
        } else {
            0
        };
        layout.x = viewport.width.saturating_sub(layout.frame_w + panel) / 2;
        layout.y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(layout.frame_h + 1) / 2,
            AnchorY::Top => 0,
        };
        layout
    }

    /// Render the game screen into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let side = snap.side() as u16;
        let layout = self.layout(side, viewport);

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.fill_rect(layout.x + 1, layout.y + 1, layout.frame_w - 2, layout.frame_h - 2, ' ', bg);
        draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        let spawned = snap.last_spawn.map(|t| (t.pos.0 as u16, t.pos.1 as u16));
        for (r, row) in snap.rows().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let (r, c) = (r as u16, c as u16);
                self.draw_tile(fb, &layout, r, c, value, spawned == Some((r, c)));
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            draw_overlay(fb, &layout, "GAME OVER", Some("r restart  x share  esc menu"));
        }

        let below = layout.y + layout.frame_h;
        if let Some(message) = hud.message {
            let style = CellStyle {
                fg: Rgb::new(250, 210, 90),
                ..CellStyle::default()
            };
            fb.put_str(layout.x, below, message, style);
        } else if below < viewport.height {
            let help = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(layout.x, below, "arrows/hjkl/wasd or swipe  r restart  esc menu  q quit", help);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, row: u16, col: u16, value: u32, fresh: bool) {
        let (x, y, w, h) = layout.tile_rect(row, col);
        let mut style = tile_style(value);
        fb.fill_rect(x, y, w, h, ' ', style);
        if value == 0 {
            let dot = CellStyle {
                fg: Rgb::new(90, 90, 100),
                dim: true,
                ..style
            };
            fb.put_char(x + w / 2, y + h / 2, '·', dot);
            return;
        }
        if fresh {
            style.bold = true;
        }
        let mut digits = [0u8; 20];
        let text = crate::fb::format_u64(value as u64, &mut digits);
        fb.put_str_centered(x, y + h / 2, w, text, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &Layout) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = layout.y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("BEST", snap.best.max(snap.score)),
            ("MOVES", snap.moves as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "MODE", label);
        let end = fb.put_str(panel_x, y + 1, snap.mode.as_str(), value);
        let mut dims = [0u8; 20];
        let side = crate::fb::format_u64(snap.side as u64, &mut dims);
        let end = fb.put_str(end + 1, y + 1, side, dim);
        let end = fb.put_str(end, y + 1, "x", dim);
        fb.put_str(end, y + 1, side, dim);
    }
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, layout: &Layout, title: &str, hint: Option<&str>) {
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    };
    let inner_w = layout.frame_w.saturating_sub(2);
    let mid_y = layout.y + layout.frame_h / 2;
    let rows = if hint.is_some() { 2 } else { 1 };
    let top = mid_y.saturating_sub(rows / 2);

    fb.fill_rect(layout.x + 1, top, inner_w, rows, ' ', style);
    fb.put_str_centered(layout.x + 1, top, inner_w, title, style);
    if let Some(hint) = hint {
        let hint_style = CellStyle {
            bold: false,
            dim: true,
            ..style
        };
        fb.put_str_centered(layout.x + 1, top + 1, inner_w, hint, hint_style);
    }
}
