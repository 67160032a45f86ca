//! Tile colours.

use crate::fb::{CellStyle, Rgb};
use crate::types::Cell;

/// Background behind the grid.
pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
/// Empty cell colour.
pub const EMPTY_BG: Rgb = Rgb::new(48, 48, 60);
/// Colour for tiles above 4096.
pub const FALLBACK_BG: Rgb = Rgb::new(0x55, 0x55, 0x55);

const LIGHT_FG: Rgb = Rgb::new(245, 245, 245);
const DARK_FG: Rgb = Rgb::new(20, 20, 28);

/// Background colour of a tile.
pub fn tile_color(value: Cell) -> Rgb {
    match value {
        0 => EMPTY_BG,
        2 => Rgb::new(0x2c, 0x3e, 0x50),
        4 => Rgb::new(0x34, 0x49, 0x5e),
        8 => Rgb::new(0x16, 0xa0, 0x85),
        16 => Rgb::new(0x27, 0xae, 0x60),
        32 => Rgb::new(0x29, 0x80, 0xb9),
        64 => Rgb::new(0x8e, 0x44, 0xad),
        128 => Rgb::new(0xe6, 0x7e, 0x22),
        256 => Rgb::new(0xd3, 0x54, 0x00),
        512 => Rgb::new(0xc0, 0x39, 0x2b),
        1024 => Rgb::new(0xf1, 0xc4, 0x0f),
        2048 => Rgb::new(0x00, 0xff, 0xff),
        4096 => Rgb::new(0xff, 0x00, 0xff),
        _ => FALLBACK_BG,
    }
}

/// Full style for a tile: its colour plus a readable foreground.
pub fn tile_style(value: Cell) -> CellStyle {
    let bg = tile_color(value);
    CellStyle {
        fg: if bg.luma() > 150 { DARK_FG } else { LIGHT_FG },
        bg,
        bold: value >= 128,
        dim: false,
    }
}
