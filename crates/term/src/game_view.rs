//! GameView: maps a grid snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O), so it can be unit-tested. The input is the
//! derived [`Grid`] (settled cells plus active-piece overlay); the view never
//! reaches into game state.
//!
//! [`Grid`]: blockfall_types::Grid

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorId, Grid, BOARD_HEIGHT, BOARD_WIDTH};

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

/// The 7-color cell palette, indexed by [`ColorId`] (entry 0 is unused).
const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 165, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(128, 0, 128),
];

/// RGB value for a cell color. Out-of-range ids fall back to white so a bad
/// id is visible rather than invisible.
pub fn color_rgb(color: ColorId) -> Rgb {
    PALETTE
        .get(color as usize)
        .copied()
        .unwrap_or(Rgb::new(255, 255, 255))
}

/// A lightweight terminal view for the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a grid snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, grid: &Grid, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let color = grid[y as usize][x as usize];
                if color != 0 {
                    self.draw_filled_cell(fb, start_x, start_y, x, y, color);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_filled_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: ColorId,
    ) {
        let style = CellStyle {
            fg: color_rgb(color),
            bg: Rgb::new(0, 0, 0),
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    /// The reference draws gray gridlines over the playfield; in a character
    /// grid a faint dot per cell provides the same texture.
    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(128, 128, 128),
            bg: Rgb::new(0, 0, 0),
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}
