//! Board module - the grid of settled cells.
//!
//! Settled state lives in a single board-owned map from cell coordinate to
//! color and is exposed only through board methods. Coordinates are (x, y)
//! with x in 0..WIDTH left to right and y growing downward; y may be negative
//! for cells locked above the visible grid.

use std::collections::HashMap;

use crate::types::{ColorId, Grid, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board: 10 columns by 20 visible rows of settled cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Locked cells, keyed by coordinate. A key is present iff that cell is
    /// permanently settled; the falling piece is never written here except
    /// at lock time.
    locked: HashMap<(i8, i8), ColorId>,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Color of the locked cell at (x, y), if any.
    pub fn color_at(&self, x: i8, y: i8) -> Option<ColorId> {
        self.locked.get(&(x, y)).copied()
    }

    /// Whether (x, y) holds a settled cell.
    pub fn is_locked(&self, x: i8, y: i8) -> bool {
        self.locked.contains_key(&(x, y))
    }

    /// Whether a falling cell may occupy (x, y).
    ///
    /// Legal iff x is inside the side walls, y is above the floor, and the
    /// cell is either above the visible grid (y < 0) or not settled. There is
    /// deliberately no lower bound on y: pieces spawn and rotate freely above
    /// the playfield before becoming visible.
    pub fn allows(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !self.is_locked(x, y)
    }

    /// Settle a cell. Existing entries are overwritten.
    pub fn set(&mut self, x: i8, y: i8, color: ColorId) {
        self.locked.insert((x, y), color);
    }

    /// Commit a piece's cells into the locked map under one color.
    ///
    /// Cells above the visible grid are committed too; locking never fails.
    pub fn lock(&mut self, cells: &[(i8, i8)], color: ColorId) {
        for &(x, y) in cells {
            self.locked.insert((x, y), color);
        }
    }

    /// Whether every column of visible row y is settled.
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        (0..BOARD_WIDTH as i8).all(|x| self.is_locked(x, y))
    }

    /// Clear all completed rows and compact the remainder downward.
    ///
    /// Rows are scanned from the bottom up. Each completed row is removed and
    /// every cell strictly above it (negative y included) shifts down one row,
    /// keeping its column and color. Because the shift slides the row above
    /// into the index just examined, the same index is re-checked before the
    /// scan moves up, so stacked completed rows all clear in one call.
    ///
    /// Returns the number of rows cleared; 0 leaves the map untouched.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as i8 - 1;
        while y >= 0 {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Remove row y and shift everything above it down by one.
    fn remove_row(&mut self, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            self.locked.remove(&(x, y));
        }

        // Re-key in two phases (collect, then reinsert shifted) so no entry
        // is clobbered by a neighbor that has not moved yet.
        let above: Vec<((i8, i8), ColorId)> = self
            .locked
            .iter()
            .filter(|&(&(_, cy), _)| cy < y)
            .map(|(&key, &color)| (key, color))
            .collect();

        for &(key, _) in &above {
            self.locked.remove(&key);
        }
        for ((x, cy), color) in above {
            self.locked.insert((x, cy + 1), color);
        }
    }

    /// Number of settled cells.
    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    /// Iterate over all settled cells as ((x, y), color).
    pub fn iter(&self) -> impl Iterator<Item = ((i8, i8), ColorId)> + '_ {
        self.locked.iter().map(|(&key, &color)| (key, color))
    }

    /// Derive the visible grid: locked colors where present, 0 elsewhere.
    ///
    /// Writes into a caller-owned buffer so render paths can reuse it.
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.color_at(x as i8, y as i8).unwrap_or(0);
            }
        }
    }
}
