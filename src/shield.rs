/// Destructible shield: a fixed grid of durability cells anchored at a point.
///
/// Durability only ever decreases. Cells outside the arch mask start at 0
/// and stay there.

use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Shield {
    pub x: i32,
    pub y: i32,
    rows: usize,
    cols: usize,
    cell_size: i32,
    /// Row-major, `rows * cols` entries.
    cells: Vec<u8>,
}

/// Arch outline: the lower rows are solid, the top three narrow inward.
fn inside_arch(row: usize, col: usize) -> bool {
    match row {
        0 => (4..=7).contains(&col),
        1 => (3..=8).contains(&col),
        2 => (2..=9).contains(&col),
        _ => true,
    }
}

impl Shield {
    pub fn new(x: i32, y: i32, config: &GameConfig) -> Self {
        let rows = config.shield_rows;
        let cols = config.shield_cols;
        let mut cells = vec![0; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                if inside_arch(r, c) {
                    cells[r * cols + c] = config.shield_durability;
                }
            }
        }
        Shield {
            x,
            y,
            rows,
            cols,
            cell_size: config.shield_cell_size,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Durability of one cell, `None` outside the grid.
    pub fn durability(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Map an absolute point to `(row, col)`.
    ///
    /// Offsets divide toward zero, so a point less than one cell left of or
    /// above the anchor still lands in column or row 0.
    fn cell_at(&self, px: i32, py: i32) -> Option<(usize, usize)> {
        let col = (px - self.x) / self.cell_size;
        let row = (py - self.y) / self.cell_size;
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Erode the cell under the point. Returns `true` when the cell still had
    /// durability and absorbed the hit; destroyed cells and points outside
    /// the grid pass through untouched.
    pub fn hit(&mut self, px: i32, py: i32) -> bool {
        let Some((row, col)) = self.cell_at(px, py) else {
            return false;
        };
        let cell = &mut self.cells[row * self.cols + col];
        if *cell > 0 {
            *cell -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.cells.iter().all(|&hp| hp == 0)
    }
}

/// The evenly spaced row of shields guarding the player.
pub fn build_shields(config: &GameConfig) -> Vec<Shield> {
    let y = config.field_height - config.shield_bottom_offset;
    (0..config.shield_count)
        .map(|i| Shield::new(config.shield_start_x + i as i32 * config.shield_spacing, y, config))
        .collect()
}
