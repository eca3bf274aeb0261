//! Grid layout for fixed-size icon cells.
//!
//! Icons are placed densely, left to right and top to bottom, purely by
//! their position in the input sequence.

use crate::error::{Result, SheetError};

/// A 0-based grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    /// Top-left pixel of this cell.
    pub fn origin(self, cell_size: u32) -> (u32, u32) {
        (self.col * cell_size, self.row * cell_size)
    }

    /// 1-based coordinate written to the lookup table.
    pub fn coord(self) -> SheetCoord {
        SheetCoord {
            x: self.col + 1,
            y: self.row + 1,
        }
    }
}

/// 1-based cell coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetCoord {
    pub x: u32,
    pub y: u32,
}

/// Placement of `count` icons on a grid of `per_row` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    count: usize,
    cell_size: u32,
    per_row: u32,
}

impl GridLayout {
    /// Build a layout. Fails when either dimension is zero or the sheet
    /// would not fit in 32-bit pixel coordinates.
    pub fn new(count: usize, cell_size: u32, per_row: u32) -> Result<Self> {
        if cell_size == 0 || per_row == 0 {
            return Err(SheetError::InvalidConfig {
                message: format!(
                    "cell size and cells per row must be at least 1 (got {} and {})",
                    cell_size, per_row
                ),
                help: None,
            });
        }

        let layout = Self {
            count,
            cell_size,
            per_row,
        };

        let rows = u32::try_from(count.div_ceil(per_row as usize)).ok();
        let fits = rows
            .and_then(|rows| rows.checked_mul(cell_size))
            .and_then(|_| per_row.checked_mul(cell_size))
            .is_some();
        if !fits {
            return Err(SheetError::InvalidConfig {
                message: format!(
                    "{} icons of {}px in rows of {} exceed the maximum sheet size",
                    count, cell_size, per_row
                ),
                help: Some("Use a smaller icon size or more icons per row".to_string()),
            });
        }

        Ok(layout)
    }

    /// Number of placed icons.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn per_row(&self) -> u32 {
        self.per_row
    }

    /// Number of rows: `ceil(count / per_row)`. Zero when there are no icons.
    pub fn rows(&self) -> u32 {
        self.count.div_ceil(self.per_row as usize) as u32
    }

    /// Sheet width in pixels.
    pub fn width(&self) -> u32 {
        self.per_row * self.cell_size
    }

    /// Sheet height in pixels; zero when there are no icons.
    pub fn height(&self) -> u32 {
        self.rows() * self.cell_size
    }

    /// Cell of the icon at `index`, or `None` past the end.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        if index >= self.count {
            return None;
        }
        let per_row = self.per_row as usize;
        Some(Cell {
            row: (index / per_row) as u32,
            col: (index % per_row) as u32,
        })
    }

    /// Cells of all icons in sequence order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.count).filter_map(move |i| self.cell(i))
    }
}
