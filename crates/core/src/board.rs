//! Board module - the settled-cell grid
//!
//! Cells are stored in a flat row-major `Vec` whose length is fixed at
//! construction; the dimensions never change afterwards.
//! Coordinates: `(x, y)` with `x` in `0..width` (left to right) and `y` in
//! `0..height` (top to bottom). Negative `y` is the space above the board.

use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::types::{Cell, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_SIDE};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`ConfigError::InvalidDimensions`] if either side is zero
    /// and with [`ConfigError::BoardTooLarge`] if either side exceeds
    /// [`MAX_BOARD_SIDE`].
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision query.
    ///
    /// The side walls (`x` outside `0..width`) and the floor (`y >= height`)
    /// count as occupied. Everything above the board (`y < 0`) is free, so
    /// pieces may stick out of the top after spawning or rotating.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width || (y >= 0 && y as usize >= self.height) {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y` (panics if `y >= height`)
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Write the piece's filled cells into the grid using the piece color.
    ///
    /// The caller must have checked that the piece does not collide. Cells
    /// above the board are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        debug_assert!(
            !piece.collides(self, 0, 0),
            "merging a piece that overlaps the board or its walls"
        );
        let color = piece.color;
        for (x, y) in piece.cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// Rows are scanned bottom to top with a read and a write cursor; kept
    /// rows keep their relative order and the vacated rows at the top are
    /// emptied. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// Validate board sides and return the cell count.
///
/// Every accepted side fits in `i32` and `u16`, so coordinates can be cast
/// freely once a board exists.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    if width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
        return Err(ConfigError::BoardTooLarge {
            width,
            height,
            max: MAX_BOARD_SIDE,
        });
    }
    width
        .checked_mul(height)
        .ok_or(ConfigError::BoardTooLarge {
            width,
            height,
            max: MAX_BOARD_SIDE,
        })
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cells: vec![None; DEFAULT_BOARD_WIDTH * DEFAULT_BOARD_HEIGHT],
        }
    }
}
