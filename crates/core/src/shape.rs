//! Shape module - fixed-size binary matrices and clockwise rotation
//!
//! A [`ShapeMatrix`] stores up to 4x4 cells in row-major order. Only the
//! `width x height` top-left region is meaningful; everything outside it is
//! always `false`, so two matrices with the same layout compare equal.

/// Largest supported matrix side
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular 0/1 matrix describing which cells of a piece are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl ShapeMatrix {
    /// Build a matrix from `H` rows of `W` values (non-zero = filled).
    ///
    /// Rows are fixed-size arrays, so the input is rectangular by type.
    /// Panics (at compile time when used in a `const`) if either side is zero
    /// or larger than [`MAX_SHAPE_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::shape::ShapeMatrix;
    ///
    /// let t = ShapeMatrix::from_rows([[1, 1, 1], [0, 1, 0]]);
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(t.is_filled(1, 1));
    /// assert!(!t.is_filled(0, 1));
    /// ```
    pub const fn from_rows<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Self {
        assert!(W > 0 && H > 0, "shape must have at least one row and column");
        assert!(
            W <= MAX_SHAPE_DIM && H <= MAX_SHAPE_DIM,
            "shape exceeds the 4x4 matrix limit"
        );

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            cells,
            width: W as u8,
            height: H as u8,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the cell at column `x`, row `y` is filled (false outside the matrix)
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.cells[y][x]
    }

    /// Offsets `(x, y)` of every filled cell, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(move |y| (0..self.width()).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.cells[y][x])
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    ///
    /// Returns a new matrix with width and height swapped; `self` is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::shape::ShapeMatrix;
    ///
    /// let i = ShapeMatrix::from_rows([[1, 1, 1, 1]]);
    /// let vertical = i.rotate_clockwise();
    /// assert_eq!((vertical.width(), vertical.height()), (1, 4));
    /// assert_eq!(vertical.rotate_clockwise(), i);
    /// ```
    pub fn rotate_clockwise(&self) -> Self {
        let w = self.width();
        let h = self.height();
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

        // new[r][c] = old[h - 1 - c][r]
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }

        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}
