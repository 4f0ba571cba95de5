//! Rectangular regions on the coverage grid
//!
//! A [`Footprint`] is the full area a new tower would like to cover. A [`Claim`]
//! is the rectangle it actually wins once existing coverage has been subtracted.
//! Both use cell coordinates with `x` as the column and `y` as the row.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter, out_of_bounds};
use crate::spatial::grid::CoverageGrid;

/// Candidate rectangle requested by a new tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    /// Leftmost column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Footprint {
    /// Create a footprint with non-zero extent
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is zero
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Footprint covering an entire grid
    pub const fn full(grid: &CoverageGrid) -> Self {
        Self {
            x: 0,
            y: 0,
            width: grid.width(),
            height: grid.length(),
        }
    }

    /// Number of cells inside the footprint
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Verify the footprint lies entirely inside the grid
    ///
    /// # Errors
    ///
    /// Returns `FootprintOutOfBounds` when any edge reaches past the grid
    pub fn check_bounds(&self, grid: &CoverageGrid) -> Result<()> {
        check_rect(
            (self.x, self.y, self.width, self.height),
            (grid.width(), grid.length()),
        )
    }

    /// Rasterize the footprint into a full-grid binary array
    ///
    /// # Errors
    ///
    /// Returns `FootprintOutOfBounds` if the footprint does not fit the grid
    pub fn to_array(&self, grid: &CoverageGrid) -> Result<Array2<u8>> {
        self.check_bounds(grid)?;
        let rows = self.y..self.y + self.height;
        let cols = self.x..self.x + self.width;
        Ok(Array2::from_shape_fn(
            (grid.length(), grid.width()),
            |(row, col)| u8::from(rows.contains(&row) && cols.contains(&col)),
        ))
    }
}

/// Winning rectangle of newly claimable cells for one tower
///
/// `y` is the top row of the rectangle. `row` records the histogram row the
/// rectangle was found on, which is always its bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Claim {
    /// Leftmost column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Histogram row where the rectangle was found (bottom row)
    pub row: usize,
}

impl Claim {
    /// Build a claim from the bottom row it was discovered on
    ///
    /// Returns `None` when `height` exceeds the rows available above `row`.
    pub const fn from_bottom(x: usize, row: usize, width: usize, height: usize) -> Option<Self> {
        if height == 0 || height > row + 1 {
            return None;
        }
        Some(Self {
            x,
            y: row + 1 - height,
            width,
            height,
            row,
        })
    }

    /// Number of cells in the claim
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Test whether a cell lies inside the claim
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.y && row < self.y + self.height && col >= self.x && col < self.x + self.width
    }

    /// Iterate over every `(row, col)` inside the claim
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |row| (self.x..self.x + self.width).map(move |col| (row, col)))
    }

    /// Verify the claim lies entirely inside the grid
    ///
    /// # Errors
    ///
    /// Returns `FootprintOutOfBounds` when any edge reaches past the grid
    pub fn check_bounds(&self, grid: &CoverageGrid) -> Result<()> {
        check_rect(
            (self.x, self.y, self.width, self.height),
            (grid.width(), grid.length()),
        )
    }
}

fn check_rect(rect: (usize, usize, usize, usize), grid: (usize, usize)) -> Result<()> {
    let (x, y, width, height) = rect;
    let fits_cols = x.checked_add(width).is_some_and(|end| end <= grid.0);
    let fits_rows = y.checked_add(height).is_some_and(|end| end <= grid.1);
    if fits_cols && fits_rows {
        Ok(())
    } else {
        Err(out_of_bounds(rect, grid))
    }
}
