//! Coverage grid storage and the commit step for winning rectangles
//!
//! The grid is a `length x width` array of 0/1 cells. Coverage only ever
//! accumulates: once a cell is set it is never cleared again.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::region::Claim;

/// Occupancy grid recording which cells are already covered by a tower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGrid {
    cells: Array2<u8>,
    width: usize,
    length: usize,
}

impl CoverageGrid {
    /// Create an empty grid with `length` rows and `width` columns
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, length: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("length", length)?;

        Ok(Self {
            cells: Array2::zeros((length, width)),
            width,
            length,
        })
    }

    /// Adopt an existing occupancy array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty, too large, or holds values other than 0 and 1
    pub fn from_cells(cells: Array2<u8>) -> Result<Self> {
        let (length, width) = cells.dim();
        validate_dimension("width", width)?;
        validate_dimension("length", length)?;

        if let Some(&value) = cells.iter().find(|&&value| value > 1) {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("coverage cells must be 0 or 1, found {value}"),
            });
        }

        Ok(Self {
            cells,
            width,
            length,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Underlying occupancy array (rows, cols)
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Whether the cell at (`row`, `col`) is covered; out-of-range cells are not
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).is_some_and(|&value| value == 1)
    }

    /// Total number of covered cells
    pub fn covered_cells(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 1).count()
    }

    /// Fraction of the grid that is covered
    pub fn coverage_ratio(&self) -> f64 {
        self.covered_cells() as f64 / (self.width * self.length) as f64
    }

    /// Mark every cell of `claim` as covered
    ///
    /// Returns how many cells were newly covered, so applying the same claim
    /// twice reports zero the second time and leaves the grid unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FootprintOutOfBounds` if the claim does not fit inside the grid;
    /// the grid is not modified in that case
    pub fn commit(&mut self, claim: &Claim) -> Result<usize> {
        claim.check_bounds(self)?;

        let mut newly_covered = 0;
        for (row, col) in claim.cells() {
            if let Some(cell) = self.cells.get_mut([row, col]) {
                if *cell == 0 {
                    *cell = 1;
                    newly_covered += 1;
                }
            }
        }
        Ok(newly_covered)
    }

    /// Commit a claim if there is one; `None` leaves the grid untouched
    ///
    /// # Errors
    ///
    /// Propagates bounds errors from [`CoverageGrid::commit`]
    pub fn commit_optional(&mut self, claim: Option<&Claim>) -> Result<usize> {
        claim.map_or(Ok(0), |claim| self.commit(claim))
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
