//! Subtract existing coverage from a tower footprint

use ndarray::{Array2, Zip};

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{CoverageGrid, Footprint};

/// Mask of cells inside `footprint` that `grid` does not cover yet
///
/// Both arrays are full-grid sized. A mask cell is 1 exactly when the footprint
/// cell is set and the grid cell is clear. Neither input is modified.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the arrays differ in shape
pub fn claimable_mask(grid: &Array2<u8>, footprint: &Array2<u8>) -> Result<Array2<u8>> {
    if grid.dim() != footprint.dim() {
        return Err(AlgorithmError::ShapeMismatch {
            operation: "claimable_mask",
            expected: grid.dim(),
            actual: footprint.dim(),
        });
    }

    Ok(Zip::from(grid)
        .and(footprint)
        .map_collect(|&covered, &wanted| u8::from(wanted != 0 && covered == 0)))
}

/// Rasterize `footprint` and compute its claimable mask against `grid`
///
/// # Errors
///
/// Returns `FootprintOutOfBounds` if the footprint leaves the grid
pub fn claimable_for(grid: &CoverageGrid, footprint: &Footprint) -> Result<Array2<u8>> {
    let requested = footprint.to_array(grid)?;
    claimable_mask(grid.cells(), &requested)
}
