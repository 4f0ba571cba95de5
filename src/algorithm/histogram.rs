//! Column run heights over a claimable mask
//!
//! Each cell of the result counts the consecutive claimable cells in its column
//! ending at that row. Every row then reads as a bar chart, which turns the 2-D
//! rectangle search into one largest-rectangle-in-histogram query per row.

use ndarray::{Array2, Axis};

/// Build per-row height histograms from a claimable mask
///
/// Any non-zero mask value counts as claimable.
pub fn column_heights(mask: &Array2<u8>) -> Array2<u32> {
    let mut heights = Array2::<u32>::zeros(mask.dim());

    let mut previous: Option<Vec<u32>> = None;
    for (mask_row, mut height_row) in mask
        .axis_iter(Axis(0))
        .zip(heights.axis_iter_mut(Axis(0)))
    {
        for (col, (&cell, height)) in mask_row.iter().zip(height_row.iter_mut()).enumerate() {
            *height = if cell == 0 {
                0
            } else {
                previous
                    .as_ref()
                    .and_then(|above| above.get(col))
                    .copied()
                    .unwrap_or(0)
                    + 1
            };
        }
        previous = Some(height_row.to_vec());
    }

    heights
}
