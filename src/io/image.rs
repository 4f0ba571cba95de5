//! PNG export of committed tower claims

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::generator::TowerColor;
use crate::io::configuration::{BACKGROUND_COLOR, MAX_CANVAS_PIXELS, MAX_CELL_SCALE};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::visualization::CoverageRenderer;
use crate::spatial::{Claim, Footprint};

/// Static renderer that paints every committed claim in its tower color
///
/// Footprints are transient and never appear in the exported image.
pub struct CoverageImage {
    image: RgbaImage,
    scale: u32,
    claims_drawn: usize,
}

impl CoverageImage {
    /// Create a blank canvas for a `width x length` grid at `scale` pixels per cell
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is zero or too large, or the image would not fit in `u32`
    /// or exceed `MAX_CANVAS_PIXELS`
    pub fn new(width: usize, length: usize, scale: u32) -> Result<Self> {
        let (pixel_width, pixel_height) = canvas_size(width, length, scale)?;
        Ok(Self {
            image: ImageBuffer::from_pixel(pixel_width, pixel_height, Rgba(BACKGROUND_COLOR)),
            scale,
            claims_drawn: 0,
        })
    }

    /// Number of claims painted so far
    pub const fn claims_drawn(&self) -> usize {
        self.claims_drawn
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Save the canvas as a PNG file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No claims have been drawn
    /// - The parent directory cannot be created
    /// - The image cannot be saved to the specified path
    pub fn save(&self, output_path: &Path) -> Result<()> {
        if self.claims_drawn == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "No claims have been committed to the grid".to_string(),
            });
        }

        ensure_parent_dir(output_path)?;

        self.image
            .save(output_path)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(path = %output_path.display(), "exported coverage image");
        Ok(())
    }
}

impl CoverageRenderer for CoverageImage {
    fn draw_footprint(&mut self, _tower: usize, _footprint: &Footprint, _color: TowerColor) {}

    fn remove_footprint(&mut self, _tower: usize) {}

    fn draw_claim(&mut self, _tower: usize, claim: &Claim, color: TowerColor) {
        paint_rect(
            &mut self.image,
            (claim.x, claim.y, claim.width, claim.height),
            self.scale,
            color,
        );
        self.claims_drawn += 1;
    }
}

/// Pixel dimensions of a grid canvas
pub(crate) fn canvas_size(width: usize, length: usize, scale: u32) -> Result<(u32, u32)> {
    if scale == 0 || scale > MAX_CELL_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_CELL_SCALE}"),
        ));
    }

    let to_pixels = |cells: usize, parameter: &'static str| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .filter(|&pixels| pixels > 0)
            .ok_or_else(|| invalid_parameter(parameter, &cells, &"does not fit an image"))
    };

    let pixel_width = to_pixels(width, "width")?;
    let pixel_height = to_pixels(length, "length")?;

    let pixels = u64::from(pixel_width) * u64::from(pixel_height);
    if pixels > MAX_CANVAS_PIXELS {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!(
                "canvas of {pixel_width}x{pixel_height} pixels exceeds {MAX_CANVAS_PIXELS} pixels"
            ),
        ));
    }

    Ok((pixel_width, pixel_height))
}

/// Blend `color` over every pixel of a cell rectangle (x, y, width, height)
///
/// Pixels outside the image are ignored.
pub(crate) fn paint_rect(
    image: &mut RgbaImage,
    rect: (usize, usize, usize, usize),
    scale: u32,
    color: TowerColor,
) {
    let (x, y, width, height) = rect;
    let scale = scale as usize;
    for py in y * scale..(y + height) * scale {
        for px in x * scale..(x + width) * scale {
            let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                continue;
            };
            if let Some(pixel) = image.get_pixel_mut_checked(px, py) {
                *pixel = Rgba(color.blend_over(pixel.0));
            }
        }
    }
}

pub(crate) fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}
