//! Renderer interface and animated GIF capture of tower placements

use std::path::Path;

use image::{Frame, ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::generator::TowerColor;
use crate::io::configuration::{BACKGROUND_COLOR, FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{canvas_size, ensure_parent_dir, paint_rect};
use crate::spatial::{Claim, Footprint};

/// Receives drawing instructions as towers are placed
///
/// Each placement draws the whole footprint, removes it once the claim is
/// known and then draws the claim. Zero-area placements skip the last step.
pub trait CoverageRenderer {
    /// Show the full footprint requested by a tower
    fn draw_footprint(&mut self, tower: usize, footprint: &Footprint, color: TowerColor);

    /// Hide the footprint previously drawn for a tower
    fn remove_footprint(&mut self, tower: usize);

    /// Show the claim committed for a tower
    fn draw_claim(&mut self, tower: usize, claim: &Claim, color: TowerColor);
}

/// Single recorded drawing instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Footprint shown
    Footprint {
        /// Tower index
        tower: usize,
        /// Requested area
        footprint: Footprint,
        /// Tower color
        color: TowerColor,
    },
    /// Footprint hidden
    RemoveFootprint {
        /// Tower index
        tower: usize,
    },
    /// Claim committed
    Claim {
        /// Tower index
        tower: usize,
        /// Winning rectangle
        claim: Claim,
        /// Tower color
        color: TowerColor,
    },
}

/// Captures drawing instructions for visualization
///
/// Records events during the simulation so the placement process can be
/// replayed as an animation afterwards.
pub struct VisualizationCapture {
    events: Vec<RenderEvent>,
    width: usize,
    length: usize,
    scale: u32,
}

impl VisualizationCapture {
    /// Create an empty capture for a `width x length` grid
    pub fn new(width: usize, length: usize, scale: u32, expected_towers: usize) -> Self {
        Self {
            events: Vec::with_capacity(expected_towers * 3),
            width,
            length,
            scale,
        }
    }

    /// Returns all recorded events
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Returns the total number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Export the captured events as an animated GIF
    ///
    /// Delays shorter than viewers support are raised to `VIEWER_MIN_FRAME_DELAY_MS`.
    /// The final frame is held longer so the finished grid stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No events were captured
    /// - The canvas dimensions are invalid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "No placements captured for visualization".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(delay_ms)?;

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(
            path = %output_path.display(),
            events = self.events.len(),
            "exported placement animation"
        );
        Ok(())
    }

    /// Render one frame per footprint and one per claim
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are invalid
    pub fn generate_frames(&self, delay_ms: u32) -> Result<Vec<Frame>> {
        let (pixel_width, pixel_height) = canvas_size(self.width, self.length, self.scale)?;
        let blank: RgbaImage =
            ImageBuffer::from_pixel(pixel_width, pixel_height, Rgba(BACKGROUND_COLOR));

        // Committed claims accumulate; at most one footprint is shown on top
        let mut committed = blank.clone();
        let mut active: Option<(usize, Footprint, TowerColor)> = None;
        let mut frames = vec![frame(blank, delay_ms)];

        for event in &self.events {
            match event {
                RenderEvent::Footprint {
                    tower,
                    footprint,
                    color,
                } => {
                    active = Some((*tower, *footprint, *color));
                    let mut overlay = committed.clone();
                    paint_rect(
                        &mut overlay,
                        (footprint.x, footprint.y, footprint.width, footprint.height),
                        self.scale,
                        *color,
                    );
                    frames.push(frame(overlay, delay_ms));
                }
                RenderEvent::RemoveFootprint { tower } => {
                    if active.is_some_and(|(shown, _, _)| shown == *tower) {
                        active = None;
                    }
                }
                RenderEvent::Claim { claim, color, .. } => {
                    paint_rect(
                        &mut committed,
                        (claim.x, claim.y, claim.width, claim.height),
                        self.scale,
                        *color,
                    );
                    frames.push(frame(committed.clone(), delay_ms));
                }
            }
        }

        // A footprint left on screen is cleared before the hold frame
        if active.is_some() {
            frames.push(frame(committed.clone(), delay_ms));
        }
        frames.push(frame(committed, delay_ms.saturating_mul(FINAL_FRAME_HOLD)));

        Ok(frames)
    }
}

impl CoverageRenderer for VisualizationCapture {
    fn draw_footprint(&mut self, tower: usize, footprint: &Footprint, color: TowerColor) {
        self.events.push(RenderEvent::Footprint {
            tower,
            footprint: *footprint,
            color,
        });
    }

    fn remove_footprint(&mut self, tower: usize) {
        self.events.push(RenderEvent::RemoveFootprint { tower });
    }

    fn draw_claim(&mut self, tower: usize, claim: &Claim, color: TowerColor) {
        self.events.push(RenderEvent::Claim {
            tower,
            claim: *claim,
            color,
        });
    }
}

fn frame(image: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(image, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
