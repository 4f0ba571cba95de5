//! Tower placement simulation
//!
//! Each step pulls a footprint from the source, subtracts existing coverage,
//! builds column heights, finds the largest claimable rectangle and commits it
//! to the grid. Steps run strictly one after another.

use crate::algorithm::generator::{FootprintSource, RandomTowers, TowerColor};
use crate::algorithm::histogram::column_heights;
use crate::algorithm::overlap::claimable_for;
use crate::algorithm::rectangle::{ScanStrategy, find_largest};
use crate::io::error::{Result, WithContext};
use crate::io::visualization::{CoverageRenderer, VisualizationCapture};
use crate::spatial::{Claim, CoverageGrid, Footprint};

/// Result of placing a single tower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Zero-based tower index
    pub tower: usize,
    /// Requested footprint
    pub footprint: Footprint,
    /// Display color
    pub color: TowerColor,
    /// Winning rectangle, `None` when the footprint was already fully covered
    pub claim: Option<Claim>,
    /// Cells newly covered by the claim
    pub newly_covered: usize,
}

impl PlacementOutcome {
    /// Area of the claim, zero when nothing was claimable
    pub fn claimed_area(&self) -> usize {
        self.claim.map_or(0, |claim| claim.area())
    }

    /// Replay this placement into a renderer
    pub fn render(&self, renderer: &mut dyn CoverageRenderer) {
        renderer.draw_footprint(self.tower, &self.footprint, self.color);
        renderer.remove_footprint(self.tower);
        if let Some(claim) = &self.claim {
            renderer.draw_claim(self.tower, claim, self.color);
        }
    }
}

/// Aggregate figures for a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSummary {
    /// Towers placed
    pub towers: usize,
    /// Towers whose footprint had nothing left to claim
    pub empty_placements: usize,
    /// Covered cells after the run
    pub covered_cells: usize,
    /// Covered fraction of the grid after the run
    pub coverage_ratio: f64,
}

/// Sequential tower placement over a coverage grid
pub struct CoverageSimulation {
    /// Current coverage
    pub grid: CoverageGrid,
    /// Row scan used by the rectangle finder
    pub strategy: ScanStrategy,
    /// Every placement so far, in order
    pub history: Vec<PlacementOutcome>,
    /// Optional visualization capture
    pub visualization: Option<VisualizationCapture>,
    source: Box<dyn FootprintSource>,
}

impl CoverageSimulation {
    /// Create a simulation over an empty `width x length` grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn new(
        width: usize,
        length: usize,
        source: Box<dyn FootprintSource>,
        strategy: ScanStrategy,
    ) -> Result<Self> {
        Ok(Self::from_grid(
            CoverageGrid::new(width, length)?,
            source,
            strategy,
        ))
    }

    /// Create a simulation with random towers drawn from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn seeded(width: usize, length: usize, seed: u64, strategy: ScanStrategy) -> Result<Self> {
        Self::new(width, length, Box::new(RandomTowers::new(seed)), strategy)
    }

    /// Continue from an existing grid
    pub fn from_grid(
        grid: CoverageGrid,
        source: Box<dyn FootprintSource>,
        strategy: ScanStrategy,
    ) -> Self {
        Self {
            grid,
            strategy,
            history: Vec::new(),
            visualization: None,
            source,
        }
    }

    /// Record drawing events for a later GIF export
    pub fn enable_visualization(&mut self, scale: u32, expected_towers: usize) {
        self.visualization = Some(VisualizationCapture::new(
            self.grid.width(),
            self.grid.length(),
            scale,
            expected_towers,
        ));
    }

    /// Number of towers placed so far
    pub const fn towers_placed(&self) -> usize {
        self.history.len()
    }

    /// Place the next tower from the footprint source
    ///
    /// # Errors
    ///
    /// Returns `FootprintOutOfBounds` if the source produces a footprint outside the grid
    pub fn place_next(&mut self) -> Result<PlacementOutcome> {
        let footprint = self
            .source
            .next_footprint(self.grid.width(), self.grid.length());
        let color = self.source.next_color();
        self.place_footprint(footprint, color)
    }

    /// Place a tower with a fixed footprint
    ///
    /// # Errors
    ///
    /// Returns `FootprintOutOfBounds` if the footprint does not fit the grid;
    /// the grid is left untouched in that case
    pub fn place_footprint(
        &mut self,
        footprint: Footprint,
        color: TowerColor,
    ) -> Result<PlacementOutcome> {
        let tower = self.history.len();

        let mask = claimable_for(&self.grid, &footprint).with_tower(tower)?;
        let heights = column_heights(&mask);
        let claim = find_largest(&heights, self.strategy);
        let newly_covered = self
            .grid
            .commit_optional(claim.as_ref())
            .with_tower(tower)?;

        match &claim {
            Some(claim) => tracing::debug!(
                tower,
                color = %color.to_hex(),
                x = claim.x,
                y = claim.y,
                width = claim.width,
                height = claim.height,
                "tower claimed rectangle"
            ),
            None => tracing::warn!(
                tower,
                x = footprint.x,
                y = footprint.y,
                width = footprint.width,
                height = footprint.height,
                "footprint already fully covered"
            ),
        }

        let outcome = PlacementOutcome {
            tower,
            footprint,
            color,
            claim,
            newly_covered,
        };

        if let Some(visualization) = self.visualization.as_mut() {
            outcome.render(visualization);
        }
        self.history.push(outcome.clone());

        Ok(outcome)
    }

    /// Place `towers` towers, reporting each outcome to `on_step`
    ///
    /// # Errors
    ///
    /// Stops at and returns the first placement error
    pub fn run(
        &mut self,
        towers: usize,
        mut on_step: impl FnMut(&PlacementOutcome),
    ) -> Result<SimulationSummary> {
        for _ in 0..towers {
            let outcome = self.place_next()?;
            on_step(&outcome);
        }

        let summary = self.summary();
        tracing::info!(
            towers = summary.towers,
            empty = summary.empty_placements,
            covered = summary.covered_cells,
            ratio = summary.coverage_ratio,
            "simulation finished"
        );
        Ok(summary)
    }

    /// Figures for everything placed so far
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            towers: self.history.len(),
            empty_placements: self
                .history
                .iter()
                .filter(|outcome| outcome.claim.is_none())
                .count(),
            covered_cells: self.grid.covered_cells(),
            coverage_ratio: self.grid.coverage_ratio(),
        }
    }

    /// Replay the whole history into a renderer
    pub fn replay(&self, renderer: &mut dyn CoverageRenderer) {
        for outcome in &self.history {
            outcome.render(renderer);
        }
    }
}
