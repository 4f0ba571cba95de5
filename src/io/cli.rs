//! Command-line interface for running a tower placement simulation

use crate::algorithm::executor::CoverageSimulation;
use crate::algorithm::rectangle::ScanStrategy;
use crate::io::configuration::{
    DEFAULT_CELL_SCALE, DEFAULT_GRID_LENGTH, DEFAULT_GRID_WIDTH, DEFAULT_SEED,
    DEFAULT_TOWER_COUNT, GIF_FRAME_DELAY_MS, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, io_error};
use crate::io::image::CoverageImage;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "towergrid")]
#[command(
    author,
    version,
    about = "Place random coverage towers and keep each tower's largest unclaimed rectangle"
)]
/// Command-line arguments for the coverage simulation
// Several independent switches are expected on a CLI surface
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file for the final coverage map
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid length in cells
    #[arg(short = 'l', long, default_value_t = DEFAULT_GRID_LENGTH)]
    pub length: usize,

    /// Number of towers to place
    #[arg(short, long, default_value_t = DEFAULT_TOWER_COUNT)]
    pub towers: usize,

    /// Random seed for reproducible placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pixels per grid cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_SCALE)]
    pub scale: u32,

    /// Also export an animated GIF of the placement process
    #[arg(short, long)]
    pub visualize: bool,

    /// Use the single-pass run scan instead of the exact rectangle search
    #[arg(long)]
    pub run_scan: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Rectangle search selected on the command line
    pub const fn strategy(&self) -> ScanStrategy {
        if self.run_scan {
            ScanStrategy::RunScan
        } else {
            ScanStrategy::Exact
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path of the animated visualization derived from the output path
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        match self.output.parent() {
            Some(parent) => parent.join(viz_name),
            None => PathBuf::from(viz_name),
        }
    }
}

/// Runs a simulation described by CLI arguments and writes its outputs
pub struct SimulationRunner {
    cli: Cli,
}

impl SimulationRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Place all towers, then export the coverage image and optional animation
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, a placement fails or an export fails
    pub fn run(&self) -> Result<()> {
        Self::validate_output(&self.cli.output)?;
        let start_time = Instant::now();

        let mut simulation = CoverageSimulation::seeded(
            self.cli.width,
            self.cli.length,
            self.cli.seed,
            self.cli.strategy(),
        )?;

        // Fail on a bad scale before spending time on the run
        let mut canvas = CoverageImage::new(self.cli.width, self.cli.length, self.cli.scale)?;

        if self.cli.visualize {
            simulation.enable_visualization(self.cli.scale, self.cli.towers);
        }

        tracing::info!(
            width = self.cli.width,
            length = self.cli.length,
            towers = self.cli.towers,
            seed = self.cli.seed,
            strategy = ?self.cli.strategy(),
            "starting simulation"
        );

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.towers)
        } else {
            ProgressManager::hidden(self.cli.towers)
        };

        let summary = simulation.run(self.cli.towers, |outcome| progress.record(outcome));
        progress.finish();
        let summary = summary?;

        simulation.replay(&mut canvas);
        canvas.save(&self.cli.output)?;

        if let Some(visualization) = &simulation.visualization {
            visualization.export_gif(&self.cli.visualization_path(), GIF_FRAME_DELAY_MS)?;
        }

        tracing::info!(
            covered = summary.covered_cells,
            ratio = summary.coverage_ratio,
            empty = summary.empty_placements,
            elapsed_secs = start_time.elapsed().as_secs_f64(),
            "run complete"
        );

        Ok(())
    }

    fn validate_output(output: &Path) -> Result<()> {
        if output.extension().and_then(|s| s.to_str()) == Some("png") {
            Ok(())
        } else {
            Err(io_error("Output file must have a .png extension"))
        }
    }
}
