//! Terminal progress reporting for tower placement runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::algorithm::executor::PlacementOutcome;
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Towers: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the towers of a run
///
/// Shows the running count of empty placements next to the bar.
pub struct ProgressManager {
    bar: ProgressBar,
    empty_placements: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ProgressManager {
    /// Create a visible progress bar for `towers` placements
    pub fn new(towers: usize) -> Self {
        let bar = ProgressBar::new(towers as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self {
            bar,
            empty_placements: 0,
        }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(towers: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(towers as u64);
        Self {
            bar,
            empty_placements: 0,
        }
    }

    /// Record one finished placement
    pub fn record(&mut self, outcome: &PlacementOutcome) {
        if outcome.claim.is_none() {
            self.empty_placements += 1;
            self.bar
                .set_message(format!("({} fully covered)", self.empty_placements));
        }
        self.bar.inc(1);
    }

    /// Placements recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Placements that claimed nothing
    pub const fn empty_placements(&self) -> usize {
        self.empty_placements
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
