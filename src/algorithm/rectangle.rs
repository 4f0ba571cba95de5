//! Largest claimable rectangle search over column height histograms
//!
//! Every row of the height array is treated as a bar chart. The best span of
//! each row is found independently and the largest one over all rows wins.
//!
//! Two scans are available:
//! - [`ScanStrategy::Exact`] runs the classic monotonic-stack
//!   largest-rectangle-in-histogram pass and is guaranteed maximal.
//! - [`ScanStrategy::RunScan`] is a single stack-free sweep that measures each
//!   run from its first bar. The run termination rule depends on the
//!   [`RowKind`] of the row, and the result is always claimable but can miss a
//!   narrower, taller rectangle of larger area.

use std::borrow::Cow;

use ndarray::Array2;

use crate::spatial::Claim;

/// Best rectangle under a single histogram row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Leftmost column of the span
    pub x: usize,
    /// Number of columns in the span
    pub width: usize,
    /// Rectangle height (minimum bar over the span)
    pub height: usize,
}

impl Span {
    /// Area covered by the span
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    // Larger area wins, then leftmost, then widest
    const fn beats(&self, other: &Self) -> bool {
        if self.area() != other.area() {
            return self.area() > other.area();
        }
        if self.x != other.x {
            return self.x < other.x;
        }
        self.width > other.width
    }
}

/// Position of a row inside a vertical coverage run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// First row of a run: every non-zero bar is exactly 1
    Leading,
    /// Later row: at least one bar continues a run from above
    Continuation,
}

impl RowKind {
    /// Classify a histogram row by its bar heights
    pub fn classify(bars: &[u32]) -> Self {
        if bars.iter().all(|&bar| bar <= 1) {
            Self::Leading
        } else {
            Self::Continuation
        }
    }
}

/// Row scan used by the rectangle finder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Monotonic-stack scan, always maximal
    #[default]
    Exact,
    /// Single stack-free sweep with a row-kind dependent termination rule
    RunScan,
}

/// Largest span under one histogram row
///
/// Returns `None` for empty rows and rows where every bar is zero.
pub fn largest_in_row(bars: &[u32], strategy: ScanStrategy) -> Option<Span> {
    match strategy {
        ScanStrategy::Exact => exact_scan(bars),
        ScanStrategy::RunScan => run_scan(bars, RowKind::classify(bars)),
    }
}

/// Stack-based largest rectangle in histogram
pub fn exact_scan(bars: &[u32]) -> Option<Span> {
    let mut best = None;
    // (start column, height) with strictly increasing heights
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(bars.len() + 1);

    let sentinel = std::iter::once(0);
    for (i, height) in bars.iter().map(|&bar| bar as usize).chain(sentinel).enumerate() {
        let mut start = i;
        while let Some(&(top_start, top_height)) = stack.last() {
            if top_height < height {
                break;
            }
            stack.pop();
            if top_height > 0 {
                consider(
                    &mut best,
                    Span {
                        x: top_start,
                        width: i - top_start,
                        height: top_height,
                    },
                );
            }
            start = top_start;
        }
        stack.push((start, height));
    }

    best
}

/// Single left-to-right sweep without a stack
///
/// A run opens at the first non-zero bar. In a [`RowKind::Leading`] row the run
/// ends at a zero bar and its height is the lowest bar seen. In a
/// [`RowKind::Continuation`] row the run keeps the height of its opening bar and
/// ends at the first lower bar. A terminating non-zero bar opens the next run.
pub fn run_scan(bars: &[u32], kind: RowKind) -> Option<Span> {
    let mut best = None;
    let mut run: Option<(usize, usize)> = None;

    for (i, bar) in bars.iter().map(|&bar| bar as usize).enumerate() {
        let Some((start, height)) = run else {
            run = (bar > 0).then_some((i, bar));
            continue;
        };

        let ends = match kind {
            RowKind::Leading => bar == 0,
            RowKind::Continuation => bar < height,
        };

        if ends {
            consider(
                &mut best,
                Span {
                    x: start,
                    width: i - start,
                    height,
                },
            );
            run = (bar > 0).then_some((i, bar));
        } else if kind == RowKind::Leading {
            run = Some((start, height.min(bar)));
        }
    }

    if let Some((start, height)) = run {
        consider(
            &mut best,
            Span {
                x: start,
                width: bars.len() - start,
                height,
            },
        );
    }

    best
}

/// Largest claimable rectangle across all rows of a height array
///
/// All-zero rows are skipped. A later row only replaces the current best with a
/// strictly larger area, so ties keep the topmost candidate. `None` means no
/// cell is claimable.
pub fn find_largest(heights: &Array2<u32>, strategy: ScanStrategy) -> Option<Claim> {
    let mut best: Option<Claim> = None;

    for (row_index, row) in heights.rows().into_iter().enumerate() {
        let bars: Cow<'_, [u32]> = row
            .as_slice()
            .map_or_else(|| Cow::Owned(row.to_vec()), Cow::Borrowed);

        if bars.iter().all(|&bar| bar == 0) {
            continue;
        }

        let Some(span) = largest_in_row(&bars, strategy) else {
            continue;
        };

        if best.is_none_or(|current| span.area() > current.area()) {
            best = Claim::from_bottom(span.x, row_index, span.width, span.height).or(best);
        }
    }

    best
}

fn consider(best: &mut Option<Span>, candidate: Span) {
    if best.is_none_or(|current| candidate.beats(&current)) {
        *best = Some(candidate);
    }
}
