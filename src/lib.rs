//! Tower coverage placement on a 2D grid
//!
//! Towers request random rectangular footprints. For each new tower the part of
//! its footprint already covered by earlier towers is removed, and the largest
//! remaining axis-aligned rectangle is found with a column-height histogram
//! scan and committed to the coverage grid.

#![forbid(unsafe_code)]

/// Core placement algorithm: overlap, histograms, rectangle search and orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Coverage grid and rectangle types
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
