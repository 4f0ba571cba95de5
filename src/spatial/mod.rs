//! Spatial data structures for the coverage grid
//!
//! This module contains spatial-related functionality including:
//! - Coverage grid storage and claim commits
//! - Footprint and claim rectangles

/// Coverage grid storage and the grid updater
pub mod grid;
/// Footprint and claim rectangle types
pub mod region;

pub use grid::CoverageGrid;
pub use region::{Claim, Footprint};
