/// Tower placement simulation and orchestration
pub mod executor;
/// Footprint and color sources for new towers
pub mod generator;
/// Column run heights over a claimable mask
pub mod histogram;
/// Subtraction of existing coverage from a footprint
pub mod overlap;
/// Largest claimable rectangle search
pub mod rectangle;
