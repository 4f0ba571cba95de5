/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG export of committed claims
pub mod image;
/// Progress reporting for long runs
pub mod progress;
/// Renderer interface and animated GIF capture
pub mod visualization;
