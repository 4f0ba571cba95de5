//! Simulation constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 100;
/// Default grid length in cells
pub const DEFAULT_GRID_LENGTH: usize = 100;
/// Default number of towers to place
pub const DEFAULT_TOWER_COUNT: usize = 50;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Rendering settings
/// Pixels per grid cell in exported images
pub const DEFAULT_CELL_SCALE: u32 = 8;
/// Upper bound on the cell scale to keep exported images reasonable
pub const MAX_CELL_SCALE: u32 = 64;
/// Opacity applied to tower colors (patches are drawn half transparent)
pub const TOWER_ALPHA: u8 = 128;
/// Largest exported canvas in pixels (width times height)
pub const MAX_CANVAS_PIXELS: u64 = 64_000_000;
/// Background color for uncovered cells
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Output settings
/// Suffix used for the animated visualization next to the PNG output
pub const VISUALIZATION_SUFFIX: &str = "_placement";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the delay of the final frame
pub const FINAL_FRAME_HOLD: u32 = 8;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "towergrid=info";
