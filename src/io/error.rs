//! Error types and context management for coverage placement

use std::fmt;
use std::path::PathBuf;

/// Main error type for all placement and export operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Input data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the input data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A footprint or claim reaches past the grid extents
    FootprintOutOfBounds {
        /// Tower being placed when the violation was detected
        tower: Option<usize>,
        /// Offending rectangle as (x, y, width, height)
        rect: (usize, usize, usize, usize),
        /// Grid dimensions (width, length)
        grid: (usize, usize),
    },

    /// Two arrays that must share a shape do not
    ShapeMismatch {
        /// Operation that compared the shapes
        operation: &'static str,
        /// Expected shape (rows, cols)
        expected: (usize, usize),
        /// Actual shape (rows, cols)
        actual: (usize, usize),
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FootprintOutOfBounds { tower, rect, grid } => {
                let (x, y, width, height) = *rect;
                if let Some(tower) = tower {
                    write!(f, "Tower {tower}: ")?;
                }
                write!(
                    f,
                    "rectangle at ({x}, {y}) of size {width}x{height} exceeds grid {}x{}",
                    grid.0, grid.1
                )
            }
            Self::ShapeMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Tower index being placed
    pub tower: Option<usize>,
}

/// Enriches error messages with simulation state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the tower index
    ///
    /// # Errors
    ///
    /// Propagates the original error with the tower context applied
    fn with_tower(self, tower: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only bounds violations carry a tower slot
            if let AlgorithmError::FootprintOutOfBounds { tower, .. } = &mut error
                && context.tower.is_some()
            {
                *tower = context.tower;
            }
            error
        })
    }

    fn with_tower(self, tower: usize) -> Result<T> {
        self.with_context(ErrorContext { tower: Some(tower) })
    }
}

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a bounds error for a rectangle that leaves the grid
pub const fn out_of_bounds(
    rect: (usize, usize, usize, usize),
    grid: (usize, usize),
) -> AlgorithmError {
    AlgorithmError::FootprintOutOfBounds {
        tower: None,
        rect,
        grid,
    }
}

/// Create a path error for output locations that cannot be used
pub fn io_error(msg: &str) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
