//! Error types for cellscope-region

use thiserror::Error;

/// Errors that can occur during labeling operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Any other core library error.
    ///
    /// No labeling operation produces one today: the only core error they
    /// can hit is `DimensionMismatch`, which is lifted into
    /// [`RegionError::DimensionMismatch`]. Kept so new core failures
    /// propagate through `?` without widening this enum.
    #[error("core error: {0}")]
    Core(cellscope_core::Error),

    /// Mask storage does not match its declared dimensions
    #[error(
        "dimension mismatch: declared {width}x{height} ({expected} cells), storage holds {actual}"
    )]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Seed coordinate outside the mask
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: u32, col: u32 },
}

impl From<cellscope_core::Error> for RegionError {
    fn from(e: cellscope_core::Error) -> Self {
        match e {
            cellscope_core::Error::DimensionMismatch {
                width,
                height,
                expected,
                actual,
            } => RegionError::DimensionMismatch {
                width,
                height,
                expected,
                actual,
            },
            other => RegionError::Core(other),
        }
    }
}

/// Result type for labeling operations
pub type RegionResult<T> = Result<T, RegionError>;
