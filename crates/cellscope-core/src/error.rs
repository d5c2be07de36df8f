//! Error types for cellscope-core
//!
//! Provides a unified error type for the core data structures.
//! Masks and blobs are plain values, so the only things that can go wrong
//! are constructing them from inconsistent parts or writing outside them.

use thiserror::Error;

/// CellScope core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backing storage does not match the declared mask dimensions
    #[error("dimension mismatch: declared {width}x{height} ({expected} cells), storage holds {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Rows of unequal length supplied for a rectangular mask
    #[error("ragged rows: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Coordinate outside the mask
    #[error("coordinate ({row}, {col}) out of bounds for {width}x{height} mask")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// A blob must hold at least one coordinate
    #[error("empty blob")]
    EmptyBlob,
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
