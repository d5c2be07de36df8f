//! Error types for cellscope-io

use thiserror::Error;

/// Errors that can occur while turning pixels into a mask
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cellscope_core::Error),

    /// Image decode error
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pixel source operations
pub type IoResult<T> = Result<T, IoError>;
