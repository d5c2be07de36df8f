//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test mask
    #[error("failed to load mask '{path}': {message}")]
    MaskLoad { path: String, message: String },

    /// Malformed ASCII mask fixture
    #[error("bad mask fixture at row {row}: {message}")]
    BadFixture { row: usize, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
