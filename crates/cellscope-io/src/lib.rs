//! cellscope-io - Pixel sources for CellScope
//!
//! Turns decoded pixels into the [`BinaryMask`] the labeler consumes:
//!
//! - [`PixelSource`] - trait for anything exposing 8-bit luma pixels
//! - [`ImageSource`] - files or byte buffers decoded with the `image` crate
//! - [`GrayBuffer`] - caller-owned gray buffers
//! - [`ThresholdOptions`] - the foreground predicate
//!
//! # Example
//!
//! ```
//! use cellscope_io::{GrayBuffer, PixelSource, ThresholdOptions};
//!
//! let buffer = GrayBuffer::new(2, 2, vec![0, 255, 255, 0]).unwrap();
//! let mask = buffer.to_mask(&ThresholdOptions::default()).unwrap();
//! assert_eq!(mask.count_foreground(), 2);
//! ```
//!
//! [`BinaryMask`]: cellscope_core::BinaryMask

pub mod error;
pub mod image_source;
pub mod source;
pub mod threshold;

pub use error::{IoError, IoResult};
pub use image_source::ImageSource;
pub use source::{GrayBuffer, PixelSource};
pub use threshold::{Polarity, ThresholdOptions};

use cellscope_core::BinaryMask;
use std::path::Path;

/// Decode an image file and threshold it into a mask.
pub fn read_mask<P: AsRef<Path>>(path: P, options: &ThresholdOptions) -> IoResult<BinaryMask> {
    ImageSource::from_path(path)?.to_mask(options)
}
