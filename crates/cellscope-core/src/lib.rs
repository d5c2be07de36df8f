//! CellScope Core - Basic data structures for blob extraction
//!
//! This crate provides the value types shared by the rest of the
//! CellScope workspace:
//!
//! - [`PixelCoordinate`] - A `(row, col)` cell address
//! - [`BinaryMask`] - The foreground/background grid fed to the labeler
//! - [`Blob`] - One connected component as an ordered coordinate list
//! - [`LabelingResult`] - The ordered list of blobs from one labeling call
//!
//! # Example
//!
//! ```
//! use cellscope_core::{BinaryMask, PixelCoordinate};
//!
//! let mut mask = BinaryMask::new(3, 3);
//! mask.set(PixelCoordinate::new(0, 0), true).unwrap();
//! assert_eq!(mask.count_foreground(), 1);
//! ```

pub mod blob;
pub mod coord;
pub mod error;
pub mod mask;

pub use blob::{Blob, LabelingResult};
pub use coord::PixelCoordinate;
pub use error::{Error, Result};
pub use mask::{BinaryMask, check_extent};
