//! cellscope-region - Connected component labeling for CellScope
//!
//! This crate partitions the foreground of a [`BinaryMask`] into blobs:
//!
//! - **Connected component analysis** - [`label`] scans the mask and
//!   returns every blob in raster discovery order
//! - **Seed fill** - [`blob_at`] extracts the single blob holding a point
//! - **Label maps** - [`label_map`] assigns a component number to every pixel
//!
//! All operations are synchronous, single-threaded and allocate their
//! scratch space per call, so independent masks can be labeled from
//! different threads without coordination.
//!
//! # Examples
//!
//! ## Finding connected components
//!
//! ```
//! use cellscope_region::{ConnectivityType, label};
//! use cellscope_core::{BinaryMask, PixelCoordinate};
//!
//! let mut mask = BinaryMask::new(10, 10);
//! mask.set(PixelCoordinate::new(1, 1), true).unwrap();
//! mask.set(PixelCoordinate::new(2, 2), true).unwrap();
//! mask.set(PixelCoordinate::new(7, 7), true).unwrap();
//!
//! let four = label(&mask, ConnectivityType::FourWay).unwrap();
//! assert_eq!(four.len(), 3);
//!
//! let eight = label(&mask, ConnectivityType::EightWay).unwrap();
//! assert_eq!(eight.len(), 2);
//! ```
//!
//! ## Label map
//!
//! ```
//! use cellscope_region::{ConnectivityType, label_map};
//! use cellscope_core::{BinaryMask, PixelCoordinate};
//!
//! let mask = BinaryMask::from_fn(4, 1, |c| c.col != 2);
//! let map = label_map(&mask, ConnectivityType::EightWay).unwrap();
//! assert_eq!(map.count(), 2);
//! assert_eq!(map.get(PixelCoordinate::new(0, 3)), Some(2));
//! ```
//!
//! [`BinaryMask`]: cellscope_core::BinaryMask

pub mod conncomp;
pub mod error;
pub mod label;
pub mod seedfill;

// Re-export core types
pub use cellscope_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{ConnectivityType, LabelOptions, label, label_slice, label_with};

// Re-export label types and functions
pub use label::{LabelMap, count_blobs, label_map};

// Re-export seedfill functions
pub use seedfill::blob_at;
