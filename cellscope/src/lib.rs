//! CellScope - Blob extraction for Rust
//!
//! Partitions the foreground of a binary mask into connected blobs.
//!
//! # Overview
//!
//! - Value types for masks, coordinates and blobs
//! - Connected component labeling with 4- or 8-way connectivity
//! - Pixel sources that decode images and threshold them into masks
//!
//! # Example
//!
//! ```
//! use cellscope::io::{GrayBuffer, PixelSource, ThresholdOptions};
//! use cellscope::region::{ConnectivityType, label};
//!
//! let pixels = vec![
//!     255, 255, 0,
//!     0,   0,   0,
//!     0,   0,   255,
//! ];
//! let mask = GrayBuffer::new(3, 3, pixels)
//!     .unwrap()
//!     .to_mask(&ThresholdOptions::default())
//!     .unwrap();
//! let blobs = label(&mask, ConnectivityType::default()).unwrap();
//! assert_eq!(blobs.len(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use cellscope_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use cellscope_io as io;
pub use cellscope_region as region;
