//! Pixel sources
//!
//! A [`PixelSource`] hands out a decoded 8-bit luma buffer and turns it into
//! a [`BinaryMask`] by applying a foreground predicate. The labeler never
//! calls back into a source; it only sees the resulting mask.

use crate::error::IoResult;
use crate::threshold::ThresholdOptions;
use cellscope_core::{BinaryMask, check_extent};
use log::debug;

/// Anything that can supply row-major 8-bit luma values.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Row-major luma values, one byte per pixel.
    fn luma(&self) -> &[u8];

    /// Build a mask marking every pixel for which `pred` holds.
    ///
    /// # Errors
    ///
    /// Returns [`cellscope_core::Error::DimensionMismatch`] (wrapped in
    /// [`IoError::Core`](crate::IoError::Core)) if the luma buffer does not
    /// match [`dimensions`](Self::dimensions).
    fn to_mask_with<F>(&self, mut pred: F) -> IoResult<BinaryMask>
    where
        F: FnMut(u8) -> bool,
        Self: Sized,
    {
        let (width, height) = self.dimensions();
        let luma = self.luma();
        check_extent(width, height, luma.len())?;
        let cells = luma.iter().map(|&v| pred(v)).collect();
        let mask = BinaryMask::from_vec(width, height, cells)?;
        debug!(
            "thresholded {}x{} source: {} foreground pixels",
            width,
            height,
            mask.count_foreground()
        );
        Ok(mask)
    }

    /// Build a mask with a fixed threshold.
    fn to_mask(&self, options: &ThresholdOptions) -> IoResult<BinaryMask>
    where
        Self: Sized,
    {
        self.to_mask_with(|v| options.is_foreground(v))
    }
}

/// A caller-owned 8-bit gray buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Wrap row-major gray values.
    ///
    /// # Errors
    ///
    /// Returns [`cellscope_core::Error::DimensionMismatch`] if
    /// `data.len() != width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> IoResult<Self> {
        check_extent(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Consume the buffer and return its gray values.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl PixelSource for GrayBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn luma(&self) -> &[u8] {
        &self.data
    }
}
