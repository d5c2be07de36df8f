//! Decoded-image pixel source
//!
//! [`ImageSource`] decodes any format the `image` crate understands and
//! keeps it as 8-bit luma. Color inputs are converted with the `image`
//! crate's luma weights; alpha is dropped.

use crate::error::IoResult;
use crate::source::PixelSource;
use image::{DynamicImage, GrayImage};
use log::debug;
use std::fs;
use std::path::Path;

/// An 8-bit luma image ready to be thresholded.
#[derive(Debug, Clone)]
pub struct ImageSource {
    image: GrayImage,
}

impl ImageSource {
    /// Decode an image file.
    ///
    /// The format is guessed from the file contents. A file that cannot be
    /// read is reported as [`IoError::Io`](crate::IoError::Io), one that
    /// cannot be decoded as [`IoError::Decode`](crate::IoError::Decode).
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let image = image::load_from_memory(&bytes)?;
        debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Self::from_dynamic(&image))
    }

    /// Decode an in-memory encoded image.
    pub fn from_bytes(bytes: &[u8]) -> IoResult<Self> {
        let image = image::load_from_memory(bytes)?;
        debug!(
            "decoded {} bytes ({}x{}, {:?})",
            bytes.len(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Self::from_dynamic(&image))
    }

    /// Convert an already decoded image.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self {
            image: image.to_luma8(),
        }
    }

    /// Borrow the luma image.
    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Consume the source and return the luma image.
    pub fn into_gray(self) -> GrayImage {
        self.image
    }
}

impl From<GrayImage> for ImageSource {
    fn from(image: GrayImage) -> Self {
        Self { image }
    }
}

impl PixelSource for ImageSource {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn luma(&self) -> &[u8] {
        self.image.as_raw()
    }
}
