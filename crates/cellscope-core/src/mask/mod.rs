//! BinaryMask - The foreground/background grid
//!
//! A [`BinaryMask`] is a rectangular grid of booleans where `true` marks a
//! foreground cell. It is the only input the component labeler reads.
//!
//! # Storage layout
//!
//! - Cells are stored row-major in a single `Vec<bool>`
//! - Cell `(row, col)` lives at index `row * width + col`
//! - Zero-sized masks (`width == 0` or `height == 0`) are valid and empty
//!
//! # Invariant
//!
//! `data.len() == width * height` holds for every `BinaryMask`. The
//! constructors check it and return [`Error::DimensionMismatch`] otherwise,
//! so accessors never need to clamp.

mod access;

use crate::coord::PixelCoordinate;
use crate::error::{Error, Result};

/// Rectangular binary mask.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-background mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![false; cell_count(width, height)],
        }
    }

    /// Create a mask with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: bool) -> Self {
        Self {
            width,
            height,
            data: vec![value; cell_count(width, height)],
        }
    }

    /// Create a mask from row-major cell data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<bool>) -> Result<Self> {
        check_extent(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a mask from a slice of rows.
    ///
    /// An empty slice gives a 0x0 mask. Every row must have the length of
    /// the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if any row differs in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            data.extend_from_slice(cells);
        }
        // A 0-width mask still has `height` rows.
        Self::from_vec(width as u32, height as u32, data)
    }

    /// Create a mask by evaluating `pred` at every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut pred: F) -> Self
    where
        F: FnMut(PixelCoordinate) -> bool,
    {
        let mut data = Vec::with_capacity(cell_count(width, height));
        for row in 0..height {
            for col in 0..width {
                data.push(pred(PixelCoordinate::new(row, col)));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the mask has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major cell data.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Consume the mask and return its row-major cell data.
    pub fn into_vec(self) -> Vec<bool> {
        self.data
    }

    /// Number of foreground cells.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Iterate over foreground coordinates in raster order.
    pub fn foreground(&self) -> impl Iterator<Item = PixelCoordinate> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| PixelCoordinate::from_index(i, width))
    }

    /// Return the complement of this mask.
    pub fn inverted(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|v| !v).collect(),
        }
    }
}

/// Verify that a storage extent matches declared dimensions.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `len != width * height`.
pub fn check_extent(width: u32, height: u32, len: usize) -> Result<()> {
    let expected = cell_count(width, height);
    if len != expected {
        return Err(Error::DimensionMismatch {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[inline]
fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background() {
        let mask = BinaryMask::new(4, 3);
        assert_eq!(mask.dimensions(), (4, 3));
        assert_eq!(mask.as_slice().len(), 12);
        assert_eq!(mask.count_foreground(), 0);
    }

    #[test]
    fn test_zero_sized() {
        assert!(BinaryMask::new(0, 5).is_empty());
        assert!(BinaryMask::new(5, 0).is_empty());
        assert!(BinaryMask::default().is_empty());
    }

    #[test]
    fn test_from_vec_mismatch() {
        let err = BinaryMask::from_vec(3, 3, vec![false; 8]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                width: 3,
                height: 3,
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn test_from_rows() {
        let mask = BinaryMask::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(mask.dimensions(), (2, 2));
        assert_eq!(mask.as_slice(), &[true, false, false, true]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: Vec<Vec<bool>> = vec![vec![true, true], vec![true]];
        let err = BinaryMask::from_rows(&rows).unwrap_err();
        assert!(matches!(err, Error::RaggedRows { row: 1, .. }));
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<bool>> = Vec::new();
        let mask = BinaryMask::from_rows(&rows).unwrap();
        assert_eq!(mask.dimensions(), (0, 0));
    }

    #[test]
    fn test_foreground_raster_order() {
        let mask = BinaryMask::from_fn(3, 2, |c| c.col != 1);
        let fg: Vec<_> = mask.foreground().collect();
        assert_eq!(
            fg,
            vec![
                PixelCoordinate::new(0, 0),
                PixelCoordinate::new(0, 2),
                PixelCoordinate::new(1, 0),
                PixelCoordinate::new(1, 2),
            ]
        );
        assert_eq!(mask.inverted().count_foreground(), 2);
    }
}
