//! Cell access functions
//!
//! Checked and unchecked getters and setters for individual mask cells.
//! Checked variants return `None` or an error instead of clamping.

use super::BinaryMask;
use crate::coord::PixelCoordinate;
use crate::error::{Error, Result};

impl BinaryMask {
    /// Whether `coord` lies inside the mask.
    #[inline]
    pub fn contains(&self, coord: PixelCoordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Get the cell at `coord`.
    ///
    /// Returns `None` if `coord` is out of bounds.
    #[inline]
    pub fn get(&self, coord: PixelCoordinate) -> Option<bool> {
        if self.contains(coord) {
            Some(self.data[coord.index(self.width)])
        } else {
            None
        }
    }

    /// Whether `coord` is in bounds and foreground.
    #[inline]
    pub fn is_foreground(&self, coord: PixelCoordinate) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Get the cell at `coord` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the mask.
    #[inline]
    pub fn get_unchecked(&self, coord: PixelCoordinate) -> bool {
        self.data[coord.index(self.width)]
    }

    /// Set the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `coord` is outside the mask.
    pub fn set(&mut self, coord: PixelCoordinate, value: bool) -> Result<()> {
        if !self.contains(coord) {
            return Err(Error::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
                width: self.width,
                height: self.height,
            });
        }
        let index = coord.index(self.width);
        self.data[index] = value;
        Ok(())
    }

    /// Set the cell at `coord` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the mask.
    #[inline]
    pub fn set_unchecked(&mut self, coord: PixelCoordinate, value: bool) {
        let index = coord.index(self.width);
        self.data[index] = value;
    }

    /// Borrow row `row` as a slice.
    ///
    /// Returns `None` if `row >= height`.
    pub fn row(&self, row: u32) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        Some(&self.data[start..start + w])
    }
}
