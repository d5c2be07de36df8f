//! Pixel coordinates
//!
//! A [`PixelCoordinate`] addresses one cell of a mask as `(row, col)`.
//! Rows grow downward and columns grow rightward, both 0-indexed.
//!
//! The derived ordering compares `row` first, then `col`, which is exactly
//! raster (row-major) order. Sorting a set of coordinates therefore yields
//! the order a top-to-bottom, left-to-right scan would visit them.

use std::fmt;

/// A `(row, col)` position in a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PixelCoordinate {
    /// Row index (y), increasing downward
    pub row: u32,
    /// Column index (x), increasing rightward
    pub col: u32,
}

impl PixelCoordinate {
    /// Create a coordinate from a row and a column.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by `(d_row, d_col)`.
    ///
    /// Returns `None` if the result would fall outside a `width` x `height`
    /// grid, including when it would go negative.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32, width: u32, height: u32) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < height && col < width).then_some(Self { row, col })
    }

    /// Linear index of this coordinate in a row-major grid of the given width.
    #[inline]
    pub fn index(self, width: u32) -> usize {
        self.row as usize * width as usize + self.col as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        let width = width as usize;
        Self {
            row: (index / width) as u32,
            col: (index % width) as u32,
        }
    }
}

impl From<(u32, u32)> for PixelCoordinate {
    /// Interprets the tuple as `(row, col)`.
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<PixelCoordinate> for (u32, u32) {
    fn from(c: PixelCoordinate) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for PixelCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_ordering() {
        let mut coords = vec![
            PixelCoordinate::new(1, 0),
            PixelCoordinate::new(0, 2),
            PixelCoordinate::new(0, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                PixelCoordinate::new(0, 1),
                PixelCoordinate::new(0, 2),
                PixelCoordinate::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_offset_bounds() {
        let c = PixelCoordinate::new(0, 0);
        assert_eq!(c.offset(-1, 0, 3, 3), None);
        assert_eq!(c.offset(0, -1, 3, 3), None);
        assert_eq!(c.offset(1, 1, 3, 3), Some(PixelCoordinate::new(1, 1)));
        assert_eq!(PixelCoordinate::new(2, 2).offset(1, 0, 3, 3), None);
        assert_eq!(PixelCoordinate::new(2, 2).offset(0, 1, 3, 3), None);
    }

    #[test]
    fn test_index_roundtrip() {
        let c = PixelCoordinate::new(3, 4);
        assert_eq!(c.index(7), 25);
        assert_eq!(PixelCoordinate::from_index(25, 7), c);
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelCoordinate::new(2, 5).to_string(), "(2, 5)");
    }
}
