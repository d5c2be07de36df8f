//! Blob, LabelingResult - Connected foreground regions
//!
//! A [`Blob`] is an ordered, non-empty list of coordinates belonging to one
//! connected component. A [`LabelingResult`] is the ordered list of blobs
//! produced by one labeling call.
//!
//! Both are plain values: they own their coordinates, hold no reference to
//! the mask they came from and can outlive it.
//!
//! # Ordering
//!
//! The first coordinate of a blob is its *seed*, the first cell of the
//! component met by a raster scan. Blobs in a [`LabelingResult`] are ordered
//! by seed, so the seeds of consecutive blobs are strictly increasing in
//! raster order.

use crate::coord::PixelCoordinate;
use crate::error::{Error, Result};

/// One connected component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Blob {
    coords: Vec<PixelCoordinate>,
}

impl Blob {
    /// Create a blob from a list of coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBlob`] if `coords` is empty.
    pub fn new(coords: Vec<PixelCoordinate>) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::EmptyBlob);
        }
        Ok(Self { coords })
    }

    /// Start a blob at `seed`.
    pub fn from_seed(seed: PixelCoordinate) -> Self {
        Self { coords: vec![seed] }
    }

    /// Append a coordinate.
    #[inline]
    pub fn push(&mut self, coord: PixelCoordinate) {
        self.coords.push(coord);
    }

    /// Number of coordinates. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The seed coordinate.
    #[inline]
    pub fn seed(&self) -> PixelCoordinate {
        self.coords[0]
    }

    /// Get a coordinate by position.
    pub fn get(&self, index: usize) -> Option<PixelCoordinate> {
        self.coords.get(index).copied()
    }

    /// Whether the blob holds `coord`. Linear in the blob size.
    pub fn contains(&self, coord: PixelCoordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// Coordinates in blob order.
    #[inline]
    pub fn coords(&self) -> &[PixelCoordinate] {
        &self.coords
    }

    /// Iterate over coordinates in blob order.
    pub fn iter(&self) -> std::slice::Iter<'_, PixelCoordinate> {
        self.coords.iter()
    }

    /// Consume the blob and return its coordinates.
    pub fn into_vec(self) -> Vec<PixelCoordinate> {
        self.coords
    }
}

impl<'a> IntoIterator for &'a Blob {
    type Item = &'a PixelCoordinate;
    type IntoIter = std::slice::Iter<'a, PixelCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl IntoIterator for Blob {
    type Item = PixelCoordinate;
    type IntoIter = std::vec::IntoIter<PixelCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

/// The ordered list of blobs found in one mask.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelingResult {
    blobs: Vec<Blob>,
}

impl LabelingResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self { blobs: Vec::new() }
    }

    /// Wrap an already ordered list of blobs.
    pub fn from_blobs(blobs: Vec<Blob>) -> Self {
        Self { blobs }
    }

    /// Append a completed blob.
    pub fn push(&mut self, blob: Blob) {
        self.blobs.push(blob);
    }

    /// Number of blobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether no blobs were found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Get a blob by position.
    pub fn get(&self, index: usize) -> Option<&Blob> {
        self.blobs.get(index)
    }

    /// Blobs in discovery order.
    #[inline]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Iterate over blobs in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Blob> {
        self.blobs.iter()
    }

    /// Total number of coordinates across all blobs.
    pub fn total_pixels(&self) -> usize {
        self.blobs.iter().map(Blob::len).sum()
    }

    /// Index of the blob holding `coord`, if any. Linear in the total size.
    pub fn find(&self, coord: PixelCoordinate) -> Option<usize> {
        self.blobs.iter().position(|b| b.contains(coord))
    }

    /// Consume the result and return its blobs.
    pub fn into_blobs(self) -> Vec<Blob> {
        self.blobs
    }
}

impl<'a> IntoIterator for &'a LabelingResult {
    type Item = &'a Blob;
    type IntoIter = std::slice::Iter<'a, Blob>;

    fn into_iter(self) -> Self::IntoIter {
        self.blobs.iter()
    }
}

impl IntoIterator for LabelingResult {
    type Item = Blob;
    type IntoIter = std::vec::IntoIter<Blob>;

    fn into_iter(self) -> Self::IntoIter {
        self.blobs.into_iter()
    }
}

impl FromIterator<Blob> for LabelingResult {
    fn from_iter<I: IntoIterator<Item = Blob>>(iter: I) -> Self {
        Self {
            blobs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(row: u32, col: u32) -> PixelCoordinate {
        PixelCoordinate::new(row, col)
    }

    #[test]
    fn test_blob_new_rejects_empty() {
        assert_eq!(Blob::new(Vec::new()), Err(Error::EmptyBlob));
    }

    #[test]
    fn test_blob_seed_and_push() {
        let mut blob = Blob::from_seed(pc(0, 0));
        blob.push(pc(0, 1));
        assert_eq!(blob.len(), 2);
        assert!(!blob.is_empty());
        assert_eq!(blob.seed(), pc(0, 0));
        assert!(blob.contains(pc(0, 1)));
        assert!(!blob.contains(pc(1, 1)));
        assert_eq!(blob.into_vec(), vec![pc(0, 0), pc(0, 1)]);
    }

    #[test]
    fn test_result_queries() {
        let result: LabelingResult = vec![
            Blob::new(vec![pc(0, 0), pc(0, 1)]).unwrap(),
            Blob::from_seed(pc(2, 2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.len(), 2);
        assert_eq!(result.total_pixels(), 3);
        assert_eq!(result.find(pc(0, 1)), Some(0));
        assert_eq!(result.find(pc(2, 2)), Some(1));
        assert_eq!(result.find(pc(1, 1)), None);
        let seeds: Vec<_> = result.iter().map(Blob::seed).collect();
        assert_eq!(seeds, vec![pc(0, 0), pc(2, 2)]);
    }
}
