//! Pixel labeling functions
//!
//! This module builds a per-pixel label map with the classic two-pass
//! union-find algorithm, as an alternative to the flood fill in
//! [`conncomp`](crate::conncomp).
//!
//! Labels are renumbered in order of first appearance in a raster scan, so
//! label `k` (1-based) names the same pixel set as blob `k - 1` of
//! [`label`](crate::label). Only the order of coordinates inside a blob
//! differs: [`LabelMap::to_blobs`] lists them in raster order.

use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use cellscope_core::{BinaryMask, Blob, LabelingResult, PixelCoordinate, check_extent};
use log::debug;

/// Previously scanned neighbors for 4-way connectivity: W, N.
const FOUR_WAY_BACKWARD: [(i32, i32); 2] = [(0, -1), (-1, 0)];

/// Previously scanned neighbors for 8-way connectivity: W, NW, N, NE.
const EIGHT_WAY_BACKWARD: [(i32, i32); 4] = [(0, -1), (-1, -1), (-1, 0), (-1, 1)];

/// Per-pixel component labels.
///
/// `0` marks background; foreground pixels carry labels `1..=count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of components.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Label at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: PixelCoordinate) -> Option<u32> {
        if coord.row < self.height && coord.col < self.width {
            Some(self.labels[coord.index(self.width)])
        } else {
            None
        }
    }

    /// Row-major labels.
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Number of pixels carrying each label, indexed by `label - 1`.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count as usize];
        for &l in self.labels.iter().filter(|&&l| l > 0) {
            sizes[(l - 1) as usize] += 1;
        }
        sizes
    }

    /// Collect the labeled pixels into blobs, one per label.
    ///
    /// Blob order follows labels. Coordinates inside each blob are in
    /// raster order.
    pub fn to_blobs(&self) -> LabelingResult {
        let mut groups: Vec<Vec<PixelCoordinate>> = self
            .sizes()
            .into_iter()
            .map(Vec::with_capacity)
            .collect();
        for (index, &l) in self.labels.iter().enumerate() {
            if l > 0 {
                groups[(l - 1) as usize].push(PixelCoordinate::from_index(index, self.width));
            }
        }
        groups
            .into_iter()
            .filter_map(|coords| Blob::new(coords).ok())
            .collect()
    }
}

/// Disjoint-set forest over provisional labels.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Slot 0 is background and never joined.
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Label connected components into a per-pixel map
///
/// Two raster passes: the first assigns provisional labels and records
/// equivalences between touching labels, the second resolves each pixel to
/// its final label.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`](crate::RegionError::DimensionMismatch)
/// if the mask's storage does not match its dimensions.
pub fn label_map(mask: &BinaryMask, connectivity: ConnectivityType) -> RegionResult<LabelMap> {
    let (width, height) = mask.dimensions();
    let cells = mask.as_slice();
    check_extent(width, height, cells.len())?;

    let backward: &[(i32, i32)] = match connectivity {
        ConnectivityType::FourWay => &FOUR_WAY_BACKWARD,
        ConnectivityType::EightWay => &EIGHT_WAY_BACKWARD,
    };

    let mut labels = vec![0u32; cells.len()];
    let mut sets = UnionFind::new();

    // First pass: provisional labels and equivalences
    for (index, &fg) in cells.iter().enumerate() {
        if !fg {
            continue;
        }
        let coord = PixelCoordinate::from_index(index, width);
        let mut assigned = 0u32;
        for &(d_row, d_col) in backward {
            let Some(n) = coord.offset(d_row, d_col, width, height) else {
                continue;
            };
            let nl = labels[n.index(width)];
            if nl == 0 {
                continue;
            }
            if assigned == 0 {
                assigned = nl;
            } else {
                sets.union(assigned, nl);
            }
        }
        if assigned == 0 {
            assigned = sets.make_set();
        }
        labels[index] = assigned;
    }

    // Second pass: resolve roots, renumber by first appearance
    let mut final_ids = vec![0u32; sets.parent.len()];
    let mut count = 0u32;
    for l in labels.iter_mut().filter(|l| **l > 0) {
        let root = sets.find(*l);
        if final_ids[root as usize] == 0 {
            count += 1;
            final_ids[root as usize] = count;
        }
        *l = final_ids[root as usize];
    }

    debug!(
        "label map {}x{} ({:?}): {} components",
        width, height, connectivity, count
    );

    Ok(LabelMap {
        width,
        height,
        labels,
        count,
    })
}

/// Count the number of connected components
///
/// # Arguments
///
/// * `mask` - Input binary mask
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// The number of foreground connected components.
pub fn count_blobs(mask: &BinaryMask, connectivity: ConnectivityType) -> RegionResult<usize> {
    Ok(label_map(mask, connectivity)?.count() as usize)
}
