//! Connected component analysis
//!
//! This module finds the connected foreground components of a binary mask
//! with a raster scan driving a breadth-first flood fill.
//!
//! # Algorithm
//!
//! 1. A `visited` grid the size of the mask starts all false.
//! 2. Cells are scanned row by row, left to right. Each foreground cell not
//!    yet visited seeds a new [`Blob`]: it is marked visited, appended to the
//!    blob and pushed onto a FIFO queue.
//! 3. Cells are popped from the queue and their neighbors examined in the
//!    fixed order given by [`ConnectivityType::offsets`]. Every in-bounds,
//!    foreground, unvisited neighbor is marked, appended and queued.
//! 4. When the queue drains the blob is complete and the scan resumes.
//!
//! The fixed neighbor order pins down the coordinate order inside each blob,
//! so output is identical from run to run.
//!
//! Time is O(W·H). The visited grid is W·H booleans and the queue can hold
//! up to W·H coordinates when one blob covers the whole mask.

use crate::error::RegionResult;
use crate::seedfill::flood_component;
use cellscope_core::{BinaryMask, LabelingResult, PixelCoordinate, check_extent};
use log::{debug, trace};
use std::collections::VecDeque;

/// Neighbor offsets `(d_row, d_col)` for 4-way connectivity: N, E, S, W.
const FOUR_WAY_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Neighbor offsets `(d_row, d_col)` for 8-way connectivity:
/// N, NE, E, SE, S, SW, W, NW.
const EIGHT_WAY_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets `(d_row, d_col)` in visitation order.
    ///
    /// Clockwise starting from north. `FourWay` keeps the cardinal
    /// directions of `EightWay` in the same rotational order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY_OFFSETS,
            ConnectivityType::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }

    /// Whether `a` and `b` are adjacent under this connectivity.
    pub fn are_adjacent(self, a: PixelCoordinate, b: PixelCoordinate) -> bool {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        match self {
            ConnectivityType::FourWay => dr + dc == 1,
            ConnectivityType::EightWay => dr <= 1 && dc <= 1 && (dr | dc) != 0,
        }
    }
}

/// Options for labeling
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Connectivity type (4-way or 8-way)
    pub connectivity: ConnectivityType,
}

impl LabelOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self { connectivity }
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Borrowed view of row-major mask cells with a checked extent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Grid<'a> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cells: &'a [bool],
}

impl<'a> Grid<'a> {
    pub(crate) fn from_mask(mask: &'a BinaryMask) -> Self {
        Self {
            width: mask.width(),
            height: mask.height(),
            cells: mask.as_slice(),
        }
    }

    #[inline]
    pub(crate) fn is_foreground(&self, coord: PixelCoordinate) -> bool {
        self.cells[coord.index(self.width)]
    }
}

/// Find all connected components in a binary mask
///
/// Returns the blobs in the order their seed cells are met by a raster
/// scan. Within a blob, coordinates are in breadth-first order from the
/// seed, neighbors visited in [`ConnectivityType::offsets`] order.
///
/// An empty mask, or one with no foreground, yields an empty result.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`](crate::RegionError::DimensionMismatch)
/// if the mask's storage does not match its dimensions.
///
/// # Example
///
/// ```
/// use cellscope_core::{BinaryMask, PixelCoordinate};
/// use cellscope_region::{ConnectivityType, label};
///
/// let mask = BinaryMask::from_fn(3, 3, |c| {
///     matches!((c.row, c.col), (0, 0) | (0, 1) | (2, 2))
/// });
/// let result = label(&mask, ConnectivityType::EightWay).unwrap();
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.blobs()[1].coords(), &[PixelCoordinate::new(2, 2)]);
/// ```
pub fn label(mask: &BinaryMask, connectivity: ConnectivityType) -> RegionResult<LabelingResult> {
    check_extent(mask.width(), mask.height(), mask.as_slice().len())?;
    Ok(scan(Grid::from_mask(mask), connectivity))
}

/// Find all connected components using [`LabelOptions`]
pub fn label_with(mask: &BinaryMask, options: &LabelOptions) -> RegionResult<LabelingResult> {
    label(mask, options.connectivity)
}

/// Find all connected components in a raw row-major buffer
///
/// Same as [`label`] for callers holding cells in their own buffer.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`](crate::RegionError::DimensionMismatch)
/// if `cells.len() != width * height`.
pub fn label_slice(
    width: u32,
    height: u32,
    cells: &[bool],
    connectivity: ConnectivityType,
) -> RegionResult<LabelingResult> {
    check_extent(width, height, cells.len())?;
    Ok(scan(
        Grid {
            width,
            height,
            cells,
        },
        connectivity,
    ))
}

fn scan(grid: Grid<'_>, connectivity: ConnectivityType) -> LabelingResult {
    let mut result = LabelingResult::new();
    let mut visited = vec![false; grid.cells.len()];
    let mut queue = VecDeque::new();

    for (index, &fg) in grid.cells.iter().enumerate() {
        if !fg || visited[index] {
            continue;
        }
        let seed = PixelCoordinate::from_index(index, grid.width);
        let blob = flood_component(&grid, seed, connectivity, &mut visited, &mut queue);
        trace!(
            "blob {} seeded at {} with {} pixels",
            result.len(),
            seed,
            blob.len()
        );
        result.push(blob);
    }

    debug!(
        "labeled {}x{} mask ({:?}): {} blobs, {} foreground pixels",
        grid.width,
        grid.height,
        connectivity,
        result.len(),
        result.total_pixels()
    );
    result
}
