//! Seed fill operations
//!
//! Breadth-first flood fill from a single seed. [`label`](crate::label)
//! drives [`flood_component`] from every unvisited foreground cell;
//! [`blob_at`] exposes it for a single caller-chosen seed.

use crate::conncomp::{ConnectivityType, Grid};
use crate::error::{RegionError, RegionResult};
use cellscope_core::{BinaryMask, Blob, PixelCoordinate, check_extent};
use std::collections::VecDeque;

/// Flood the component holding `seed`, marking every reached cell visited.
///
/// `seed` must be an unvisited foreground cell. `queue` is scratch space and
/// is left empty on return.
pub(crate) fn flood_component(
    grid: &Grid<'_>,
    seed: PixelCoordinate,
    connectivity: ConnectivityType,
    visited: &mut [bool],
    queue: &mut VecDeque<PixelCoordinate>,
) -> Blob {
    let offsets = connectivity.offsets();
    let mut blob = Blob::from_seed(seed);
    visited[seed.index(grid.width)] = true;
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        for &(d_row, d_col) in offsets {
            let Some(next) = current.offset(d_row, d_col, grid.width, grid.height) else {
                continue;
            };
            let index = next.index(grid.width);
            if visited[index] || !grid.is_foreground(next) {
                continue;
            }
            visited[index] = true;
            blob.push(next);
            queue.push_back(next);
        }
    }

    blob
}

/// Extract the blob containing a seed point
///
/// The returned blob has the same coordinate order [`label`](crate::label)
/// gives it: the fill restarts from the component's first cell in raster
/// order, whichever cell of the component `seed` is.
///
/// # Arguments
///
/// * `mask` - Input binary mask
/// * `seed` - Any cell of the wanted component
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// `None` if `seed` is background.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `seed` lies outside the mask.
pub fn blob_at(
    mask: &BinaryMask,
    seed: PixelCoordinate,
    connectivity: ConnectivityType,
) -> RegionResult<Option<Blob>> {
    check_extent(mask.width(), mask.height(), mask.as_slice().len())?;
    if !mask.contains(seed) {
        return Err(RegionError::InvalidSeed {
            row: seed.row,
            col: seed.col,
        });
    }
    if !mask.get_unchecked(seed) {
        return Ok(None);
    }

    let grid = Grid::from_mask(mask);
    let mut visited = vec![false; grid.cells.len()];
    let mut queue = VecDeque::new();

    let probe = flood_component(&grid, seed, connectivity, &mut visited, &mut queue);
    let first = probe.iter().copied().min().unwrap_or(seed);
    if first == seed {
        return Ok(Some(probe));
    }

    for coord in &probe {
        visited[coord.index(grid.width)] = false;
    }
    Ok(Some(flood_component(
        &grid,
        first,
        connectivity,
        &mut visited,
        &mut queue,
    )))
}
