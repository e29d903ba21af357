//! Rasterization of rectangular obstacles onto an occupancy grid.

use crate::grid::OccupancyGrid;
use crate::types::{Bounds, GridError, MapInfo, OCCUPIED};

/// Build the occupancy grid for a boundary, a set of rectangular obstacles,
/// and a cell resolution.
///
/// The grid starts all-free and every obstacle's covered cell rectangle is
/// marked occupied. Obstacles may be unaligned with the cell lattice and may
/// extend past the boundary; only their in-boundary portion is painted.
/// Painting only ever raises cells free -> occupied, so overlapping
/// obstacles and repeated calls are idempotent and order-independent.
///
/// Fails with [`GridError::InvalidBoundary`] or
/// [`GridError::InvalidResolution`] before allocating anything.
pub fn build_occupancy_grid(
    bounds: Bounds,
    obstacles: &[Bounds],
    resolution: f32,
) -> Result<OccupancyGrid, GridError> {
    let info = MapInfo::new(bounds, resolution)?;
    let mut grid = OccupancyGrid::empty(info);
    for obstacle in obstacles {
        mark_obstacle(&mut grid, obstacle);
    }
    Ok(grid)
}

/// Mark every cell touched by the obstacle rectangle occupied.
///
/// Each corner converts through the clamped world-to-cell mapping, so a
/// corner past the boundary lands on the nearest edge cell. An obstacle
/// entirely outside the boundary degenerates to its clamped edge cells.
pub fn mark_obstacle(grid: &mut OccupancyGrid, obstacle: &Bounds) {
    let lo = grid.info().world_to_cell_clamped(obstacle.min);
    let hi = grid.info().world_to_cell_clamped(obstacle.max);
    for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
            // in range by construction
            let _ = grid.set(x, y, OCCUPIED);
        }
    }
}
