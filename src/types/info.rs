//! Map metadata.

use glam::Vec2;

use crate::types::{Bounds, GridError};

/// Grid metadata: the world boundary, the cell resolution, and the cell
/// shape derived from them.
///
/// Grid x is the column axis and grid y the row axis, so `width` is the
/// number of columns and `height` the number of rows. Row 0 sits on the
/// boundary's `min.y` side.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    bounds: Bounds,
    resolution: f32,
    width: u32,
    height: u32,
}

impl MapInfo {
    /// Derive the grid shape for a boundary and resolution.
    ///
    /// The shape is `ceil(extent / resolution)` per axis, so a boundary that
    /// is not an exact multiple of the resolution gets a final partial cell.
    /// Fails fast on a degenerate boundary or non-positive resolution,
    /// before anything is allocated.
    pub fn new(bounds: Bounds, resolution: f32) -> Result<Self, GridError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridError::InvalidResolution(format!(
                "cell resolution must be positive, got {resolution}"
            )));
        }
        if !bounds.min.is_finite()
            || !bounds.max.is_finite()
            || bounds.min.x >= bounds.max.x
            || bounds.min.y >= bounds.max.y
        {
            return Err(GridError::InvalidBoundary(format!(
                "boundary min {} must lie strictly below max {} on both axes",
                bounds.min, bounds.max
            )));
        }

        let width = (bounds.width() / resolution).ceil() as u32;
        let height = (bounds.height() / resolution).ceil() as u32;
        Ok(Self {
            bounds,
            resolution,
            width,
            height,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// World coordinate of cell (0, 0)'s lower-left corner.
    pub fn origin(&self) -> Vec2 {
        self.bounds.min
    }
}
