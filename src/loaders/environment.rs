//! Environment description files.
//!
//! A YAML document listing the world boundary, the obstacle rectangles, and
//! the cell resolution, the same three parameters the map-building node
//! reads from its parameter source:
//!
//! ```yaml
//! boundary: [0.0, 0.0, 10.0, 10.0]
//! blocks:
//!   - [2.0, 2.0, 4.0, 4.0]
//! resolution: 1.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::grid::OccupancyGrid;
use crate::rasterize::build_occupancy_grid;
use crate::types::{Bounds, GridError};

#[derive(Debug, Deserialize)]
struct EnvironmentFile {
    /// `[xmin, ymin, xmax, ymax]`
    boundary: [f32; 4],
    /// `[[xmin, ymin, xmax, ymax], ...]`, may be omitted
    #[serde(default, alias = "obstacles")]
    blocks: Vec<[f32; 4]>,
    resolution: f32,
}

/// A parsed environment: boundary, obstacles, and resolution.
///
/// Parsing is purely structural; boundary ordering and resolution sign are
/// enforced once, when the grid is built.
#[derive(Debug, Clone)]
pub struct Environment {
    pub boundary: Bounds,
    pub obstacles: Vec<Bounds>,
    pub resolution: f32,
}

impl Environment {
    /// Rasterize this environment into an occupancy grid.
    pub fn build_grid(&self) -> Result<OccupancyGrid, GridError> {
        build_occupancy_grid(self.boundary, &self.obstacles, self.resolution)
    }
}

pub fn load_environment(path: impl AsRef<Path>) -> Result<Environment, GridError> {
    let yaml_str = std::fs::read_to_string(path)?;
    parse_environment(&yaml_str)
}

fn parse_environment(yaml_str: &str) -> Result<Environment, GridError> {
    let file: EnvironmentFile = serde_yaml::from_str(yaml_str)?;

    Ok(Environment {
        boundary: Bounds::from_array(file.boundary),
        obstacles: file.blocks.into_iter().map(Bounds::from_array).collect(),
        resolution: file.resolution,
    })
}
