pub mod conversions;
pub mod grid;
pub mod loaders;
pub mod rasterize;
pub mod ros_msg;
pub mod types;
pub mod visualization;

pub use grid::OccupancyGrid;
pub use loaders::environment::{Environment, load_environment};
pub use rasterize::{build_occupancy_grid, mark_obstacle};
pub use types::{Bounds, GridError, MapInfo};
