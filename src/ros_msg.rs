//! Plain-data mirror of `nav_msgs/OccupancyGrid`.
//!
//! The core hands a transport collaborator everything it needs to publish a
//! map: the grid data plus the metadata anchoring it in the world, as
//! serializable values. Encoding and publishing stay outside this crate.

use serde::Serialize;

use crate::grid::OccupancyGrid;

/// msg: `geometry_msgs/Point`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// msg: `geometry_msgs/Quaternion`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

/// msg: `geometry_msgs/Pose`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub position: Point3,
    pub orientation: Quaternion,
}

/// msg: `nav_msgs/MapMetaData`
///
/// `origin` is the world pose of cell (0, 0)'s lower-left corner; map
/// orientation is always identity here (the grid is world-axis-aligned).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMetaData {
    pub resolution: f32,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    pub origin: Pose,
}

/// msg: `nav_msgs/OccupancyGrid`, minus the stamped header (the publisher
/// owns time).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyGridMsg {
    pub frame_id: String,
    pub info: MapMetaData,
    /// Row-major occupancy values, row 0 (the ymin side) first.
    pub data: Vec<i8>,
}

/// Assemble the message value for a finished grid.
pub fn occupancy_grid_msg(grid: &OccupancyGrid, frame_id: &str) -> OccupancyGridMsg {
    let info = grid.info();
    let origin = info.origin();

    OccupancyGridMsg {
        frame_id: frame_id.to_string(),
        info: MapMetaData {
            resolution: info.resolution(),
            width: info.width(),
            height: info.height(),
            origin: Pose {
                position: Point3 {
                    x: origin.x,
                    y: origin.y,
                    z: 0.0,
                },
                orientation: Quaternion::IDENTITY,
            },
        },
        data: grid.data().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::occupancy_grid_msg;
    use crate::rasterize::build_occupancy_grid;
    use crate::types::{Bounds, OCCUPIED};

    #[test]
    fn metadata_mirrors_the_grid() {
        let grid = build_occupancy_grid(
            Bounds::from_array([-5.0, -3.0, 5.0, 3.0]),
            &[Bounds::from_array([0.0, 0.0, 1.0, 1.0])],
            1.0,
        )
        .unwrap();
        let msg = occupancy_grid_msg(&grid, "map");

        assert_eq!(msg.frame_id, "map");
        assert_eq!(msg.info.resolution, 1.0);
        assert_eq!(msg.info.width, 10);
        assert_eq!(msg.info.height, 6);
        assert_eq!(msg.info.origin.position.x, -5.0);
        assert_eq!(msg.info.origin.position.y, -3.0);
        assert_eq!(msg.info.origin.position.z, 0.0);
        assert_eq!(msg.info.origin.orientation.w, 1.0);
        assert_eq!(msg.data.len(), 60);
    }

    #[test]
    fn data_is_the_grid_row_major() {
        let grid = build_occupancy_grid(
            Bounds::from_array([0.0, 0.0, 3.0, 2.0]),
            &[Bounds::from_array([1.0, 0.0, 2.0, 1.0])],
            1.0,
        )
        .unwrap();
        let msg = occupancy_grid_msg(&grid, "map");

        assert_eq!(msg.data, grid.data());
        // Obstacle corners land in cells (1,0) and (2,1): rows 0..=1, cols 1..=2.
        assert_eq!(msg.data[1], OCCUPIED);
        assert_eq!(msg.data[3 + 2], OCCUPIED);
    }

    #[test]
    fn message_serializes_for_a_sink() {
        let grid = build_occupancy_grid(Bounds::from_array([0.0, 0.0, 2.0, 2.0]), &[], 1.0)
            .unwrap();
        let msg = occupancy_grid_msg(&grid, "map");
        let yaml = serde_yaml::to_string(&msg).expect("message should serialize");
        assert!(yaml.contains("frame_id: map"));
        assert!(yaml.contains("width: 2"));
    }
}
