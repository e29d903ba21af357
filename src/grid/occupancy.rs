use crate::types::{FREE, GridError, MapInfo};

/// Row-major occupancy grid over a rectangular world boundary.
///
/// Cell (0, 0) is the boundary's lower-left corner; `data[row * width + col]`
/// holds [`FREE`](crate::types::FREE) or [`OCCUPIED`](crate::types::OCCUPIED).
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    info: MapInfo,
    data: Vec<i8>,
}

impl OccupancyGrid {
    /// Allocate a grid with every cell free.
    pub fn empty(info: MapInfo) -> Self {
        let data = vec![FREE; info.len()];
        Self { info, data }
    }

    pub fn new(info: MapInfo, data: Vec<i8>) -> Result<Self, GridError> {
        if data.len() != info.len() {
            return Err(GridError::InvalidMetadata(format!(
                "data length {} does not match map size {}",
                data.len(),
                info.len()
            )));
        }

        Ok(Self { info, data })
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width()
    }

    pub fn height(&self) -> u32 {
        self.info.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<i8> {
        if x >= self.info.width() || y >= self.info.height() {
            return None;
        }
        let idx = self.index(x, y);
        Some(self.data[idx])
    }

    pub fn set(&mut self, x: u32, y: u32, value: i8) -> Result<(), GridError> {
        if x >= self.info.width() || y >= self.info.height() {
            return Err(GridError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for map {}x{}",
                x,
                y,
                self.info.width(),
                self.info.height()
            )));
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.info.width() as usize) + (x as usize)
    }

    /// Row-major cell values, row 0 first.
    pub fn data(&self) -> &[i8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::OccupancyGrid;
    use crate::types::{Bounds, FREE, GridError, MapInfo, OCCUPIED};

    fn info_4x3() -> MapInfo {
        MapInfo::new(Bounds::from_array([0.0, 0.0, 4.0, 3.0]), 1.0).unwrap()
    }

    #[test]
    fn empty_grid_is_all_free() {
        let grid = OccupancyGrid::empty(info_4x3());
        assert_eq!(grid.data().len(), 12);
        assert!(grid.data().iter().all(|&cell| cell == FREE));
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut grid = OccupancyGrid::empty(info_4x3());
        grid.set(2, 1, OCCUPIED).unwrap();
        assert_eq!(grid.get(2, 1), Some(OCCUPIED));
        // row 1, col 2 of a 4-wide grid
        assert_eq!(grid.data()[6], OCCUPIED);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut grid = OccupancyGrid::empty(info_4x3());
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(matches!(
            grid.set(4, 0, OCCUPIED),
            Err(GridError::OutOfBounds(_))
        ));
    }

    #[test]
    fn new_rejects_mismatched_data_length() {
        let err = OccupancyGrid::new(info_4x3(), vec![FREE; 5]).unwrap_err();
        assert!(matches!(err, GridError::InvalidMetadata(_)));
    }
}
