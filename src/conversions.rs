//! Conversions among world coordinates, cell subscripts, and linear indices.
//!
//! Cells are addressed as `IVec2 { x: column, y: row }` and linear indices
//! are row-major (`row * width + column`). Out-of-range inputs degrade to
//! sentinels ([`INVALID_CELL`], [`INVALID_INDEX`], `Vec2::NAN`) instead of
//! erroring, and the sentinels propagate through composed conversions. Every
//! conversion is pure and element-independent: in the batch forms one
//! invalid element never affects the others.

use glam::{IVec2, UVec2, Vec2};

use crate::types::{INVALID_CELL, INVALID_INDEX, MapInfo};

impl MapInfo {
    /// Convert a cell subscript to its row-major linear index.
    ///
    /// Returns [`INVALID_INDEX`] when the cell lies outside the grid.
    pub fn cell_to_index(&self, cell: IVec2) -> i64 {
        if cell.x < 0
            || cell.y < 0
            || cell.x >= self.width() as i32
            || cell.y >= self.height() as i32
        {
            return INVALID_INDEX;
        }
        (cell.y as i64) * (self.width() as i64) + (cell.x as i64)
    }

    /// Convert a row-major linear index back to a cell subscript.
    ///
    /// Returns [`INVALID_CELL`] for negative indices and indices at or past
    /// the cell count.
    pub fn index_to_cell(&self, index: i64) -> IVec2 {
        if index < 0 || index >= self.len() as i64 {
            return INVALID_CELL;
        }
        let width = self.width() as i64;
        IVec2::new((index % width) as i32, (index / width) as i32)
    }

    /// Convert a world point to the cell containing it.
    ///
    /// The boundary is closed on all four sides: a point exactly on the
    /// max.x (resp. max.y) edge folds into the last column (resp. row)
    /// rather than the cell one past it. Points outside the boundary and
    /// non-finite points map to [`INVALID_CELL`].
    pub fn world_to_cell(&self, point: Vec2) -> IVec2 {
        if !self.bounds().contains(point) {
            return INVALID_CELL;
        }
        let col = if point.x == self.bounds().max.x {
            self.width() as i32 - 1
        } else {
            ((point.x - self.bounds().min.x) / self.resolution()).floor() as i32
        };
        let row = if point.y == self.bounds().max.y {
            self.height() as i32 - 1
        } else {
            ((point.y - self.bounds().min.y) / self.resolution()).floor() as i32
        };
        IVec2::new(col, row)
    }

    /// Convert a cell subscript to the world coordinate of its center.
    ///
    /// Returns `Vec2::NAN` when the center falls outside the boundary,
    /// which covers every out-of-grid subscript and, for boundaries that are
    /// not a multiple of the resolution, the outer half of the final padded
    /// cell.
    pub fn cell_to_world(&self, cell: IVec2) -> Vec2 {
        let center = self.bounds().min + self.resolution() * (cell.as_vec2() + 0.5);
        if !self.bounds().contains(center) {
            return Vec2::NAN;
        }
        center
    }

    /// World point to row-major linear index. Sentinels propagate: an
    /// out-of-boundary point yields [`INVALID_INDEX`].
    pub fn world_to_index(&self, point: Vec2) -> i64 {
        self.cell_to_index(self.world_to_cell(point))
    }

    /// Row-major linear index to cell-center world coordinate. Sentinels
    /// propagate: an invalid index yields `Vec2::NAN`.
    pub fn index_to_world(&self, index: i64) -> Vec2 {
        self.cell_to_world(self.index_to_cell(index))
    }

    /// Tolerant conversion for painting: the raw floor cell, clamped per
    /// axis into the grid. A coordinate off any side lands on that side's
    /// edge cell, so callers rasterizing a rectangle keep its in-boundary
    /// portion instead of dropping it.
    pub fn world_to_cell_clamped(&self, point: Vec2) -> UVec2 {
        let col = ((point.x - self.bounds().min.x) / self.resolution()).floor() as i64;
        let row = ((point.y - self.bounds().min.y) / self.resolution()).floor() as i64;
        UVec2::new(
            col.clamp(0, self.width() as i64 - 1) as u32,
            row.clamp(0, self.height() as i64 - 1) as u32,
        )
    }

    pub fn cells_to_indices(&self, cells: &[IVec2]) -> Vec<i64> {
        cells.iter().map(|&cell| self.cell_to_index(cell)).collect()
    }

    pub fn indices_to_cells(&self, indices: &[i64]) -> Vec<IVec2> {
        indices.iter().map(|&index| self.index_to_cell(index)).collect()
    }

    pub fn world_to_cells(&self, points: &[Vec2]) -> Vec<IVec2> {
        points.iter().map(|&point| self.world_to_cell(point)).collect()
    }

    pub fn cells_to_world(&self, cells: &[IVec2]) -> Vec<Vec2> {
        cells.iter().map(|&cell| self.cell_to_world(cell)).collect()
    }
}
