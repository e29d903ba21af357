use glam::IVec2;

pub const FREE: i8 = 0;
pub const OCCUPIED: i8 = 100;

/// Sentinel linear index for cells outside the grid.
pub const INVALID_INDEX: i64 = -1;
/// Sentinel cell subscript for points outside the boundary.
pub const INVALID_CELL: IVec2 = IVec2::splat(-1);
