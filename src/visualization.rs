use image::{GrayImage, Luma};

use crate::OccupancyGrid;

/// Convert an occupancy grid to a grayscale image preview.
///
/// - **FREE** (0) becomes white-ish.
/// - **OCCUPIED** (100) becomes black.
///
/// The output image is oriented like typical map images: the grid's row 0
/// (the boundary's ymin side) is written to the **bottom** of the image.
pub fn occupancy_grid_to_image(grid: &OccupancyGrid) -> GrayImage {
    let width = grid.width();
    let height = grid.height();
    let mut img = GrayImage::new(width, height);

    for y_img in 0..height {
        // Flip vertically so the lowest row renders at the bottom.
        let y_grid = height - 1 - y_img;
        for x in 0..width {
            let value = grid.get(x, y_grid).unwrap_or(0);
            let px = occupancy_to_gray(value);
            img.put_pixel(x, y_img, Luma([px]));
        }
    }

    img
}

fn occupancy_to_gray(value: i8) -> u8 {
    // 0 (free) -> 254, 100 (occupied) -> 0
    let v = (value as i16).clamp(0, 100);
    let gray = 254 - ((v * 254) / 100);
    gray as u8
}
