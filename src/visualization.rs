use image::{GrayImage, Luma};

use crate::grid::SearchGrid;
use crate::types::UNKNOWN;

/// Render the composited grid as a grayscale preview.
///
/// - Free/searched (0) is near-white.
/// - Confirmed markers (100) are black.
/// - Unknown (-1) is mid-gray.
///
/// The grid's `y = 0` row (lowest in world coordinates) is written to the
/// bottom of the image, matching the usual map-image orientation.
pub fn composite_to_image(grid: &SearchGrid) -> GrayImage {
    let composite = grid.composite();
    let width = composite.width();
    let height = composite.height();
    let mut img = GrayImage::new(width, height);

    for y_img in 0..height {
        let y_grid = height - 1 - y_img;
        for x in 0..width {
            let value = composite
                .get(glam::UVec2::new(x, y_grid))
                .copied()
                .unwrap_or(UNKNOWN);
            img.put_pixel(x, y_img, Luma([value_to_gray(value)]));
        }
    }

    img
}

fn value_to_gray(value: i8) -> u8 {
    if value == UNKNOWN {
        return 205;
    }
    let v = (value as i16).clamp(0, 100);
    // 0 -> 254 (white), 100 -> 0 (black).
    (254 - (v * 254) / 100) as u8
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::types::Pose2;

    #[test]
    fn renders_values_and_flips_y() {
        let mut grid =
            SearchGrid::new(1.0, 3, 3, Pose2::new(Vec2::new(1.0, 1.0), 0.0)).unwrap();
        // Covers only the bottom-left neighborhood of world (-1, -1) = cell (0, 0).
        grid.add_circle(Vec2::new(-1.0, -1.0), 0.5);

        let img = composite_to_image(&grid);

        // Cell (0, 0) composites to 0 -> white-ish, written to the bottom row.
        assert_eq!(img.get_pixel(0, 2).0[0], 254);
        // Untouched cells are unknown gray.
        assert_eq!(img.get_pixel(2, 0).0[0], 205);
    }
}
