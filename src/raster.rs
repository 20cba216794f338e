//! Shape rasterizers for grid layers.
//!
//! Coordinates are continuous cell coordinates (already converted from world
//! meters). Cells are addressed by their integer index; a cell belongs to a
//! shape when its index point lies within the shape. All writes clip to the
//! layer bounds via [`Layer2d::set_clipped`].

use glam::{IVec2, Vec2};

use crate::grid::Layer2d;

/// Fill every cell within `radius` cells of `center` with `value`.
pub fn fill_disk(layer: &mut Layer2d<i8>, center: Vec2, radius: f32, value: i8) {
    if !radius.is_finite() || radius < 0.0 {
        return;
    }
    let min = (center - Vec2::splat(radius)).floor().as_ivec2();
    let max = (center + Vec2::splat(radius)).ceil().as_ivec2();
    let r2 = radius * radius;

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let d = Vec2::new(x as f32, y as f32) - center;
            if d.length_squared() <= r2 {
                layer.set_clipped(IVec2::new(x, y), value);
            }
        }
    }
}

/// Fill every cell within `half_width` cells of the segment `a`-`b` with
/// `value` (a capsule, matching a thick line with round caps).
pub fn fill_segment(layer: &mut Layer2d<i8>, a: Vec2, b: Vec2, half_width: f32, value: i8) {
    if !half_width.is_finite() || half_width < 0.0 {
        return;
    }
    let min = (a.min(b) - Vec2::splat(half_width)).floor().as_ivec2();
    let max = (a.max(b) + Vec2::splat(half_width)).ceil().as_ivec2();
    let hw2 = half_width * half_width;

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let p = Vec2::new(x as f32, y as f32);
            if point_segment_distance_squared(p, a, b) <= hw2 {
                layer.set_clipped(IVec2::new(x, y), value);
            }
        }
    }
}

fn point_segment_distance_squared(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return (p - a).length_squared();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).length_squared()
}
