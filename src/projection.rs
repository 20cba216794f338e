//! Ground-plane projection: pixel offsets to metric distances.
//!
//! The vehicle looks straight down at an assumed-flat ground plane from a
//! known height. The angle between the optical axis and the ray through a
//! pixel then fixes the metric distance of that pixel's ground intersection
//! from the point directly under the camera.

use glam::Vec2;

use crate::camera::PinholeCamera;
use crate::types::GridError;

/// `v / ||v||`, rejecting the zero vector instead of dividing by it.
pub fn unit_vector(v: Vec2) -> Result<Vec2, GridError> {
    v.try_normalize()
        .ok_or_else(|| GridError::DegenerateGeometry("cannot normalize zero-length vector".into()))
}

/// Metric distance in the ground plane between the point under the camera and
/// the ground intersection of the ray through `point`.
///
/// `height` is the distance from the camera to the ground plane along the
/// optical axis and must be positive and finite. With `point = None` the
/// midpoint of the shorter image dimension is used, which makes the result
/// the radius of the camera's instantaneous field of view on the ground.
///
/// Returns 0 when `point` is the principal point and grows monotonically with
/// `height` for a fixed `point`.
pub fn visual_radius(
    cam: &PinholeCamera,
    height: f32,
    point: Option<Vec2>,
) -> Result<f32, GridError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(GridError::DegenerateGeometry(format!(
            "height above ground plane must be positive and finite, got {height}"
        )));
    }

    let point = point.unwrap_or_else(|| {
        let short = cam.image_width().min(cam.image_height());
        Vec2::new(0.0, short as f32 / 2.0)
    });

    // Both rays have z = 1, so the angle between them is strictly below
    // pi/2 and the tangent stays finite.
    let mid_ray = cam.project_pixel_to_ray(cam.principal_point()).normalize();
    let point_ray = cam.project_pixel_to_ray(point).normalize();
    let theta = mid_ray.dot(point_ray).clamp(-1.0, 1.0).acos();

    Ok(theta.tan() * height)
}
