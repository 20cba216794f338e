//! Pinhole camera model for the downward camera.
//!
//! Built once at startup from a [`CameraInfo`] sample; absence of that sample
//! is a fatal initialization error for the whole subsystem.

use glam::{Vec2, Vec3};

use crate::types::GridError;

/// Raw intrinsics as delivered by the camera driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Focal lengths in pixels.
    pub fx: f32,
    pub fy: f32,
    /// Principal point in pixels.
    pub cx: f32,
    pub cy: f32,
}

/// Validated pinhole model. Immutable once constructed; shared read-only by
/// the projection math and marker fusion.
#[derive(Debug, Clone, Copy)]
pub struct PinholeCamera {
    fx: f32,
    fy: f32,
    cx: f32,
    cy: f32,
    image_width: u32,
    image_height: u32,
}

impl PinholeCamera {
    pub fn from_info(info: &CameraInfo) -> Result<Self, GridError> {
        if !(info.fx.is_finite() && info.fy.is_finite() && info.fx > 0.0 && info.fy > 0.0) {
            return Err(GridError::InvalidMetadata(format!(
                "focal lengths must be positive and finite, got fx={} fy={}",
                info.fx, info.fy
            )));
        }
        if info.width == 0 || info.height == 0 {
            return Err(GridError::InvalidMetadata(format!(
                "image must have positive dimensions, got {}x{}",
                info.width, info.height
            )));
        }
        Ok(Self {
            fx: info.fx,
            fy: info.fy,
            cx: info.cx,
            cy: info.cy,
            image_width: info.width,
            image_height: info.height,
        })
    }

    /// Pixel where the optical axis intersects the image plane.
    #[inline]
    pub fn principal_point(&self) -> Vec2 {
        Vec2::new(self.cx, self.cy)
    }

    #[inline]
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    #[inline]
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Ray through `pixel` in the camera frame, z-normalized (not unit
    /// length). Finite for all pixels since fx, fy > 0.
    #[inline]
    pub fn project_pixel_to_ray(&self, pixel: Vec2) -> Vec3 {
        Vec3::new(
            (pixel.x - self.cx) / self.fx,
            (pixel.y - self.cy) / self.fy,
            1.0,
        )
    }
}
