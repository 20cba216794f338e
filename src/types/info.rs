//! Grid metadata.

use crate::types::{GridError, Pose2};

/// Shape and placement of a search grid, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GridInfo {
    /// Width in cells (world X).
    pub width: u32,
    /// Height in cells (world Y).
    pub height: u32,
    /// Meters per cell.
    pub resolution: f32,
    /// World pose of cell (0, 0), including orientation.
    pub origin: Pose2,
}

impl Default for GridInfo {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            resolution: 0.1,
            origin: Pose2::default(),
        }
    }
}

impl GridInfo {
    /// Number of cells in one full layer.
    #[inline]
    pub fn cells(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Width of the grid in world units (meters).
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.resolution
    }

    /// Height of the grid in world units (meters).
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.resolution
    }

    /// Reject non-positive or non-finite dimensions before any layer is
    /// allocated against them.
    pub fn validate(&self) -> Result<(), GridError> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(GridError::InvalidMetadata(format!(
                "resolution must be positive and finite, got {}",
                self.resolution
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidMetadata(format!(
                "grid must have positive dimensions, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
