//! YAML configuration for the search grid.
//!
//! Mission launch files carry the grid shape and the starting pose; the
//! camera model and transforms come from live services, never from config.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::grid::SearchGrid;
use crate::types::{GridError, Pose2};

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    /// Meters per cell.
    pub resolution: f32,
    /// Width in cells (world X).
    pub width: u32,
    /// Height in cells (world Y).
    pub height: u32,
    /// Cell-grid coordinate of the world origin plus grid orientation:
    /// `[x_cells, y_cells, theta_rad]`.
    #[serde(default)]
    pub starting_pose: [f32; 3],
}

impl GridConfig {
    pub fn starting_pose(&self) -> Pose2 {
        Pose2::new(
            Vec2::new(self.starting_pose[0], self.starting_pose[1]),
            self.starting_pose[2],
        )
    }

    /// Allocate the grid this config describes.
    pub fn build(&self) -> Result<SearchGrid, GridError> {
        SearchGrid::new(self.resolution, self.width, self.height, self.starting_pose())
    }
}

/// Load and validate a [`GridConfig`] from a YAML file.
pub fn load_grid_config(path: impl AsRef<Path>) -> Result<GridConfig, GridError> {
    let yaml = std::fs::read_to_string(path.as_ref())?;
    let config: GridConfig = serde_yaml::from_str(&yaml)?;

    if !config.resolution.is_finite() || config.resolution <= 0.0 {
        return Err(GridError::InvalidMetadata(format!(
            "resolution must be positive and finite, got {}",
            config.resolution
        )));
    }
    if config.width == 0 || config.height == 0 {
        return Err(GridError::InvalidMetadata(format!(
            "grid must have positive dimensions, got {}x{}",
            config.width, config.height
        )));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_builds() {
        let config: GridConfig = serde_yaml::from_str(
            "resolution: 0.1\nwidth: 100\nheight: 500\nstarting_pose: [50.0, 50.0, 0.0]\n",
        )
        .unwrap();

        assert_eq!(config.starting_pose().position, Vec2::new(50.0, 50.0));
        let grid = config.build().unwrap();
        assert_eq!(grid.info().width, 100);
        assert_eq!(grid.info().height, 500);
    }

    #[test]
    fn starting_pose_defaults_to_origin() {
        let config: GridConfig =
            serde_yaml::from_str("resolution: 0.1\nwidth: 10\nheight: 10\n").unwrap();
        assert_eq!(config.starting_pose(), Pose2::default());
    }
}
