//! Geometric types shared across the grid and fusion APIs.

use glam::Vec2;

/// Planar pose in world coordinates (meters) with heading in radians.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Pose2 {
    pub position: Vec2,
    pub theta: f32,
}

impl Pose2 {
    pub fn new(position: Vec2, theta: f32) -> Self {
        Self { position, theta }
    }
}
