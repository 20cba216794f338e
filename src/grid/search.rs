//! The search grid: three stacked layers over one shared shape.

use std::time::SystemTime;

use glam::Vec2;

use crate::grid::Layer2d;
use crate::message::GridMessage;
use crate::raster;
use crate::types::{
    GridError, GridInfo, MAP_FRAME, MARKER, MARKER_LENGTH_M, MARKER_WIDTH_M, Pose2, SEARCHED,
    UNKNOWN,
};

/// Persistent 2D search state for one mission.
///
/// Three same-shaped layers:
/// - `occupancy`: external-sensor-confirmed occupancy in [-1, 100], -1 unknown.
/// - `searched`: mask of ground the camera has already observed.
/// - `markers`: mask of confirmed elongated marker detections.
///
/// The published grid is the element-wise sum of the layers clamped to
/// [-1, 100]. Shape and placement are fixed at construction; there is no
/// resize or reset.
///
/// Concurrency contract: the grid is single-writer. Callers running updates
/// from more than one thread must serialize all mutation of one instance;
/// [`composite`](Self::composite) and [`to_message`](Self::to_message) return
/// snapshot copies, so a publish taken under that same serialization never
/// observes a torn state.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    info: GridInfo,
    /// Cell-grid coordinate of the world origin, negated. Subtracted when
    /// converting world meters to cell indices.
    mid: Vec2,
    occupancy: Layer2d<i8>,
    searched: Layer2d<i8>,
    markers: Layer2d<i8>,
}

impl SearchGrid {
    /// Build an all-unknown grid. `start` places the world origin on the
    /// cell grid: its position is the cell coordinate of world (0, 0) and its
    /// theta becomes the orientation of the grid origin pose.
    pub fn new(resolution: f32, width: u32, height: u32, start: Pose2) -> Result<Self, GridError> {
        let info = GridInfo {
            width,
            height,
            resolution,
            origin: Pose2::new(-start.position * resolution, start.theta),
        };
        info.validate()?;

        Ok(Self {
            mid: -start.position,
            occupancy: Layer2d::filled(width, height, UNKNOWN),
            searched: Layer2d::filled(width, height, 0),
            markers: Layer2d::filled(width, height, 0),
            info,
        })
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    /// Continuous cell coordinate for a world position. Not bounds-checked;
    /// rasterized writes clip at the grid edge instead.
    pub fn world_to_cell(&self, world: Vec2) -> Vec2 {
        world / self.info.resolution - self.mid
    }

    /// Mark a disk of ground as visually covered, e.g. one camera footprint.
    /// Rotationally intolerant: the footprint is approximated as a circle.
    pub fn add_circle(&mut self, center_world: Vec2, radius_world: f32) {
        let center = self.world_to_cell(center_world);
        let radius = radius_world / self.info.resolution;
        raster::fill_disk(&mut self.searched, center, radius, SEARCHED);
    }

    /// Stamp a confirmed marker into the marker layer as a thick segment of
    /// the marker's nominal footprint, rotated by `-theta` about its center.
    /// Repeated calls redraw unconditionally; no de-duplication.
    pub fn found_marker(&mut self, pose: Pose2) {
        let length = MARKER_LENGTH_M / self.info.resolution;
        let half_width = MARKER_WIDTH_M / self.info.resolution / 2.0;

        let center = self.world_to_cell(pose.position);
        let half = Vec2::from_angle(-pose.theta).rotate(Vec2::new(length / 2.0, 0.0));

        raster::fill_segment(&mut self.markers, center + half, center - half, half_width, MARKER);
    }

    /// Clamped element-wise sum of the three layers. Always computed fresh.
    pub fn composite(&self) -> Layer2d<i8> {
        let cells = self
            .occupancy
            .data()
            .iter()
            .zip(self.searched.data())
            .zip(self.markers.data())
            // Widen before summing: -1 + 1 + 101 overflows i8.
            .map(|((&o, &s), &m)| (o as i16 + s as i16 + m as i16).clamp(-1, 100) as i8)
            .collect();
        // Layers share one shape by construction, so the length always matches.
        Layer2d::from_vec(self.info.width, self.info.height, cells)
            .unwrap_or_else(|_| Layer2d::filled(self.info.width, self.info.height, UNKNOWN))
    }

    /// Snapshot the composite into a transmissible message stamped `stamp`.
    pub fn to_message(&self, stamp: SystemTime) -> GridMessage {
        GridMessage {
            resolution: self.info.resolution,
            width: self.info.width,
            height: self.info.height,
            origin: self.info.origin,
            stamp,
            frame_id: MAP_FRAME.to_string(),
            data: self.composite().data().to_vec(),
        }
    }

    pub fn occupancy(&self) -> &Layer2d<i8> {
        &self.occupancy
    }

    pub fn searched(&self) -> &Layer2d<i8> {
        &self.searched
    }

    pub fn markers(&self) -> &Layer2d<i8> {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::*;
    use crate::types::OCCUPIED;

    fn grid() -> SearchGrid {
        SearchGrid::new(0.1, 100, 100, Pose2::new(Vec2::new(50.0, 50.0), 0.0)).unwrap()
    }

    #[test]
    fn origin_pose_is_world_position_of_cell_zero() {
        let g = grid();
        assert_eq!(g.info().origin.position, Vec2::new(-5.0, -5.0));
        assert_eq!(g.info().origin.theta, 0.0);
    }

    #[test]
    fn world_to_cell_offsets_by_starting_pose() {
        let g = grid();
        assert_eq!(g.world_to_cell(Vec2::ZERO), Vec2::new(50.0, 50.0));
        assert_eq!(g.world_to_cell(Vec2::new(1.0, -2.0)), Vec2::new(60.0, 30.0));
    }

    #[test]
    fn rejects_invalid_shape() {
        assert!(SearchGrid::new(0.0, 10, 10, Pose2::default()).is_err());
        assert!(SearchGrid::new(-0.1, 10, 10, Pose2::default()).is_err());
        assert!(SearchGrid::new(0.1, 0, 10, Pose2::default()).is_err());
    }

    #[test]
    fn add_circle_marks_searched_disk() {
        let mut g = grid();
        g.add_circle(Vec2::ZERO, 2.0);

        // 20-cell disk around cell (50, 50).
        assert_eq!(g.searched().get(UVec2::new(50, 50)), Some(&1));
        assert_eq!(g.searched().get(UVec2::new(70, 50)), Some(&1));
        assert_eq!(g.searched().get(UVec2::new(50, 30)), Some(&1));
        assert_eq!(g.searched().get(UVec2::new(71, 50)), Some(&0));
        assert_eq!(g.searched().get(UVec2::new(75, 75)), Some(&0));
        // Untouched layers stay untouched.
        assert!(g.markers().data().iter().all(|&v| v == 0));
        assert!(g.occupancy().data().iter().all(|&v| v == UNKNOWN));
    }

    #[test]
    fn found_marker_draws_segment_of_nominal_footprint() {
        let mut g = grid();
        g.found_marker(Pose2::new(Vec2::new(1.0, 0.0), 0.0));

        // 12-cell-long horizontal segment centered on cell (60, 50).
        assert_eq!(g.markers().get(UVec2::new(60, 50)), Some(&MARKER));
        assert_eq!(g.markers().get(UVec2::new(54, 50)), Some(&MARKER));
        assert_eq!(g.markers().get(UVec2::new(66, 50)), Some(&MARKER));
        assert_eq!(g.markers().get(UVec2::new(60, 52)), Some(&0));
        assert_eq!(g.markers().get(UVec2::new(68, 50)), Some(&0));
    }

    #[test]
    fn found_marker_rotates_about_center() {
        let mut g = grid();
        g.found_marker(Pose2::new(
            Vec2::new(1.0, 0.0),
            -std::f32::consts::FRAC_PI_2,
        ));

        // Rotated by -theta = +pi/2: the segment is vertical.
        assert_eq!(g.markers().get(UVec2::new(60, 56)), Some(&MARKER));
        assert_eq!(g.markers().get(UVec2::new(60, 44)), Some(&MARKER));
        assert_eq!(g.markers().get(UVec2::new(66, 50)), Some(&0));
    }

    #[test]
    fn composite_clamps_to_occupancy_range() {
        let mut g = grid();
        g.add_circle(Vec2::ZERO, 2.0);
        g.found_marker(Pose2::new(Vec2::ZERO, 0.0));
        // Draw twice: values stay clamped, not doubled.
        g.found_marker(Pose2::new(Vec2::ZERO, 0.0));

        let composite = g.composite();
        // Marker cell: -1 + 1 + 101 clamps to 100.
        assert_eq!(composite.get(UVec2::new(50, 50)), Some(&OCCUPIED));
        // Searched-only cell: -1 + 1 = 0.
        assert_eq!(composite.get(UVec2::new(50, 65)), Some(&0));
        // Untouched cell: unknown.
        assert_eq!(composite.get(UVec2::new(90, 90)), Some(&UNKNOWN));
        assert!(composite.data().iter().all(|&v| (-1..=100).contains(&v)));
    }

    #[test]
    fn message_snapshot_matches_composite() {
        let mut g = grid();
        g.add_circle(Vec2::ZERO, 1.0);
        let msg = g.to_message(SystemTime::UNIX_EPOCH);

        assert_eq!(msg.resolution, 0.1);
        assert_eq!((msg.width, msg.height), (100, 100));
        assert_eq!(msg.frame_id, MAP_FRAME);
        assert_eq!(msg.data.len(), 100 * 100);
        assert_eq!(msg.data, g.composite().data());
    }
}
