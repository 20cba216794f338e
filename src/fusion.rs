//! Marker fusion: turns detection events and pose lookups into grid updates.
//!
//! Purely reactive: one callback in, at most one grid write and one publish
//! out. No retries; a failed transform lookup aborts the current cycle and
//! leaves the grid at its last valid state. Degenerate geometry (zero-length
//! direction, non-positive height) is logged and dropped before it can write
//! NaN into the grid.

use std::time::SystemTime;

use glam::Vec2;
use log::{debug, warn};

use crate::camera::{CameraInfo, PinholeCamera};
use crate::grid::SearchGrid;
use crate::message::GridSink;
use crate::projection::{unit_vector, visual_radius};
use crate::types::{GridError, Pose2};

/// Vehicle state sampled from the external transform tree: planar position in
/// the world frame and height above the ground plane along the optical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSample {
    pub position: Vec2,
    pub height: f32,
}

/// External pose/transform service. May block or fail per call; failures are
/// surfaced as [`GridError::Transform`] and abort only that update cycle.
pub trait TransformSource {
    fn lookup(&mut self) -> Result<TransformSample, GridError>;
}

/// One marker sighting from the vision detector, in pixel coordinates.
/// Detectors reporting `found = false` hand `None` to
/// [`MarkerTracker::add_marker`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDetection {
    pub pixel: Vec2,
    pub theta: f32,
}

/// Fuses marker detections into a [`SearchGrid`] using the downward camera's
/// pinhole model and the vehicle transform tree.
///
/// Same single-writer contract as the grid it owns: drive all calls from one
/// task, or serialize them externally.
pub struct MarkerTracker<T, S> {
    grid: SearchGrid,
    camera: PinholeCamera,
    transforms: T,
    sink: S,
}

impl<T: TransformSource, S: GridSink> MarkerTracker<T, S> {
    /// Fails with [`GridError::MissingCameraInfo`] when no intrinsics sample
    /// is available; nothing here works without the camera model.
    pub fn new(
        camera_info: Option<CameraInfo>,
        grid: SearchGrid,
        transforms: T,
        sink: S,
    ) -> Result<Self, GridError> {
        let info = camera_info.ok_or(GridError::MissingCameraInfo)?;
        let camera = PinholeCamera::from_info(&info)?;
        Ok(Self {
            grid,
            camera,
            transforms,
            sink,
        })
    }

    pub fn grid(&self) -> &SearchGrid {
        &self.grid
    }

    /// Record "the camera looked here": stamp the current field-of-view disk
    /// into the coverage layer and publish. Runs once per cycle whether or
    /// not anything was detected.
    pub fn update_coverage(&mut self) -> Result<(), GridError> {
        let sample = self.transforms.lookup()?;
        let Some(radius) = reject_degenerate(
            visual_radius(&self.camera, sample.height, None),
            "coverage update",
        )?
        else {
            return Ok(());
        };

        self.grid.add_circle(sample.position, radius);
        debug!(
            "coverage disk r={radius:.2}m at ({:.2}, {:.2})",
            sample.position.x, sample.position.y
        );
        self.publish();
        Ok(())
    }

    /// Project a pixel-space detection onto the ground plane and stamp it
    /// into the marker layer. `None` (nothing seen this frame) is a no-op.
    ///
    /// The marker's world position is recovered from the pixel offset between
    /// the principal point and the detection center: the offset direction
    /// gives the bearing and [`visual_radius`] at the current height gives
    /// the metric distance.
    pub fn add_marker(&mut self, detection: Option<MarkerDetection>) -> Result<(), GridError> {
        let Some(detection) = detection else {
            return Ok(());
        };

        let sample = self.transforms.lookup()?;

        let offset = self.camera.principal_point() - detection.pixel;
        let Some(dir) = reject_degenerate(unit_vector(offset), "marker bearing")? else {
            return Ok(());
        };
        let Some(magnitude) = reject_degenerate(
            visual_radius(&self.camera, sample.height, Some(detection.pixel)),
            "marker range",
        )?
        else {
            return Ok(());
        };

        let world = dir * magnitude + sample.position;
        debug!(
            "marker at world ({:.2}, {:.2}) theta={:.2}",
            world.x, world.y, detection.theta
        );
        self.grid.found_marker(Pose2::new(world, detection.theta));
        Ok(())
    }

    /// Serialize the current composite and hand it to the sink. Fire and
    /// forget; never blocks on delivery.
    pub fn publish(&mut self) {
        let msg = self.grid.to_message(SystemTime::now());
        self.sink.publish(&msg);
    }
}

/// Degenerate geometry becomes a logged no-op (`Ok(None)`) instead of
/// corrupting the grid; every other error propagates.
fn reject_degenerate<V>(result: Result<V, GridError>, what: &str) -> Result<Option<V>, GridError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(GridError::DegenerateGeometry(msg)) => {
            warn!("dropping {what}: {msg}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
