//! Transmissible grid snapshot and the publish seam.

use std::time::SystemTime;

use crate::types::Pose2;

/// One composited grid snapshot, ready for the transport layer.
///
/// `data` is row-major (`width * height` cells, row `y = 0` first) with every
/// value in [-1, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct GridMessage {
    pub resolution: f32,
    pub width: u32,
    pub height: u32,
    /// World pose of cell (0, 0).
    pub origin: Pose2,
    pub stamp: SystemTime,
    pub frame_id: String,
    pub data: Vec<i8>,
}

/// Outbound channel for grid snapshots. Fire-and-forget: implementations must
/// not block the update cycle and get no acknowledgment; a dropped message is
/// replaced by the next publish.
pub trait GridSink {
    fn publish(&mut self, msg: &GridMessage);
}

/// Sink that drops every message. Useful when running the tracker for its
/// grid state alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl GridSink for NullSink {
    fn publish(&mut self, _msg: &GridMessage) {}
}
