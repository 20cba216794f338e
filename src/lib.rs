//! Occupancy-grid marker tracking for an autonomous underwater vehicle.
//!
//! Fuses downward-camera marker detections and pose/height lookups into a
//! persistent 2D search grid and publishes composited snapshots. The grid is
//! a local, single-vehicle, single-session planning aid used to decide where
//! to search next; it is not a SLAM map and is never persisted across
//! missions.
//!
//! Three layers share one shape: sensor occupancy, visual coverage, and
//! confirmed marker footprints. [`MarkerTracker`] drives all mutation from
//! vision callbacks and a periodic coverage timer; the grid itself is
//! single-writer (see [`SearchGrid`]).

pub mod camera;
pub mod config;
pub mod fusion;
pub mod grid;
pub mod message;
pub mod projection;
pub mod raster;
pub mod types;
pub mod visualization;

pub use camera::{CameraInfo, PinholeCamera};
pub use config::{GridConfig, load_grid_config};
pub use fusion::{MarkerDetection, MarkerTracker, TransformSample, TransformSource};
pub use grid::{Layer2d, SearchGrid};
pub use message::{GridMessage, GridSink, NullSink};
pub use types::{GridError, GridInfo, Pose2};
