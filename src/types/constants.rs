/// Cell value for space no sensor has classified yet.
pub const UNKNOWN: i8 = -1;
/// Cell value for confirmed-free space.
pub const FREE: i8 = 0;
/// Maximum occupancy value; composites are clamped here.
pub const OCCUPIED: i8 = 100;

/// Value written into the coverage layer by [`add_circle`](crate::SearchGrid::add_circle).
pub const SEARCHED: i8 = 1;
/// Raw value written into the marker layer; one above [`OCCUPIED`] so a marker
/// still composites to 100 on top of unknown (-1) cells.
pub const MARKER: i8 = 101;

/// Assumed real-world length of a channel marker in meters (3 ft).
pub const MARKER_LENGTH_M: f32 = 1.2;
/// Assumed real-world width of a channel marker in meters (6 in).
pub const MARKER_WIDTH_M: f32 = 0.1524;

/// Frame id stamped on every published grid message.
pub const MAP_FRAME: &str = "map";
