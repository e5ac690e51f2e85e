//! Earth model and ring generation parameters

/// Mean Earth radius in meters (spherical model, not WGS84)
pub const EARTH_RADIUS_MEAN: f64 = 6_371_000.0;

/// Radius of the ring drawn around a location (meters)
pub const DEFAULT_RING_RADIUS_M: f64 = 30.0;

/// Number of camera points placed on a ring
pub const DEFAULT_RING_POINTS: usize = 16;

/// Height of the ring above the marker's target position (meters)
pub const DEFAULT_ALTITUDE_OFFSET_M: f64 = 5.0;

/// Initial marker height above the picked ground point (meters)
pub const DEFAULT_MARKER_HEIGHT_M: f64 = 60.0;

/// Upper bound on points per ring, keeps one request from allocating without limit
pub const MAX_RING_POINTS: usize = 4096;

/// Radius beyond which the equirectangular placement error stops being negligible (meters)
pub const MAX_RING_RADIUS_M: f64 = 10_000.0;
