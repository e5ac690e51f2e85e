//! Camera Ring Generation
//!
//! Places camera markers evenly on a small circle around a map location and
//! computes the compass bearing each camera must face to look at the center.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeoPoint, EARTH_RADIUS_MEAN};
pub use algorithms::{final_bearing, haversine_distance, initial_bearing, GeoCircleGenerator};
pub use validation::{GeoResult, RequestValidator, RingError};
pub use utils::{ConfigError, ConfigurationManager, RingConfig};
pub use api::{
    CameraLocation, CameraPose, CircleRequest, CsvFormatter, GeoJsonFormatter, ModelOrientation,
    OutputFormat, RingPoint, RingResult, TextFormatter,
};

/// Generate a camera ring; see [`GeoCircleGenerator::generate_ring`]
pub fn generate_ring(request: &CircleRequest) -> GeoResult<RingResult> {
    GeoCircleGenerator::generate_ring(request)
}
