//! Geodesic ring and bearing computations

pub mod bearing;
pub mod local;
pub mod ring;

pub use bearing::{final_bearing, haversine_distance, initial_bearing, normalize_bearing};
pub use local::{delta_to_offset, offset_to_delta, wrap_longitude};
pub use ring::GeoCircleGenerator;
