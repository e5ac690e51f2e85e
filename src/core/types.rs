//! Core data types for geographic positions

use serde::{Deserialize, Serialize};

/// Position in geographic coordinates with height above the reference surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self { longitude, latitude, altitude }
    }

    /// Surface point with zero altitude
    pub fn surface(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, 0.0)
    }

    /// Same horizontal position with the altitude dropped
    pub fn to_2d(&self) -> Self {
        Self::surface(self.longitude, self.latitude)
    }

    /// Same horizontal position at a different altitude
    pub fn with_altitude(&self, altitude: f64) -> Self {
        Self::new(self.longitude, self.latitude, altitude)
    }

    /// Coordinates as `[lon, lat, alt]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.longitude, self.latitude, self.altitude]
    }
}
