//! Great-circle bearing and distance on the spherical Earth model
//!
//! Bearings are compass angles in degrees: 0 is north, 90 is east,
//! increasing clockwise, always reported in `[0, 360)`.

use crate::core::{GeoPoint, EARTH_RADIUS_MEAN};

/// Map any finite angle in degrees into `[0, 360)`
pub fn normalize_bearing(degrees: f64) -> f64 {
    let bearing = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Initial great-circle bearing when leaving `from` toward `to`
///
/// Altitudes are ignored.
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Final bearing on arrival at `to` after travelling from `from`
///
/// Equal to the reverse initial bearing turned around by 180 degrees.
pub fn final_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    normalize_bearing(initial_bearing(to, from) + 180.0)
}

/// Haversine surface distance in meters
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MEAN * h.sqrt().min(1.0).asin()
}
