//! Equirectangular local tangent plane conversions
//!
//! Treats a small patch around a reference latitude as flat: east offsets are
//! scaled by `1 / cos(lat)`, north offsets map straight onto latitude. Accurate
//! to a few centimeters at radii of tens of meters, not for large areas.

use nalgebra::Vector2;

use crate::core::EARTH_RADIUS_MEAN;

/// Convert an east/north offset in meters into a (longitude, latitude) delta in degrees
pub fn offset_to_delta(center_latitude: f64, offset: &Vector2<f64>) -> (f64, f64) {
    let delta_lon = (offset.x / EARTH_RADIUS_MEAN) / center_latitude.to_radians().cos();
    let delta_lat = offset.y / EARTH_RADIUS_MEAN;

    (delta_lon.to_degrees(), delta_lat.to_degrees())
}

/// Convert a (longitude, latitude) delta in degrees back into an east/north offset in meters
pub fn delta_to_offset(center_latitude: f64, delta_lon: f64, delta_lat: f64) -> Vector2<f64> {
    let east = delta_lon.to_radians() * center_latitude.to_radians().cos() * EARTH_RADIUS_MEAN;
    let north = delta_lat.to_radians() * EARTH_RADIUS_MEAN;

    Vector2::new(east, north)
}

/// Wrap a longitude that drifted past the antimeridian back into `[-180, 180]`
///
/// Values already in range, including exactly +/-180, are returned unchanged.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_at_equator() {
        let (delta_lon, delta_lat) = offset_to_delta(0.0, &Vector2::new(111.19493, 0.0));

        // ~111 m per millidegree at the equator
        assert!((delta_lon - 0.001).abs() < 1e-7);
        assert_eq!(delta_lat, 0.0);
    }

    #[test]
    fn test_longitude_scale_grows_with_latitude() {
        let offset = Vector2::new(30.0, 0.0);
        let (at_equator, _) = offset_to_delta(0.0, &offset);
        let (at_sixty, _) = offset_to_delta(60.0, &offset);

        // cos(60) = 0.5
        assert!((at_sixty / at_equator - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_delta_round_trip() {
        let offset = Vector2::new(-21.2, 17.8);
        let (delta_lon, delta_lat) = offset_to_delta(51.5132, &offset);
        let back = delta_to_offset(51.5132, delta_lon, delta_lat);

        assert!((back - offset).norm() < 1e-9);
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(179.0), 179.0);
        assert!((wrap_longitude(180.5) - -179.5).abs() < 1e-12);
        assert!((wrap_longitude(-180.25) - 179.75).abs() < 1e-12);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
    }

    #[test]
    fn test_wrap_longitude_many_turns() {
        // Longitudes an unchecked ring at 89.9999 degrees would produce
        let east = wrap_longitude(4971.733244176787);
        let west = wrap_longitude(-4613.733244176787);

        assert!((east - -68.266755823213).abs() < 1e-9, "east was {}", east);
        assert!((west - 66.266755823213).abs() < 1e-9, "west was {}", west);
        assert!((wrap_longitude(900.0) - -180.0).abs() < 1e-12);
    }
}
