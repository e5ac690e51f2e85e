//! Validation of ring requests and geographic coordinates

use crate::api::types::CircleRequest;
use crate::core::{EARTH_RADIUS_MEAN, MAX_RING_POINTS, MAX_RING_RADIUS_M};
use crate::validation::error::{GeoResult, RingError};

/// Validator for coordinates and circle requests
pub struct RequestValidator;

impl RequestValidator {
    /// Validate a latitude in degrees
    pub fn validate_latitude(latitude: f64) -> GeoResult<()> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(RingError::invalid_argument(
                "center_latitude",
                latitude,
                "latitude must be between -90 and 90 degrees",
            ));
        }
        Ok(())
    }

    /// Validate a longitude in degrees
    pub fn validate_longitude(longitude: f64) -> GeoResult<()> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(RingError::invalid_argument(
                "center_longitude",
                longitude,
                "longitude must be between -180 and 180 degrees",
            ));
        }
        Ok(())
    }

    /// Validate every field of a circle request
    ///
    /// Rejects poles because the longitude scale `1 / cos(lat)` has no value there,
    /// and any ring whose northern or southern point would pass over a pole.
    pub fn validate_request(request: &CircleRequest) -> GeoResult<()> {
        Self::validate_latitude(request.center_latitude)?;
        Self::validate_longitude(request.center_longitude)?;

        if request.center_latitude.abs() == 90.0 {
            return Err(RingError::invalid_argument(
                "center_latitude",
                request.center_latitude,
                "ring is undefined at the poles",
            ));
        }

        if !request.radius_meters.is_finite() || request.radius_meters <= 0.0 {
            return Err(RingError::invalid_argument(
                "radius_meters",
                request.radius_meters,
                "radius must be a positive number of meters",
            ));
        }

        if request.radius_meters > MAX_RING_RADIUS_M {
            return Err(RingError::invalid_argument(
                "radius_meters",
                request.radius_meters,
                "radius too large for flat-earth point placement",
            ));
        }

        let radius_degrees = (request.radius_meters / EARTH_RADIUS_MEAN).to_degrees();
        if request.center_latitude.abs() + radius_degrees > 90.0 {
            return Err(RingError::invalid_argument(
                "radius_meters",
                request.radius_meters,
                "ring would extend past the pole",
            ));
        }

        if !request.altitude.is_finite() {
            return Err(RingError::invalid_argument(
                "altitude",
                request.altitude,
                "altitude must be finite",
            ));
        }

        if request.point_count == 0 {
            return Err(RingError::invalid_argument(
                "point_count",
                request.point_count,
                "at least one point is required",
            ));
        }

        if request.point_count > MAX_RING_POINTS {
            return Err(RingError::invalid_argument(
                "point_count",
                request.point_count,
                "at most 4096 points per ring",
            ));
        }

        if request.owner_id.is_empty() {
            return Err(RingError::invalid_argument(
                "owner_id",
                "\"\"",
                "owner id must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CircleRequest {
        CircleRequest {
            center_longitude: -0.0834,
            center_latitude: 51.5132,
            altitude: 45.0,
            radius_meters: 30.0,
            point_count: 4,
            owner_id: "loc-1".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(RequestValidator::validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_latitude_bounds() {
        assert!(RequestValidator::validate_latitude(90.0).is_ok());
        assert!(RequestValidator::validate_latitude(-90.0).is_ok());
        assert!(RequestValidator::validate_latitude(90.0001).is_err());
        assert!(RequestValidator::validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(RequestValidator::validate_longitude(180.0).is_ok());
        assert!(RequestValidator::validate_longitude(-180.0).is_ok());
        assert!(RequestValidator::validate_longitude(-180.5).is_err());
        assert!(RequestValidator::validate_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_pole() {
        let request = CircleRequest { center_latitude: -90.0, ..valid_request() };
        let error = RequestValidator::validate_request(&request).unwrap_err();
        assert_eq!(error.parameter(), "center_latitude");
    }

    #[test]
    fn test_rejects_bad_radius() {
        for radius in [0.0, -5.0, f64::NAN] {
            let request = CircleRequest { radius_meters: radius, ..valid_request() };
            let error = RequestValidator::validate_request(&request).unwrap_err();
            assert_eq!(error.parameter(), "radius_meters");
        }
    }

    #[test]
    fn test_rejects_zero_points() {
        let request = CircleRequest { point_count: 0, ..valid_request() };
        let error = RequestValidator::validate_request(&request).unwrap_err();
        assert_eq!(error.parameter(), "point_count");
    }

    #[test]
    fn test_rejects_oversized_requests() {
        let too_many = CircleRequest { point_count: usize::MAX, ..valid_request() };
        let error = RequestValidator::validate_request(&too_many).unwrap_err();
        assert_eq!(error.parameter(), "point_count");

        let at_limit = CircleRequest { point_count: MAX_RING_POINTS, ..valid_request() };
        assert!(RequestValidator::validate_request(&at_limit).is_ok());

        let too_wide = CircleRequest { radius_meters: MAX_RING_RADIUS_M + 1.0, ..valid_request() };
        let error = RequestValidator::validate_request(&too_wide).unwrap_err();
        assert_eq!(error.parameter(), "radius_meters");
    }

    #[test]
    fn test_rejects_ring_past_pole() {
        for latitude in [89.9999, -89.9999] {
            for radius in [30.0, 1000.0] {
                let request = CircleRequest {
                    center_latitude: latitude,
                    radius_meters: radius,
                    ..valid_request()
                };
                let error = RequestValidator::validate_request(&request).unwrap_err();
                assert_eq!(error.parameter(), "radius_meters");
            }
        }

        // 5 m is about 4.5e-5 degrees, inside the 1e-4 degree margin
        let close = CircleRequest { center_latitude: 89.9999, radius_meters: 5.0, ..valid_request() };
        assert!(RequestValidator::validate_request(&close).is_ok());
    }

    #[test]
    fn test_rejects_empty_owner() {
        let request = CircleRequest { owner_id: String::new(), ..valid_request() };
        assert!(RequestValidator::validate_request(&request).is_err());
    }

    #[test]
    fn test_rejects_non_finite_altitude() {
        let request = CircleRequest { altitude: f64::NAN, ..valid_request() };
        let error = RequestValidator::validate_request(&request).unwrap_err();
        assert_eq!(error.parameter(), "altitude");
    }
}
