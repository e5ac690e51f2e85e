//! Camera ring generation around a location
//!
//! Points are placed with a planar angle on the local tangent plane, so point 0
//! sits due east of the center and the ring runs counter-clockwise. Each point's
//! bearing comes from the spherical formula instead of the planar angle. The two
//! differ slightly, which is within tolerance for pointing a camera model.

use log::{debug, warn};
use nalgebra::Vector2;
use std::f64::consts::PI;

use crate::algorithms::bearing::final_bearing;
use crate::algorithms::local::{offset_to_delta, wrap_longitude};
use crate::api::types::{CircleRequest, RingPoint, RingResult};
use crate::core::GeoPoint;
use crate::validation::{GeoResult, RequestValidator};

/// Stateless generator for camera rings
pub struct GeoCircleGenerator;

impl GeoCircleGenerator {
    /// Generate `point_count` evenly spaced points around the request's center
    ///
    /// The request is validated in full before any point is computed.
    pub fn generate_ring(request: &CircleRequest) -> GeoResult<RingResult> {
        RequestValidator::validate_request(request)?;

        let center = request.center();
        let count = request.point_count;
        let mut points = Vec::with_capacity(count);
        let mut crossed_antimeridian = false;

        for i in 0..count {
            let angle = 2.0 * PI * i as f64 / count as f64;
            let offset = Vector2::new(
                request.radius_meters * angle.cos(),
                request.radius_meters * angle.sin(),
            );
            let (delta_lon, delta_lat) = offset_to_delta(request.center_latitude, &offset);

            let raw_longitude = request.center_longitude + delta_lon;
            let longitude = wrap_longitude(raw_longitude);
            crossed_antimeridian |= longitude != raw_longitude;

            let position = GeoPoint::new(
                longitude,
                request.center_latitude + delta_lat,
                request.altitude,
            );

            points.push(RingPoint {
                bearing_degrees: final_bearing(&position, &center),
                position,
                owner_id: request.owner_id.clone(),
                point_id: format!("{}-{}", request.owner_id, i),
                center_reference: center,
            });
        }

        if crossed_antimeridian {
            warn!(
                "ring for {} crosses the antimeridian, longitudes wrapped",
                request.owner_id
            );
        }
        debug!(
            "generated {} ring points for {} around ({:.6}, {:.6}) at r={} m",
            points.len(),
            request.owner_id,
            request.center_longitude,
            request.center_latitude,
            request.radius_meters
        );

        Ok(RingResult::new(points))
    }
}
