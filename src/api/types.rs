//! Common ring types and data structures

use crate::algorithms::bearing::haversine_distance;
use crate::core::GeoPoint;
use crate::utils::config::RingConfig;
use serde::{Deserialize, Serialize};

/// Parameters for one ring around a center point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleRequest {
    /// Center longitude (degrees)
    pub center_longitude: f64,
    /// Center latitude (degrees)
    pub center_latitude: f64,
    /// Altitude given to every ring point (meters)
    pub altitude: f64,
    /// Ring radius (meters, > 0)
    pub radius_meters: f64,
    /// Number of points on the ring (>= 1)
    pub point_count: usize,
    /// Identifier of the originating location, passed through untouched
    pub owner_id: String,
}

impl CircleRequest {
    /// Ring around `center` at the center's own altitude
    pub fn around(center: &GeoPoint, radius_meters: f64, point_count: usize, owner_id: impl Into<String>) -> Self {
        Self {
            center_longitude: center.longitude,
            center_latitude: center.latitude,
            altitude: center.altitude,
            radius_meters,
            point_count,
            owner_id: owner_id.into(),
        }
    }

    /// Center as a 2D point
    pub fn center(&self) -> GeoPoint {
        GeoPoint::surface(self.center_longitude, self.center_latitude)
    }
}

/// One camera point on a ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingPoint {
    /// Point position; altitude equals the request altitude
    pub position: GeoPoint,
    /// Compass bearing from this point toward the center, in [0, 360)
    pub bearing_degrees: f64,
    pub owner_id: String,
    /// `"{owner_id}-{index}"`
    pub point_id: String,
    /// Ring center without altitude
    pub center_reference: GeoPoint,
}

/// Ordered, open ring of points (the first point is not repeated at the end)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingResult {
    points: Vec<RingPoint>,
}

impl RingResult {
    pub(crate) fn new(points: Vec<RingPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[RingPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<RingPoint> {
        self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RingPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Owner shared by every point
    pub fn owner_id(&self) -> Option<&str> {
        self.points.first().map(|p| p.owner_id.as_str())
    }

    /// Center shared by every point
    pub fn center(&self) -> Option<GeoPoint> {
        self.points.first().map(|p| p.center_reference)
    }

    /// Ring point closest to `target` by surface distance
    pub fn nearest_to(&self, target: &GeoPoint) -> Option<&RingPoint> {
        self.points.iter().min_by(|a, b| {
            haversine_distance(&a.position, target).total_cmp(&haversine_distance(&b.position, target))
        })
    }
}

impl<'a> IntoIterator for &'a RingResult {
    type Item = &'a RingPoint;
    type IntoIter = std::slice::Iter<'a, RingPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// User-placed marker: a picked ground point plus a mast height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraLocation {
    pub id: String,
    /// Picked ground position
    pub source: GeoPoint,
    /// Height of the target above the source (meters)
    pub height_m: f64,
}

impl CameraLocation {
    pub fn new(id: impl Into<String>, source: GeoPoint, height_m: f64) -> Self {
        Self { id: id.into(), source, height_m }
    }

    /// Top of the marker
    pub fn target_position(&self) -> GeoPoint {
        self.source.with_altitude(self.source.altitude + self.height_m)
    }

    /// Point the camera ring is drawn around
    pub fn circle_center(&self) -> GeoPoint {
        self.target_position()
    }

    /// Copy of this location with a new height
    pub fn with_height(&self, height_m: f64) -> Self {
        Self { height_m, ..self.clone() }
    }

    /// Build the ring request for this marker from configured defaults
    pub fn ring_request(&self, config: &RingConfig) -> CircleRequest {
        let center = self.circle_center();
        CircleRequest {
            center_longitude: center.longitude,
            center_latitude: center.latitude,
            altitude: center.altitude + config.altitude_offset_m,
            radius_meters: config.radius_m,
            point_count: config.point_count,
            owner_id: self.id.clone(),
        }
    }
}

/// First-person camera placed on a ring point, looking at the center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub bearing_degrees: f64,
    /// Elevation angle toward the center, negative when looking down
    pub pitch_degrees: f64,
}

impl CameraPose {
    pub fn looking_at_center(point: &RingPoint, center_altitude: f64) -> Self {
        let horizontal = haversine_distance(&point.position, &point.center_reference);
        let vertical = center_altitude - point.position.altitude;

        Self {
            longitude: point.position.longitude,
            latitude: point.position.latitude,
            altitude: point.position.altitude,
            bearing_degrees: point.bearing_degrees,
            pitch_degrees: vertical.atan2(horizontal).to_degrees(),
        }
    }
}

/// Orientation of a directional model as `[pitch, yaw, roll]` degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOrientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl ModelOrientation {
    /// The camera model's forward axis points along +x, hence the 90 degree yaw shift
    pub fn for_point(point: &RingPoint) -> Self {
        Self {
            pitch: 0.0,
            yaw: point.bearing_degrees - 90.0,
            roll: 90.0,
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.pitch, self.yaw, self.roll]
    }
}
