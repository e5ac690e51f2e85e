//! Ring output formatting and serialization
//!
//! This module renders a `RingResult` as a GeoJSON feature collection for map
//! layers, as human-readable text, or as CSV rows for logging.

use crate::api::types::RingResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GeoJSON FeatureCollection of points
    GeoJson,
    /// Human-readable listing
    Text,
    /// One CSV row per point
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "geojson" | "json" => Ok(OutputFormat::GeoJson),
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{}' (expected geojson, text or csv)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::GeoJson => write!(f, "geojson"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// GeoJSON formatter for map layers
#[derive(Default)]
pub struct GeoJsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl GeoJsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Build a FeatureCollection with one Point feature per ring point
    ///
    /// Coordinates are `[lon, lat, alt]`; `center` is `[lon, lat]`.
    pub fn feature_collection(&self, ring: &RingResult) -> Value {
        let features: Vec<Value> = ring
            .iter()
            .map(|point| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": point.position.to_array(),
                    },
                    "properties": {
                        "id": point.owner_id,
                        "pointId": point.point_id,
                        "bearing": point.bearing_degrees,
                        "center": [point.center_reference.longitude, point.center_reference.latitude],
                    },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }

    pub fn format(&self, ring: &RingResult) -> Result<String, serde_json::Error> {
        let collection = self.feature_collection(ring);
        if self.pretty {
            serde_json::to_string_pretty(&collection)
        } else {
            serde_json::to_string(&collection)
        }
    }
}

/// Human-readable text formatter
#[derive(Default)]
pub struct TextFormatter {
    /// One line per point instead of a block
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    pub fn format_text(&self, ring: &RingResult) -> String {
        let mut output = String::new();

        if let (Some(owner), Some(center)) = (ring.owner_id(), ring.center()) {
            output.push_str(&format!(
                "Ring {} around {:.6}°, {:.6}° ({} points)\n",
                owner, center.latitude, center.longitude, ring.len()
            ));
        }

        for point in ring {
            if self.compact {
                output.push_str(&format!(
                    "{}: {:.6}°N, {:.6}°E, {:.1}m, brg {:.1}°\n",
                    point.point_id,
                    point.position.latitude,
                    point.position.longitude,
                    point.position.altitude,
                    point.bearing_degrees
                ));
            } else {
                output.push_str(&format!("Point {}:\n", point.point_id));
                output.push_str(&format!("  Latitude:  {:.6}°\n", point.position.latitude));
                output.push_str(&format!("  Longitude: {:.6}°\n", point.position.longitude));
                output.push_str(&format!("  Altitude:  {:.1} m\n", point.position.altitude));
                output.push_str(&format!("  Bearing:   {:.1}°\n", point.bearing_degrees));
            }
        }

        output
    }
}

/// Column names of the CSV output
const CSV_COLUMNS: [&str; 8] = [
    "owner_id",
    "point_id",
    "longitude",
    "latitude",
    "altitude",
    "bearing",
    "center_longitude",
    "center_latitude",
];

/// CSV formatter for data logging
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        CSV_COLUMNS.join(",")
    }

    /// Format the ring as CSV, one row per point
    ///
    /// Id fields containing commas, quotes or newlines are quoted.
    pub fn format_csv(&self, ring: &RingResult) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        if self.include_header {
            writer.write_record(CSV_COLUMNS)?;
        }

        for point in ring {
            writer.write_record([
                point.owner_id.clone(),
                point.point_id.clone(),
                format!("{:.8}", point.position.longitude),
                format!("{:.8}", point.position.latitude),
                format!("{:.2}", point.position.altitude),
                format!("{:.4}", point.bearing_degrees),
                format!("{:.8}", point.center_reference.longitude),
                format!("{:.8}", point.center_reference.latitude),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.trim_end_matches('\n').to_string())
    }
}
