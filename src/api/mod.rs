//! Public ring types and output formats
//!
//! The map UI hands in a `CircleRequest` (usually built from a `CameraLocation`),
//! receives a `RingResult`, and renders it through one of the formatters.

pub mod types;
pub mod formatting;

pub use types::{
    CameraLocation, CameraPose, CircleRequest, ModelOrientation, RingPoint, RingResult,
};
pub use formatting::{CsvFormatter, GeoJsonFormatter, OutputFormat, TextFormatter};
