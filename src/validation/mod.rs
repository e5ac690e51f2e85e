//! Input validation and error types

pub mod data;
pub mod error;

pub use data::RequestValidator;
pub use error::{GeoResult, RingError};
