//! Core types and constants for camera ring generation

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
