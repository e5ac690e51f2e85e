use thiserror::Error;

/// Result type for ring generation and geometry helpers
pub type GeoResult<T> = Result<T, RingError>;

/// Errors raised while validating ring inputs
///
/// All malformed inputs map to a single `InvalidArgument` kind. The
/// `parameter` field names the offending input so callers can surface it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidArgument {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl RingError {
    pub fn invalid_argument(
        parameter: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        RingError::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the input that failed validation
    pub fn parameter(&self) -> &str {
        match self {
            RingError::InvalidArgument { parameter, .. } => parameter,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RingError::InvalidArgument { .. })
    }
}
