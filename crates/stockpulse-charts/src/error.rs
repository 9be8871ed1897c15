//! Chart error types.

use stockpulse_core::PulseError;
use thiserror::Error;

/// Chart operation result type.
pub type ChartResult<T> = Result<T, ChartError>;

/// Chart error types.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Records could not be loaded.
    #[error("Record error: {0}")]
    Records(#[from] PulseError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_core_error() {
        let err: ChartError = PulseError::parse_error("expected array").into();
        assert_eq!(err.to_string(), "Record error: Parse error: expected array");
    }
}
