//! Error types for the Stockpulse core.
//!
//! Display-oriented functions never return these; they fold failures into
//! display strings. The strict `try_*`/`parse_*` entry points surface them.

use thiserror::Error;

/// A specialized Result type for Stockpulse operations.
pub type PulseResult<T> = Result<T, PulseError>;

/// The main error type for Stockpulse operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PulseError {
    /// A timestamp string could not be parsed as ISO-8601.
    #[error("Invalid timestamp: {input}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
    },

    /// A consensus label was not one of `positive`, `negative`, `neutral`.
    #[error("Unknown sentiment label: {label}")]
    UnknownLabel {
        /// The rejected label.
        label: String,
    },

    /// A date style name was not recognised.
    #[error("Unknown date style: {name}")]
    UnknownDateStyle {
        /// The rejected style name.
        name: String,
    },

    /// Configuration failed validation.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },

    /// Input documents (JSON records, TOML config) could not be decoded.
    #[error("Parse error: {reason}")]
    ParseError {
        /// Description of the decoding failure.
        reason: String,
    },
}

impl PulseError {
    /// Creates an invalid timestamp error.
    #[must_use]
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
        }
    }

    /// Creates an unknown label error.
    #[must_use]
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::ParseError {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}

impl From<toml::de::Error> for PulseError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PulseError::invalid_timestamp("not-a-date");
        assert_eq!(err.to_string(), "Invalid timestamp: not-a-date");
    }

    #[test]
    fn test_unknown_label() {
        let err = PulseError::unknown_label("bullish");
        assert!(err.to_string().contains("bullish"));
    }

    #[test]
    fn test_from_json_error() {
        let err: PulseError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, PulseError::ParseError { .. }));
    }
}
