//! CLI error types.

use std::path::PathBuf;

use stockpulse_charts::ChartError;
use stockpulse_core::PulseError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid timestamp argument.
    #[error("Invalid timestamp: {0}. Use ISO-8601, e.g. 2023-06-01T12:00:00Z.")]
    InvalidTimestamp(String),

    /// Too many fractional digits requested.
    #[error("Invalid decimals: {0}. Must be at most {max}.", max = stockpulse_core::config::MAX_DECIMALS)]
    InvalidDecimals(u32),

    /// Configuration error.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Records file could not be decoded.
    #[error("Cannot read records from {}: {reason}", path.display())]
    Records {
        /// The records file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Chart error.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates a configuration error for `path`.
    pub fn config(path: impl Into<PathBuf>, err: &PulseError) -> Self {
        Self::Config {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Creates a records error for `path`.
    pub fn records(path: impl Into<PathBuf>, err: &PulseError) -> Self {
        Self::Records {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
