//! CLI command implementations.

pub mod analyze;
pub mod chart;
pub mod format;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use chart::ChartArgs;
pub use format::FormatArgs;

use chrono::{DateTime, Utc};
use std::path::Path;

use stockpulse_core::config::{FormatConfig, MAX_DECIMALS};
use stockpulse_core::format::parse_timestamp_in;
use stockpulse_core::record::{parse_records, Record};
use stockpulse_core::text::{clean_records, filter_by_keywords};

use crate::error::{CliError, CliResult};

/// Loads formatting defaults, or the built-in defaults without a file.
pub fn load_config(path: Option<&Path>) -> CliResult<FormatConfig> {
    let Some(path) = path else {
        return Ok(FormatConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let config = FormatConfig::from_toml_str(&text).map_err(|e| CliError::config(path, &e))?;
    tracing::debug!(path = %path.display(), "loaded format config");
    Ok(config)
}

/// Reads a JSON array of records, optionally cleaning text and keeping
/// only posts that mention one of `keywords`.
pub fn load_records(path: &Path, clean: bool, keywords: &[String]) -> CliResult<Vec<Record>> {
    let text = std::fs::read_to_string(path)?;
    let mut records = parse_records(&text).map_err(|e| CliError::records(path, &e))?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded records");

    if clean {
        records = clean_records(&records);
    }
    if !keywords.is_empty() {
        records = filter_by_keywords(&records, keywords)
            .into_iter()
            .cloned()
            .collect();
        tracing::info!(count = records.len(), ?keywords, "filtered records by keyword");
    }
    Ok(records)
}

/// Validates a fractional digit count.
pub fn validate_decimals(decimals: u32) -> CliResult<u32> {
    if decimals > MAX_DECIMALS {
        return Err(CliError::InvalidDecimals(decimals));
    }
    Ok(decimals)
}

/// Parses an ISO-8601 instant given on the command line; offset-less
/// input is read as UTC.
pub fn parse_instant(s: &str) -> CliResult<DateTime<Utc>> {
    parse_timestamp_in(s, &Utc).map_err(|_| CliError::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_decimals() {
        assert_eq!(validate_decimals(100).unwrap(), 100);
        assert!(matches!(
            validate_decimals(101),
            Err(CliError::InvalidDecimals(101))
        ));
    }

    #[test]
    fn test_parse_instant_reads_naive_as_utc() {
        let expected = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(parse_instant("2023-06-01T12:00:00").unwrap(), expected);
        assert_eq!(parse_instant("2023-06-01T14:00:00+02:00").unwrap(), expected);
        assert!(parse_instant("noon").is_err());
    }

    #[test]
    fn test_default_config_without_file() {
        assert_eq!(load_config(None).unwrap(), FormatConfig::default());
    }
}
