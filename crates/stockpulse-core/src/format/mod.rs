//! Display formatters for numbers and dates.
//!
//! - [`format_currency`], [`format_percentage`]: fixed-point, no grouping
//! - [`format_number`]: locale grouping with fixed fractional digits
//! - [`format_date`]: ISO-8601 timestamp to calendar date
//!
//! [`Formatter`] bundles a [`FormatConfig`] so callers do not repeat the
//! symbol, digit counts and style on every call.

mod date;
mod numeric;

pub use date::{
    format_date, format_date_in, format_instant, parse_timestamp, parse_timestamp_in,
    try_format_date, try_format_date_in, DateStyle, INVALID_DATE,
};
pub use numeric::{
    format_currency, format_number, format_number_with, format_percentage, to_fixed,
    DEFAULT_CURRENCY_DECIMALS, DEFAULT_CURRENCY_SYMBOL, DEFAULT_NUMBER_DECIMALS,
    DEFAULT_PERCENTAGE_DECIMALS,
};

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

use crate::config::FormatConfig;
use crate::sentiment::format_sentiment;
use crate::time_ago::format_time_ago_in;

/// Formatters with configured defaults.
///
/// # Example
///
/// ```rust
/// use stockpulse_core::config::FormatConfig;
/// use stockpulse_core::format::Formatter;
///
/// let formatter = Formatter::new(FormatConfig::default().with_currency_symbol("€"));
/// assert_eq!(formatter.currency(12.5), "€12.50");
/// assert_eq!(formatter.number(1234567.0), "1,234,567");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Creates a formatter from a configuration.
    #[must_use]
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Formats a currency amount.
    #[must_use]
    pub fn currency(&self, value: f64) -> String {
        format_currency(
            value,
            &self.config.currency_symbol,
            self.config.currency_decimals,
        )
    }

    /// Formats a ratio as a percentage.
    #[must_use]
    pub fn percentage(&self, value: f64) -> String {
        format_percentage(value, self.config.percentage_decimals)
    }

    /// Formats a grouped number.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        format_number_with(value, self.config.number_decimals, &self.config.locale)
    }

    /// Formats a timestamp as a date in the local zone.
    #[must_use]
    pub fn date(&self, input: &str) -> String {
        format_date(input, self.config.date_style)
    }

    /// Formats a timestamp as a date in `tz`.
    #[must_use]
    pub fn date_in<Tz>(&self, input: &str, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format_date_in(input, self.config.date_style, tz)
    }

    /// Describes a sentiment score.
    #[must_use]
    pub fn sentiment(&self, score: f64) -> &'static str {
        format_sentiment(score)
    }

    /// Formats how long ago `input` was relative to `now`, in `tz`.
    #[must_use]
    pub fn time_ago_in<Tz>(&self, input: &str, now: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format_time_ago_in(input, now, tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberLocale;

    #[test]
    fn test_default_formatter() {
        let formatter = Formatter::default();
        assert_eq!(formatter.currency(1234.56), "$1234.56");
        assert_eq!(formatter.percentage(0.1234), "12.34%");
        assert_eq!(formatter.number(1234.5), "1,235");
        assert_eq!(formatter.sentiment(0.3), "Positive");
    }

    #[test]
    fn test_configured_formatter() {
        let config = FormatConfig::default()
            .with_currency_symbol("€")
            .with_currency_decimals(0)
            .with_percentage_decimals(1)
            .with_number_decimals(2)
            .with_date_style(DateStyle::Long)
            .with_locale(NumberLocale::new(' ', ','));
        let formatter = Formatter::new(config);

        assert_eq!(formatter.currency(99.5), "€100");
        assert_eq!(formatter.percentage(0.0567), "5.7%");
        assert_eq!(formatter.number(1234567.891), "1 234 567,89");
        assert_eq!(
            formatter.date_in("2023-06-01T12:00:00Z", &Utc),
            "Thursday, June 1, 2023"
        );
    }

    #[test]
    fn test_time_ago_through_formatter() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        let formatter = Formatter::default();
        assert_eq!(
            formatter.time_ago_in("2023-06-01T09:00:00Z", now, &Utc),
            "3 hours ago"
        );
    }

    #[test]
    fn test_deterministic() {
        let formatter = Formatter::default();
        assert_eq!(formatter.currency(0.1 + 0.2), formatter.currency(0.1 + 0.2));
        assert_eq!(
            formatter.date_in("2023-06-01T12:00:00Z", &Utc),
            formatter.date_in("2023-06-01T12:00:00Z", &Utc)
        );
    }
}
