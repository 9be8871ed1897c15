//! Formatting configuration.
//!
//! Every field has a serde default, so a partial TOML document (or an empty
//! one) yields a usable configuration.
//!
//! ```rust
//! use stockpulse_core::config::FormatConfig;
//!
//! let config = FormatConfig::from_toml_str("currency_symbol = \"€\"").unwrap();
//! assert_eq!(config.currency_symbol, "€");
//! assert_eq!(config.currency_decimals, 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::DEFAULT_TOP_KEYWORDS;
use crate::error::{PulseError, PulseResult};
use crate::format::{
    DateStyle, DEFAULT_CURRENCY_DECIMALS, DEFAULT_CURRENCY_SYMBOL, DEFAULT_NUMBER_DECIMALS,
    DEFAULT_PERCENTAGE_DECIMALS,
};

/// Largest number of fractional digits a formatter accepts.
pub const MAX_DECIMALS: u32 = 100;

/// Separators used by the grouped number formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    /// Thousands separator.
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
    /// Decimal point.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_grouping_separator() -> char {
    ','
}

fn default_decimal_separator() -> char {
    '.'
}

impl NumberLocale {
    /// Creates a locale from its two separators.
    #[must_use]
    pub fn new(grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            grouping_separator,
            decimal_separator,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::new(default_grouping_separator(), default_decimal_separator())
    }
}

/// Defaults applied by [`crate::format::Formatter`] and the chart builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Symbol prepended to currency amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Fractional digits for currency amounts.
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u32,

    /// Fractional digits for percentages.
    #[serde(default = "default_percentage_decimals")]
    pub percentage_decimals: u32,

    /// Fractional digits for grouped numbers.
    #[serde(default = "default_number_decimals")]
    pub number_decimals: u32,

    /// Calendar date style.
    #[serde(default)]
    pub date_style: DateStyle,

    /// Number separators.
    #[serde(default)]
    pub locale: NumberLocale,

    /// How many keywords the frequency series keeps.
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_currency_decimals() -> u32 {
    DEFAULT_CURRENCY_DECIMALS
}

fn default_percentage_decimals() -> u32 {
    DEFAULT_PERCENTAGE_DECIMALS
}

fn default_number_decimals() -> u32 {
    DEFAULT_NUMBER_DECIMALS
}

fn default_top_keywords() -> usize {
    DEFAULT_TOP_KEYWORDS
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
            percentage_decimals: default_percentage_decimals(),
            number_decimals: default_number_decimals(),
            date_style: DateStyle::default(),
            locale: NumberLocale::default(),
            top_keywords: default_top_keywords(),
        }
    }
}

impl FormatConfig {
    /// Sets the currency symbol.
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Sets the currency decimals.
    #[must_use]
    pub fn with_currency_decimals(mut self, decimals: u32) -> Self {
        self.currency_decimals = decimals;
        self
    }

    /// Sets the percentage decimals.
    #[must_use]
    pub fn with_percentage_decimals(mut self, decimals: u32) -> Self {
        self.percentage_decimals = decimals;
        self
    }

    /// Sets the grouped-number decimals.
    #[must_use]
    pub fn with_number_decimals(mut self, decimals: u32) -> Self {
        self.number_decimals = decimals;
        self
    }

    /// Sets the date style.
    #[must_use]
    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = style;
        self
    }

    /// Sets the number locale.
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets how many keywords the frequency series keeps.
    #[must_use]
    pub fn with_top_keywords(mut self, limit: usize) -> Self {
        self.top_keywords = limit;
        self
    }

    /// Parses a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::ParseError` for malformed TOML and
    /// `PulseError::ConfigError` if validation fails.
    pub fn from_toml_str(s: &str) -> PulseResult<Self> {
        let config: FormatConfig = toml::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::ParseError` if serialization fails.
    pub fn to_toml_string(&self) -> PulseResult<String> {
        toml::to_string_pretty(self).map_err(|e| PulseError::parse_error(e.to_string()))
    }

    /// Returns every problem with this configuration; empty when valid.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("currency_decimals", self.currency_decimals),
            ("percentage_decimals", self.percentage_decimals),
            ("number_decimals", self.number_decimals),
        ] {
            if value > MAX_DECIMALS {
                issues.push(ConfigIssue::new(
                    field,
                    format!("must be at most {MAX_DECIMALS}, got {value}"),
                ));
            }
        }

        if self.top_keywords == 0 {
            issues.push(ConfigIssue::new("top_keywords", "must be at least 1"));
        }

        if self.locale.grouping_separator == self.locale.decimal_separator {
            issues.push(ConfigIssue::new(
                "locale",
                "grouping and decimal separators must differ",
            ));
        }

        if self.locale.decimal_separator.is_ascii_digit()
            || self.locale.grouping_separator.is_ascii_digit()
        {
            issues.push(ConfigIssue::new("locale", "separators cannot be digits"));
        }

        issues
    }

    /// Returns true if the configuration has no issues.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and folds any issues into a single error.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::ConfigError` listing every issue.
    pub fn validate_or_error(&self) -> PulseResult<()> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let reason = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(PulseError::config_error(reason))
    }
}

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Field that failed validation.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ConfigIssue {
    /// Creates a new issue.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
