//! ISO-8601 timestamp parsing and calendar-date rendering.

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PulseError, PulseResult};

/// Rendered in place of a date when the input cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Date-time layouts carrying an explicit UTC offset.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Date-time layouts without an offset, interpreted in the caller's zone.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Calendar date rendering styles (`en-US` layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Numeric month/day/year: `6/1/2023`.
    Short,
    /// Abbreviated month, day, year: `Jun 1, 2023`.
    #[default]
    Medium,
    /// Weekday, full month, day, year: `Thursday, June 1, 2023`.
    Long,
}

impl DateStyle {
    /// Returns the `strftime` pattern for this style.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Short => "%-m/%-d/%Y",
            DateStyle::Medium => "%b %-d, %Y",
            DateStyle::Long => "%A, %B %-d, %Y",
        }
    }

    /// Returns the lowercase style name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DateStyle::Short => "short",
            DateStyle::Medium => "medium",
            DateStyle::Long => "long",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateStyle {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(DateStyle::Short),
            "medium" => Ok(DateStyle::Medium),
            "long" => Ok(DateStyle::Long),
            _ => Err(PulseError::UnknownDateStyle {
                name: s.to_string(),
            }),
        }
    }
}

/// Parses an ISO-8601 timestamp, reading offset-less times in the local zone.
///
/// # Errors
///
/// Returns `PulseError::InvalidTimestamp` if the input matches no supported layout.
pub fn parse_timestamp(input: &str) -> PulseResult<DateTime<Utc>> {
    parse_timestamp_in(input, &chrono::Local)
}

/// Parses an ISO-8601 timestamp into an instant.
///
/// Accepted forms:
/// - date-time with `Z` or `±HH:MM` offset (seconds and fraction optional)
/// - date-time without offset, read as wall-clock time in `tz`
/// - date only (`YYYY-MM-DD`), read as UTC midnight
///
/// ```rust
/// use chrono::Utc;
/// use stockpulse_core::format::parse_timestamp_in;
///
/// let instant = parse_timestamp_in("2023-06-01T12:00:00Z", &Utc).unwrap();
/// assert_eq!(instant.timestamp(), 1_685_620_800);
/// ```
///
/// # Errors
///
/// Returns `PulseError::InvalidTimestamp` if the input matches no supported layout.
pub fn parse_timestamp_in<Tz: TimeZone>(input: &str, tz: &Tz) -> PulseResult<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let normalized = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => s.to_string(),
    };
    for layout in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(&normalized, layout) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for layout in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return resolve_local(naive, tz).ok_or_else(|| PulseError::invalid_timestamp(input));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(PulseError::invalid_timestamp(input))
}

/// Maps a wall-clock time in `tz` to an instant.
///
/// Ambiguous times take the earlier instant; times skipped by a forward
/// transition are moved past the gap.
fn resolve_local<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Formats an ISO-8601 timestamp as a calendar date in the local zone.
///
/// Unparseable input renders [`INVALID_DATE`].
#[must_use]
pub fn format_date(input: &str, style: DateStyle) -> String {
    format_date_in(input, style, &chrono::Local)
}

/// Formats an ISO-8601 timestamp as a calendar date in `tz`.
///
/// ```rust
/// use chrono::Utc;
/// use stockpulse_core::format::{format_date_in, DateStyle};
///
/// assert_eq!(format_date_in("2023-06-01T12:00:00Z", DateStyle::Medium, &Utc), "Jun 1, 2023");
/// assert_eq!(format_date_in("garbage", DateStyle::Medium, &Utc), "Invalid Date");
/// ```
#[must_use]
pub fn format_date_in<Tz>(input: &str, style: DateStyle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    try_format_date_in(input, style, tz).unwrap_or_else(|_| INVALID_DATE.to_string())
}

/// Formats an ISO-8601 timestamp as a calendar date in the local zone.
///
/// # Errors
///
/// Returns `PulseError::InvalidTimestamp` if the input cannot be parsed.
pub fn try_format_date(input: &str, style: DateStyle) -> PulseResult<String> {
    try_format_date_in(input, style, &chrono::Local)
}

/// Formats an ISO-8601 timestamp as a calendar date in `tz`.
///
/// # Errors
///
/// Returns `PulseError::InvalidTimestamp` if the input cannot be parsed.
pub fn try_format_date_in<Tz>(input: &str, style: DateStyle, tz: &Tz) -> PulseResult<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let instant = parse_timestamp_in(input, tz)?;
    Ok(format_instant(&instant, style, tz))
}

/// Formats an already-parsed instant as a calendar date in `tz`.
#[must_use]
pub fn format_instant<Tz>(instant: &DateTime<Utc>, style: DateStyle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(style.pattern()).to_string()
}
