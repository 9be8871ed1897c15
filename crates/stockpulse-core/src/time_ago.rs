//! Relative "time ago" labels.
//!
//! The reference instant is always passed in; only [`time_ago_from_now`]
//! reads the wall clock.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{format_instant, parse_timestamp_in, DateStyle, INVALID_DATE};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: i64 = 604_800;

/// Weeks from which the label falls back to a short calendar date.
const WEEKS_BEFORE_DATE: i64 = 4;

/// Bucket for an elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Elapsed {
    /// Under a minute, or in the future.
    JustNow,
    /// Whole minutes, 1 to 59.
    Minutes(i64),
    /// Whole hours, 1 to 23.
    Hours(i64),
    /// Whole days, 1 to 6.
    Days(i64),
    /// Whole weeks, 1 to 3.
    Weeks(i64),
    /// Four weeks or more.
    Older,
}

impl Elapsed {
    /// Buckets a count of whole elapsed seconds.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Self {
        if seconds < SECONDS_PER_MINUTE {
            Elapsed::JustNow
        } else if seconds < SECONDS_PER_HOUR {
            Elapsed::Minutes(seconds / SECONDS_PER_MINUTE)
        } else if seconds < SECONDS_PER_DAY {
            Elapsed::Hours(seconds / SECONDS_PER_HOUR)
        } else if seconds < SECONDS_PER_WEEK {
            Elapsed::Days(seconds / SECONDS_PER_DAY)
        } else if seconds / SECONDS_PER_WEEK < WEEKS_BEFORE_DATE {
            Elapsed::Weeks(seconds / SECONDS_PER_WEEK)
        } else {
            Elapsed::Older
        }
    }

    /// Buckets the whole seconds between `then` and `now`.
    #[must_use]
    pub fn between(then: &DateTime<Utc>, now: &DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis() - then.timestamp_millis();
        Self::from_seconds(millis.div_euclid(1000))
    }
}

impl fmt::Display for Elapsed {
    /// Writes the label; [`Elapsed::Older`] has no relative form and writes
    /// nothing, callers substitute a date.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elapsed::JustNow => f.write_str("just now"),
            Elapsed::Minutes(n) => write!(f, "{} ago", plural(*n, "minute")),
            Elapsed::Hours(n) => write!(f, "{} ago", plural(*n, "hour")),
            Elapsed::Days(n) => write!(f, "{} ago", plural(*n, "day")),
            Elapsed::Weeks(n) => write!(f, "{} ago", plural(*n, "week")),
            Elapsed::Older => Ok(()),
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Formats how long ago `input` was, relative to `now`, in the local zone.
#[must_use]
pub fn format_time_ago(input: &str, now: DateTime<Utc>) -> String {
    format_time_ago_in(input, now, &chrono::Local)
}

/// Formats how long ago `input` was, relative to `now`.
///
/// Four weeks or more falls back to the short date rendered in `tz`;
/// unparseable input renders `Invalid Date`.
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use stockpulse_core::time_ago::format_time_ago_in;
///
/// let now = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
/// let then = (now - Duration::minutes(5)).to_rfc3339();
/// assert_eq!(format_time_ago_in(&then, now, &Utc), "5 minutes ago");
/// ```
#[must_use]
pub fn format_time_ago_in<Tz>(input: &str, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Ok(then) = parse_timestamp_in(input, tz) else {
        return INVALID_DATE.to_string();
    };

    match Elapsed::between(&then, &now) {
        Elapsed::Older => format_instant(&then, DateStyle::Short, tz),
        bucket => bucket.to_string(),
    }
}

/// Formats how long ago `input` was, relative to the current wall clock.
#[must_use]
pub fn time_ago_from_now(input: &str) -> String {
    format_time_ago(input, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        format_time_ago_in(&(now() - delta).to_rfc3339(), now(), &Utc)
    }

    #[test]
    fn test_just_now() {
        assert_eq!(ago(Duration::seconds(30)), "just now");
        assert_eq!(ago(Duration::seconds(59)), "just now");
        assert_eq!(ago(Duration::zero()), "just now");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(ago(Duration::hours(-3)), "just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::seconds(3_599)), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago(Duration::hours(1)), "1 hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(Duration::days(1)), "1 day ago");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
    }

    #[test]
    fn test_weeks() {
        assert_eq!(ago(Duration::weeks(1)), "1 week ago");
        assert_eq!(ago(Duration::weeks(2)), "2 weeks ago");
        assert_eq!(ago(Duration::days(27)), "3 weeks ago");
    }

    #[test]
    fn test_falls_back_to_short_date() {
        assert_eq!(ago(Duration::days(28)), "5/4/2023");
        assert_eq!(ago(Duration::days(30)), "5/2/2023");
    }

    #[test]
    fn test_sub_second_precision_floors() {
        let then = "2023-06-01T11:59:00.500Z";
        assert_eq!(format_time_ago_in(then, now(), &Utc), "just now");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_time_ago_in("soon", now(), &Utc), "Invalid Date");
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(Elapsed::from_seconds(59), Elapsed::JustNow);
        assert_eq!(Elapsed::from_seconds(60), Elapsed::Minutes(1));
        assert_eq!(Elapsed::from_seconds(3_600), Elapsed::Hours(1));
        assert_eq!(Elapsed::from_seconds(86_400), Elapsed::Days(1));
        assert_eq!(Elapsed::from_seconds(604_800), Elapsed::Weeks(1));
        assert_eq!(Elapsed::from_seconds(4 * 604_800 - 1), Elapsed::Weeks(3));
        assert_eq!(Elapsed::from_seconds(4 * 604_800), Elapsed::Older);
        assert_eq!(Elapsed::from_seconds(-10), Elapsed::JustNow);
    }
}
