//! Currency, percentage and grouped-number rendering.
//!
//! Fixed-point rendering follows the `toFixed` contract used by dashboard
//! front ends: the exact binary value of the `f64` is rounded to the
//! requested number of places, exact ties round away from zero, and
//! magnitudes of `1e21` or more fall back to exponent notation.
//!
//! Grouped rendering follows `Intl.NumberFormat` instead: the shortest
//! decimal form of the `f64` is rounded, so `1.005` shows as `1.01`.
//!
//! Every function clamps `decimals` to [`MAX_DECIMALS`].

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::config::{NumberLocale, MAX_DECIMALS};

/// Default currency symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Default fractional digits for currency amounts.
pub const DEFAULT_CURRENCY_DECIMALS: u32 = 2;

/// Default fractional digits for percentages.
pub const DEFAULT_PERCENTAGE_DECIMALS: u32 = 2;

/// Default fractional digits for grouped numbers.
pub const DEFAULT_NUMBER_DECIMALS: u32 = 0;

/// Largest scale `rust_decimal` can represent.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Magnitude from which fixed-point rendering switches to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Formats a number as a currency amount.
///
/// The symbol is prepended to the fixed-point rendering as-is, so negative
/// amounts read `$-1234.56`. No grouping separators are applied.
///
/// # Example
///
/// ```rust
/// use stockpulse_core::format::format_currency;
///
/// assert_eq!(format_currency(1234.56, "$", 2), "$1234.56");
/// assert_eq!(format_currency(-1234.56, "$", 2), "$-1234.56");
/// ```
#[must_use]
pub fn format_currency(value: f64, symbol: &str, decimals: u32) -> String {
    format!("{symbol}{}", to_fixed(value, decimals))
}

/// Formats a ratio (0.1 = 10%) as a percentage string.
///
/// ```rust
/// use stockpulse_core::format::format_percentage;
///
/// assert_eq!(format_percentage(0.1234, 1), "12.3%");
/// ```
#[must_use]
pub fn format_percentage(value: f64, decimals: u32) -> String {
    format!("{}%", to_fixed(value * 100.0, decimals))
}

/// Formats a number with `en-US` grouping and exactly `decimals` places.
#[must_use]
pub fn format_number(value: f64, decimals: u32) -> String {
    format_number_with(value, decimals, &NumberLocale::default())
}

/// Formats a number with the given locale's separators.
///
/// Unlike [`to_fixed`], the shortest decimal form of `value` is rounded
/// rather than its exact binary value, non-finite values render as `NaN`,
/// `∞` and `-∞`, and negative zero keeps its sign.
///
/// ```rust
/// use stockpulse_core::format::format_number;
///
/// assert_eq!(format_number(1.005, 2), "1.01");
/// assert_eq!(format_number(1e25, 0), "10,000,000,000,000,000,000,000,000");
/// ```
#[must_use]
pub fn format_number_with(value: f64, decimals: u32, locale: &NumberLocale) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let digits = shortest_digits(value.abs(), decimals);
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_digits(integer, locale.grouping_separator));
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Renders `value` with exactly `decimals` fractional digits.
///
/// ```rust
/// use stockpulse_core::format::to_fixed;
///
/// assert_eq!(to_fixed(1.005, 2), "1.00");
/// assert_eq!(to_fixed(1.125, 2), "1.13");
/// assert_eq!(to_fixed(f64::NAN, 2), "NaN");
/// ```
#[must_use]
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        return exponent_notation(value);
    }

    let digits = fixed_digits(value.abs(), decimals);
    // -0.0 compares equal to zero and renders unsigned.
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Unsigned fixed-point digits of a finite, non-negative value.
fn fixed_digits(magnitude: f64, decimals: u32) -> String {
    let places = decimals as usize;
    if decimals <= MAX_DECIMAL_SCALE {
        if let Some(exact) = Decimal::from_f64_retain(magnitude) {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            return format!("{rounded:.places$}");
        }
    }
    format!("{magnitude:.places$}")
}

/// Unsigned digits of a finite, non-negative value, rounded from its
/// shortest round-trip decimal form.
fn shortest_digits(magnitude: f64, decimals: u32) -> String {
    let places = decimals as usize;
    // `f64` Display never uses exponent notation.
    let shortest = magnitude.to_string();
    if decimals <= MAX_DECIMAL_SCALE {
        if let Ok(parsed) = Decimal::from_str(&shortest) {
            let rounded =
                parsed.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            return format!("{rounded:.places$}");
        }
    }

    // Beyond `Decimal` range or scale: pad the shortest digits when no
    // rounding is needed.
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if fraction.len() <= places {
        if places == 0 {
            return integer.to_string();
        }
        return format!("{integer}.{fraction:0<places$}");
    }
    fixed_digits(magnitude, decimals)
}

/// Shortest round-trip exponent form with an explicit `+` on the exponent.
fn exponent_notation(value: f64) -> String {
    let repr = format!("{value:e}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => repr,
    }
}

/// Inserts `separator` between every group of three integer digits.
fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
