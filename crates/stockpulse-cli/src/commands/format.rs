//! Format command implementation.
//!
//! Renders a single value the way the dashboard displays it.

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use tabled::Tabled;

use stockpulse_core::config::FormatConfig;
use stockpulse_core::format::{
    format_currency, format_number_with, format_percentage, try_format_date_in, DateStyle,
};
use stockpulse_core::sentiment::SentimentLevel;
use stockpulse_core::time_ago::format_time_ago_in;

use crate::cli::OutputFormat;
use crate::commands::{parse_instant, validate_decimals};
use crate::error::CliError;
use crate::output::{print_csv, print_json, print_table};

/// Arguments for the format command.
#[derive(Args, Debug)]
pub struct FormatArgs {
    #[command(subcommand)]
    pub command: FormatCommand,
}

/// Format subcommands.
#[derive(Subcommand, Debug)]
pub enum FormatCommand {
    /// Currency amount, e.g. $1234.56
    Currency {
        /// Amount
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Currency symbol (default from config, else "$")
        #[arg(short, long)]
        symbol: Option<String>,

        /// Fractional digits (default from config, else 2)
        #[arg(short, long)]
        decimals: Option<u32>,
    },

    /// Ratio as a percentage, e.g. 0.1234 -> 12.34%
    Percent {
        /// Ratio (0.1 = 10%)
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Fractional digits (default from config, else 2)
        #[arg(short, long)]
        decimals: Option<u32>,
    },

    /// Number with thousands separators, e.g. 1,234,567
    Number {
        /// Value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Fractional digits (default from config, else 0)
        #[arg(short, long)]
        decimals: Option<u32>,
    },

    /// ISO-8601 timestamp as a calendar date
    Date {
        /// Timestamp, e.g. 2023-06-01T12:00:00Z
        timestamp: String,

        /// Date style: short, medium or long (default from config, else medium)
        #[arg(short, long)]
        style: Option<DateStyle>,

        /// Render in UTC instead of the local time zone
        #[arg(long)]
        utc: bool,
    },

    /// Sentiment score as a five-level description
    Sentiment {
        /// Score, nominally in [-1, 1]
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// How long ago a timestamp was, e.g. "5 minutes ago"
    Ago {
        /// Timestamp, e.g. 2023-06-01T12:00:00Z
        timestamp: String,

        /// Reference instant (default: the current time)
        #[arg(short, long)]
        now: Option<String>,

        /// Render fallback dates in UTC instead of the local time zone
        #[arg(long)]
        utc: bool,
    },
}

/// One formatted value.
#[derive(Debug, Clone, Serialize, Tabled)]
struct Formatted {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Output")]
    output: String,
}

/// Execute the format command.
pub fn execute(args: FormatArgs, config: &FormatConfig, format: OutputFormat) -> Result<()> {
    let formatted = match args.command {
        FormatCommand::Currency {
            value,
            symbol,
            decimals,
        } => {
            let symbol = symbol.unwrap_or_else(|| config.currency_symbol.clone());
            let decimals = validate_decimals(decimals.unwrap_or(config.currency_decimals))?;
            Formatted {
                kind: "currency",
                input: value.to_string(),
                output: format_currency(value, &symbol, decimals),
            }
        }
        FormatCommand::Percent { value, decimals } => {
            let decimals = validate_decimals(decimals.unwrap_or(config.percentage_decimals))?;
            Formatted {
                kind: "percent",
                input: value.to_string(),
                output: format_percentage(value, decimals),
            }
        }
        FormatCommand::Number { value, decimals } => {
            let decimals = validate_decimals(decimals.unwrap_or(config.number_decimals))?;
            Formatted {
                kind: "number",
                input: value.to_string(),
                output: format_number_with(value, decimals, &config.locale),
            }
        }
        FormatCommand::Date {
            timestamp,
            style,
            utc,
        } => {
            let style = style.unwrap_or(config.date_style);
            let output = if utc {
                render_date(&timestamp, style, &Utc)?
            } else {
                render_date(&timestamp, style, &Local)?
            };
            Formatted {
                kind: "date",
                input: timestamp,
                output,
            }
        }
        FormatCommand::Sentiment { score } => Formatted {
            kind: "sentiment",
            input: score.to_string(),
            output: SentimentLevel::from_score(score).label().to_string(),
        },
        FormatCommand::Ago {
            timestamp,
            now,
            utc,
        } => {
            let now = match now {
                Some(now) => parse_instant(&now)?,
                None => Utc::now(),
            };
            let output = if utc {
                render_ago(&timestamp, now, &Utc)?
            } else {
                render_ago(&timestamp, now, &Local)?
            };
            Formatted {
                kind: "ago",
                input: timestamp,
                output,
            }
        }
    };

    tracing::debug!(kind = formatted.kind, input = %formatted.input, "formatted value");

    match format {
        OutputFormat::Table => print_table(std::slice::from_ref(&formatted))?,
        OutputFormat::Json => print_json(&formatted)?,
        OutputFormat::Csv => print_csv(std::slice::from_ref(&formatted))?,
        OutputFormat::Minimal => println!("{}", formatted.output),
    }

    Ok(())
}

fn render_date<Tz>(timestamp: &str, style: DateStyle, tz: &Tz) -> Result<String, CliError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    try_format_date_in(timestamp, style, tz)
        .map_err(|_| CliError::InvalidTimestamp(timestamp.to_string()))
}

fn render_ago<Tz>(timestamp: &str, now: DateTime<Utc>, tz: &Tz) -> Result<String, CliError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Unparseable input is an error here, not an "Invalid Date" label.
    parse_instant(timestamp)?;
    Ok(format_time_ago_in(timestamp, now, tz))
}
