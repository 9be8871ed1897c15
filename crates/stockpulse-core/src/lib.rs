//! # Stockpulse Core
//!
//! Formatting and aggregation for the Stockpulse stock-sentiment dashboard.
//!
//! This crate is the pure layer between raw backend data and the charts and
//! tables a dashboard renders:
//!
//! - **Formatters**: currency, percentage, grouped numbers, calendar dates
//! - **Relative time**: "5 minutes ago" labels against an explicit `now`
//! - **Sentiment**: five-level score descriptions, consensus labels and voting
//! - **Aggregators**: label distribution, label counts per day, keyword ranking
//! - **Text**: post clean-up and keyword filtering
//!
//! Every function is deterministic and side-effect free apart from `log`
//! records; nothing here reads the clock except [`time_ago::time_ago_from_now`].
//!
//! ## Example
//!
//! ```rust
//! use stockpulse_core::prelude::*;
//!
//! assert_eq!(format_currency(-1234.56, "$", 2), "$-1234.56");
//! assert_eq!(format_sentiment(0.4), "Positive");
//!
//! let records = vec![
//!     Record::new().with_label("positive").with_keyword("AAPL"),
//!     Record::new().with_label("negative").with_keyword("AAPL"),
//!     Record::new().with_keyword("TSLA"),
//! ];
//! assert_eq!(sentiment_distribution(&records).total(), 2);
//! assert_eq!(top_keywords(&records)[0].keyword, "AAPL");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unnecessary_map_or)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod sentiment;
pub mod text;
pub mod time_ago;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{
        group_by_date, keyword_frequency, sentiment_distribution, sentiment_over_time,
        top_keywords, DailySentiment, DashboardSeries, KeywordCount, SentimentCounts,
    };
    pub use crate::config::{FormatConfig, NumberLocale};
    pub use crate::error::{PulseError, PulseResult};
    pub use crate::format::{
        format_currency, format_date, format_date_in, format_number, format_percentage,
        DateStyle, Formatter,
    };
    pub use crate::record::{parse_records, Record};
    pub use crate::sentiment::{format_sentiment, Consensus, SentimentLabel, SentimentLevel};
    pub use crate::time_ago::{format_time_ago, format_time_ago_in};
}

// Re-export commonly used types at crate root
pub use error::{PulseError, PulseResult};
pub use format::Formatter;
pub use record::Record;
