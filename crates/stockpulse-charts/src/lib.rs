//! # Stockpulse Charts
//!
//! Plotly figure specs for the Stockpulse dashboard.
//!
//! The builders turn aggregator output from `stockpulse-core` into
//! serializable `(data, layout)` pairs. Nothing here draws or touches the
//! DOM; a front end hands the JSON to `Plotly.newPlot` as-is.
//!
//! - [`sentiment_pie`]: label distribution donut
//! - [`sentiment_timeline`]: one line per label across days
//! - [`keyword_bar`]: ranked keyword counts
//! - [`Dashboard`]: all three at once
//!
//! ## Example
//!
//! ```rust
//! use stockpulse_charts::{sentiment_pie, Trace};
//! use stockpulse_core::aggregate::SentimentCounts;
//!
//! let counts = SentimentCounts { positive: 3, negative: 1, neutral: 1 };
//! let figure = sentiment_pie(&counts);
//! assert!(matches!(figure.data[0], Trace::Pie(_)));
//! assert_eq!(figure.layout.title, "Sentiment Distribution");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod builders;
pub mod dashboard;
pub mod error;
pub mod figure;

pub use builders::{keyword_bar, sentiment_pie, sentiment_timeline, series_color, CHART_HEIGHT};
pub use dashboard::Dashboard;
pub use error::{ChartError, ChartResult};
pub use figure::{Axis, BarTrace, Figure, Layout, Marker, PieTrace, ScatterTrace, Trace};
