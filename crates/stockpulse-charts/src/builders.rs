//! Figure builders for the three dashboard charts.

use stockpulse_core::aggregate::{DailySentiment, KeywordCount, SentimentCounts};
use stockpulse_core::sentiment::SentimentLabel;

use crate::figure::{BarTrace, Figure, Layout, Marker, PieTrace, ScatterTrace};

/// Height of every dashboard chart, in pixels.
pub const CHART_HEIGHT: u32 = 400;

/// Bar color for keyword counts.
pub const KEYWORD_COLOR: &str = "#0d6efd";

const PIE_HOLE: f64 = 0.4;
const PIE_TEXTINFO: &str = "label+percent";
const TIMELINE_MODE: &str = "lines+markers";

/// Series color for a consensus label.
#[must_use]
pub fn series_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "#28a745",
        SentimentLabel::Negative => "#dc3545",
        SentimentLabel::Neutral => "#6c757d",
    }
}

/// Donut chart of the label distribution.
///
/// Slices are always positive, negative, neutral, including empty ones.
#[must_use]
pub fn sentiment_pie(counts: &SentimentCounts) -> Figure {
    let entries = counts.entries();
    let trace = PieTrace {
        values: entries.iter().map(|(_, count)| *count).collect(),
        labels: entries
            .iter()
            .map(|(label, _)| label.display_name().to_string())
            .collect(),
        marker: Marker::colors(entries.iter().map(|(label, _)| series_color(*label))),
        textinfo: PIE_TEXTINFO.to_string(),
        hole: PIE_HOLE,
    };

    Figure::new(Layout::new("Sentiment Distribution", CHART_HEIGHT).with_legend(true))
        .with_trace(trace)
}

/// One line per label across the days of `timeline`.
#[must_use]
pub fn sentiment_timeline(timeline: &[DailySentiment]) -> Figure {
    let dates: Vec<String> = timeline.iter().map(DailySentiment::date_key).collect();

    SentimentLabel::ALL.iter().fold(
        Figure::new(Layout::new("Sentiment Over Time", CHART_HEIGHT).with_axes("Date", "Count")),
        |figure, &label| {
            figure.with_trace(ScatterTrace {
                x: dates.clone(),
                y: timeline.iter().map(|day| day.counts.get(label)).collect(),
                name: label.display_name().to_string(),
                mode: TIMELINE_MODE.to_string(),
                marker: Marker::color(series_color(label)),
            })
        },
    )
}

/// Bars for ranked keywords, in ranking order.
#[must_use]
pub fn keyword_bar(keywords: &[KeywordCount]) -> Figure {
    let trace = BarTrace {
        x: keywords.iter().map(|k| k.keyword.clone()).collect(),
        y: keywords.iter().map(|k| k.count).collect(),
        marker: Marker::color(KEYWORD_COLOR),
    };

    Figure::new(Layout::new("Top Keywords", CHART_HEIGHT).with_axes("Keyword", "Count"))
        .with_trace(trace)
}
