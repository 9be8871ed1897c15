//! All three dashboard charts built from one record set.

use serde::{Deserialize, Serialize};
use stockpulse_core::aggregate::{DashboardSeries, DEFAULT_TOP_KEYWORDS};
use stockpulse_core::record::{parse_records, Record};

use crate::builders::{keyword_bar, sentiment_pie, sentiment_timeline};
use crate::error::{ChartError, ChartResult};
use crate::figure::Figure;

/// The dashboard's distribution, timeline and keyword charts.
///
/// # Example
///
/// ```rust
/// use stockpulse_charts::Dashboard;
/// use stockpulse_core::Record;
///
/// let records = vec![
///     Record::new().with_label("positive").with_keyword("AAPL"),
///     Record::new().with_label("neutral").with_keyword("AAPL"),
/// ];
/// let dashboard = Dashboard::from_records(&records, 10);
/// assert_eq!(dashboard.timeline.data.len(), 3);
/// assert!(dashboard.to_json().unwrap().contains("Top Keywords"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Label distribution donut.
    pub distribution: Figure,
    /// Label counts per day.
    pub timeline: Figure,
    /// Most frequent keywords.
    pub keywords: Figure,
}

impl Dashboard {
    /// Builds the charts from precomputed series.
    #[must_use]
    pub fn from_series(series: &DashboardSeries) -> Self {
        Self {
            distribution: sentiment_pie(&series.distribution),
            timeline: sentiment_timeline(&series.timeline),
            keywords: keyword_bar(&series.keywords),
        }
    }

    /// Aggregates `records` and builds the charts, keeping at most
    /// `keyword_limit` keywords.
    #[must_use]
    pub fn from_records(records: &[Record], keyword_limit: usize) -> Self {
        let series = DashboardSeries::from_records(records, keyword_limit);
        log::debug!(
            "dashboard from {} records: {} labelled, {} days, {} keywords",
            records.len(),
            series.distribution.total(),
            series.timeline.len(),
            series.keywords.len()
        );
        Self::from_series(&series)
    }

    /// Decodes a JSON array of records and builds the charts with the
    /// default keyword limit.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let records = parse_records(json)?;
        Ok(Self::from_records(&records, DEFAULT_TOP_KEYWORDS))
    }

    /// Returns `(name, figure)` pairs in display order.
    #[must_use]
    pub fn figures(&self) -> [(&'static str, &Figure); 3] {
        [
            ("distribution", &self.distribution),
            ("timeline", &self.timeline),
            ("keywords", &self.keywords),
        ]
    }

    /// Serializes all three figures to indented JSON.
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Trace;

    #[test]
    fn test_from_json() {
        let dashboard = Dashboard::from_json(
            r#"[
                {"keyword": "AAPL", "created_at": "2023-06-01T10:00:00Z",
                 "sentiment": {"consensus": {"label": "positive"}}},
                {"keyword": "TSLA", "created_at": "2023-06-02T10:00:00Z",
                 "sentiment": {"consensus": {"label": "negative"}}}
            ]"#,
        )
        .unwrap();

        let Trace::Pie(pie) = &dashboard.distribution.data[0] else {
            panic!("expected pie trace");
        };
        assert_eq!(pie.values, vec![1, 1, 0]);
        let Trace::Scatter(positive) = &dashboard.timeline.data[0] else {
            panic!("expected scatter trace");
        };
        assert_eq!(positive.x.len(), 2);
        let Trace::Bar(bar) = &dashboard.keywords.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(bar.x, vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_from_json_rejects_bad_document() {
        assert!(matches!(
            Dashboard::from_json("not json"),
            Err(ChartError::Records(_))
        ));
    }

    #[test]
    fn test_keyword_limit() {
        let records: Vec<Record> = ["A", "B", "C"]
            .iter()
            .map(|k| Record::new().with_keyword(*k))
            .collect();
        let dashboard = Dashboard::from_records(&records, 2);
        let Trace::Bar(bar) = &dashboard.keywords.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(bar.x, vec!["A", "B"]);
    }

    #[test]
    fn test_figures_order() {
        let dashboard = Dashboard::from_records(&[], 10);
        let names: Vec<&str> = dashboard.figures().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["distribution", "timeline", "keywords"]);
    }
}
