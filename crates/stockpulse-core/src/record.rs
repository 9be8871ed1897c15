//! Analysed social-media posts as delivered by the sentiment backend.
//!
//! Every field is optional. The `sentiment` field is either a bare score or
//! the per-method breakdown with a `consensus` entry:
//!
//! ```json
//! { "keyword": "AAPL",
//!   "created_at": "2023-06-01T12:00:00Z",
//!   "sentiment": { "consensus": { "label": "positive", "confidence": 0.67 } } }
//! ```
//!
//! Decoding is lenient per record: a field of the wrong type reads as
//! missing (a numeric `keyword` is kept as text), and array elements that
//! are not objects are skipped.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PulseResult;
use crate::sentiment::SentimentLabel;

/// One analysed post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Raw score or per-method breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentField>,

    /// Search keyword that surfaced the post.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyword: Option<String>,

    /// ISO-8601 creation time.
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    /// Post body.
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
}

/// The shapes a record's `sentiment` field takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentimentField {
    /// A bare score, nominally in [-1, 1].
    Score(f64),
    /// Per-method results with an optional consensus.
    Breakdown(SentimentBreakdown),
    /// Anything else; carried through but never counted.
    Other(serde_json::Value),
}

/// Per-method sentiment results. Only the consensus is modelled; other
/// method entries are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Majority label across methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusEntry>,
}

/// A consensus entry as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusEntry {
    /// Label text; expected to be `positive`, `negative` or `neutral`.
    pub label: String,
    /// Share of methods agreeing with the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a bare sentiment score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.sentiment = Some(SentimentField::Score(score));
        self
    }

    /// Sets a consensus label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.sentiment = Some(SentimentField::Breakdown(SentimentBreakdown {
            consensus: Some(ConsensusEntry {
                label: label.into(),
                confidence: None,
            }),
        }));
        self
    }

    /// Sets the keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Sets the post body.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the consensus label text, if present.
    #[must_use]
    pub fn consensus_text(&self) -> Option<&str> {
        match &self.sentiment {
            Some(SentimentField::Breakdown(SentimentBreakdown {
                consensus: Some(entry),
            })) => Some(entry.label.as_str()),
            _ => None,
        }
    }

    /// Returns the consensus label if it is one of the three known labels.
    #[must_use]
    pub fn consensus_label(&self) -> Option<SentimentLabel> {
        self.consensus_text().and_then(|text| text.parse().ok())
    }

    /// Returns the bare sentiment score, if the field holds one.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        match self.sentiment {
            Some(SentimentField::Score(score)) => Some(score),
            _ => None,
        }
    }

    /// Returns the keyword unless missing or empty.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        non_empty(self.keyword.as_deref())
    }

    /// Returns the creation time unless missing or empty.
    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        non_empty(self.created_at.as_deref())
    }

    /// Returns the post body unless missing or empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        non_empty(self.text.as_deref())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Decodes a JSON array of records.
///
/// Elements that are not objects are skipped with a warning; mistyped
/// fields read as missing.
///
/// # Errors
///
/// Returns `PulseError::ParseError` if the document is not a JSON array.
pub fn parse_records(json: &str) -> PulseResult<Vec<Record>> {
    let elements: Vec<Value> = serde_json::from_str(json)?;
    let total = elements.len();
    let records: Vec<Record> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| {
            if !element.is_object() {
                log::warn!("skipping record {index}: not an object");
                return None;
            }
            match Record::deserialize(element) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("skipping record {index}: {err}");
                    None
                }
            }
        })
        .collect();
    if records.len() < total {
        log::debug!("decoded {} of {} records", records.len(), total);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_breakdown() {
        let records = parse_records(
            r#"[{
                "keyword": "AAPL",
                "created_at": "2023-06-01T12:00:00Z",
                "sentiment": {
                    "vader": {"compound": 0.6, "label": "positive"},
                    "consensus": {"label": "positive", "confidence": 0.67}
                }
            }]"#,
        )
        .unwrap();
        let record = &records[0];
        assert_eq!(record.keyword(), Some("AAPL"));
        assert_eq!(record.consensus_label(), Some(SentimentLabel::Positive));
        assert_eq!(record.score(), None);
    }

    #[test]
    fn test_parse_score() {
        let records = parse_records(r#"[{"sentiment": 0.42}]"#).unwrap();
        assert_eq!(records[0].score(), Some(0.42));
        assert_eq!(records[0].consensus_label(), None);
    }

    #[test]
    fn test_parse_sparse_and_odd_shapes() {
        let records = parse_records(
            r#"[{}, {"sentiment": null}, {"sentiment": "great"}, {"sentiment": {}}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.consensus_label().is_none()));
        assert!(matches!(records[2].sentiment, Some(SentimentField::Other(_))));
    }

    #[test]
    fn test_unknown_label_is_kept_as_text() {
        let record = Record::new().with_label("bullish");
        assert_eq!(record.consensus_text(), Some("bullish"));
        assert_eq!(record.consensus_label(), None);
    }

    #[test]
    fn test_empty_strings_are_missing() {
        let record = Record::new().with_keyword("").with_created_at("").with_text("");
        assert_eq!(record.keyword(), None);
        assert_eq!(record.created_at(), None);
        assert_eq!(record.text(), None);
    }

    #[test]
    fn test_serialize_skips_missing() {
        let json = serde_json::to_string(&Record::new().with_keyword("TSLA")).unwrap();
        assert_eq!(json, r#"{"keyword":"TSLA"}"#);
    }

    #[test]
    fn test_mistyped_fields_read_as_missing() {
        let records = parse_records(
            r#"[{"keyword": 5, "created_at": 1685620800, "text": ["a"]},
                {"keyword": true, "created_at": null}]"#,
        )
        .unwrap();
        assert_eq!(records[0].keyword(), Some("5"));
        assert_eq!(records[0].created_at(), None);
        assert_eq!(records[0].text(), None);
        assert_eq!(records[1].keyword(), None);
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let records = parse_records(r#"[5, null, {"keyword": "AAPL"}, "x"]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].keyword(), Some("AAPL"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_records(r#"{"keyword": "AAPL"}"#).is_err());
    }
}
