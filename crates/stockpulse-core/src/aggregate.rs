//! Chart-ready series built from analysed records.
//!
//! All aggregations are total over heterogeneous input: a record lacking
//! the field an aggregation needs is skipped, never an error. For every
//! series, the sum across buckets equals the number of qualifying records.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::format::parse_timestamp_in;
use crate::record::Record;
use crate::sentiment::SentimentLabel;

/// Default number of keywords kept by [`top_keywords`].
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Counts per consensus label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    /// Records labelled `positive`.
    pub positive: u64,
    /// Records labelled `negative`.
    pub negative: u64,
    /// Records labelled `neutral`.
    pub neutral: u64,
}

impl SentimentCounts {
    /// Adds one vote for `label`.
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Returns the count for `label`.
    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> u64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Returns the count across all labels.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    /// Returns the fraction of records carrying `label`, or `None` when empty.
    #[must_use]
    pub fn share(&self, label: SentimentLabel) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.get(label) as f64 / total as f64),
        }
    }

    /// Returns `(label, count)` pairs in chart order.
    #[must_use]
    pub fn entries(&self) -> [(SentimentLabel, u64); 3] {
        SentimentLabel::ALL.map(|label| (label, self.get(label)))
    }
}

/// Label counts for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySentiment {
    /// UTC calendar date.
    pub date: NaiveDate,
    /// Counts for the day.
    #[serde(flatten)]
    pub counts: SentimentCounts,
}

impl DailySentiment {
    /// Returns the `YYYY-MM-DD` key.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Occurrences of one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// The keyword.
    pub keyword: String,
    /// Number of records carrying it.
    pub count: u64,
}

/// Counts consensus labels across records.
///
/// Records without a consensus, or with a label outside the three known
/// ones, are skipped.
#[must_use]
pub fn sentiment_distribution(records: &[Record]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for label in records.iter().filter_map(Record::consensus_label) {
        counts.add(label);
    }
    log::debug!(
        "sentiment distribution: {} of {} records labelled",
        counts.total(),
        records.len()
    );
    counts
}

/// Counts consensus labels per UTC calendar day, oldest day first.
///
/// A record needs both a parseable `created_at` and a known label; otherwise
/// it is skipped and contributes no day. Offset-less timestamps are read as
/// UTC.
#[must_use]
pub fn sentiment_over_time(records: &[Record]) -> Vec<DailySentiment> {
    let mut days: BTreeMap<NaiveDate, SentimentCounts> = BTreeMap::new();
    for record in records {
        let Some(label) = record.consensus_label() else {
            continue;
        };
        let Some(date) = record_date(record) else {
            continue;
        };
        days.entry(date).or_default().add(label);
    }

    days.into_iter()
        .map(|(date, counts)| DailySentiment { date, counts })
        .collect()
}

/// Counts keywords, most frequent first, keeping at most `limit`.
///
/// Equal counts keep the order in which keywords were first seen.
#[must_use]
pub fn keyword_frequency(records: &[Record], limit: usize) -> Vec<KeywordCount> {
    let mut ranked: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for keyword in records.iter().filter_map(Record::keyword) {
        match index.get(keyword) {
            Some(&slot) => ranked[slot].count += 1,
            None => {
                index.insert(keyword, ranked.len());
                ranked.push(KeywordCount {
                    keyword: keyword.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort preserves first-seen order among ties.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// The ten most frequent keywords.
#[must_use]
pub fn top_keywords(records: &[Record]) -> Vec<KeywordCount> {
    keyword_frequency(records, DEFAULT_TOP_KEYWORDS)
}

/// Groups records by UTC calendar day of `created_at`, oldest day first.
///
/// Days are taken in UTC, not in the timestamp's own offset, so the keys
/// line up with [`sentiment_over_time`]: `2023-06-01T23:30:00-05:00`
/// falls on 2023-06-02. Records without a parseable timestamp are skipped.
#[must_use]
pub fn group_by_date(records: &[Record]) -> BTreeMap<NaiveDate, Vec<&Record>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Record>> = BTreeMap::new();
    for record in records {
        if let Some(date) = record_date(record) {
            groups.entry(date).or_default().push(record);
        }
    }
    groups
}

fn record_date(record: &Record) -> Option<NaiveDate> {
    let created_at = record.created_at()?;
    match parse_timestamp_in(created_at, &Utc) {
        Ok(instant) => Some(instant.date_naive()),
        Err(err) => {
            log::warn!("skipping record: {err}");
            None
        }
    }
}

/// The three dashboard series computed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSeries {
    /// Label counts across all records.
    pub distribution: SentimentCounts,
    /// Label counts per day.
    pub timeline: Vec<DailySentiment>,
    /// Most frequent keywords.
    pub keywords: Vec<KeywordCount>,
}

impl DashboardSeries {
    /// Computes every series, keeping at most `keyword_limit` keywords.
    #[must_use]
    pub fn from_records(records: &[Record], keyword_limit: usize) -> Self {
        Self {
            distribution: sentiment_distribution(records),
            timeline: sentiment_over_time(records),
            keywords: keyword_frequency(records, keyword_limit),
        }
    }
}
