//! Property-based tests for formatter and aggregator invariants.
//!
//! - Every score maps to exactly one sentiment level, monotonically
//! - Formatters are deterministic
//! - Aggregated totals equal the number of qualifying records

use proptest::prelude::*;
use stockpulse_core::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn label_text() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("positive")),
        Just(Some("negative")),
        Just(Some("neutral")),
        Just(Some("mixed")),
    ]
}

fn created_at() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("garbage".to_string())),
        (1u32..=28, 0u32..24).prop_map(|(day, hour)| {
            Some(format!("2023-06-{day:02}T{hour:02}:15:00Z"))
        }),
    ]
}

fn keyword() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[A-E]{1,2}".prop_map(Some),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    (label_text(), created_at(), keyword()).prop_map(|(label, created_at, keyword)| {
        let mut record = Record::new();
        if let Some(label) = label {
            record = record.with_label(label);
        }
        record.created_at = created_at;
        record.keyword = keyword;
        record
    })
}

fn is_known(label: Option<&str>) -> bool {
    matches!(label, Some("positive" | "negative" | "neutral"))
}

// =============================================================================
// CLASSIFIER
// =============================================================================

proptest! {
    #[test]
    fn sentiment_level_is_monotonic(a in -5.0f64..5.0, b in -5.0f64..5.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(SentimentLevel::from_score(low) <= SentimentLevel::from_score(high));
    }

    #[test]
    fn sentiment_label_is_one_of_five(score in proptest::num::f64::ANY) {
        let label = format_sentiment(score);
        prop_assert_eq!(
            SentimentLevel::ALL.iter().filter(|level| level.label() == label).count(),
            1
        );
    }
}

// =============================================================================
// FORMATTERS
// =============================================================================

proptest! {
    #[test]
    fn formatters_are_deterministic(value in -1e12f64..1e12, decimals in 0u32..8) {
        prop_assert_eq!(format_currency(value, "$", decimals), format_currency(value, "$", decimals));
        prop_assert_eq!(format_percentage(value, decimals), format_percentage(value, decimals));
        prop_assert_eq!(format_number(value, decimals), format_number(value, decimals));
    }

    #[test]
    fn currency_has_exact_fraction_digits(value in -1e9f64..1e9, decimals in 1u32..10) {
        let rendered = format_currency(value, "$", decimals);
        let fraction = rendered.rsplit_once('.').map(|(_, f)| f.len());
        prop_assert_eq!(fraction, Some(decimals as usize));
        prop_assert!(rendered.starts_with('$'));
    }

    #[test]
    fn grouped_number_stays_within_half_a_unit(value in -1e12f64..1e12, decimals in 0u32..6) {
        let grouped = format_number(value, decimals).replace(',', "");
        let parsed: f64 = grouped.parse().unwrap();
        let half_unit = 0.5 * 10f64.powi(-(decimals as i32));
        prop_assert!((parsed - value).abs() <= half_unit + value.abs() * 1e-12);

        let fraction = grouped.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert_eq!(fraction, decimals as usize);
    }
}

// =============================================================================
// AGGREGATORS
// =============================================================================

proptest! {
    #[test]
    fn distribution_total_counts_only_labelled(records in prop::collection::vec(record(), 0..60)) {
        let expected = records
            .iter()
            .filter(|r| is_known(r.consensus_text()))
            .count() as u64;
        prop_assert_eq!(sentiment_distribution(&records).total(), expected);
    }

    #[test]
    fn timeline_total_counts_dated_and_labelled(records in prop::collection::vec(record(), 0..60)) {
        let expected = records
            .iter()
            .filter(|r| is_known(r.consensus_text()))
            .filter(|r| r.created_at().is_some_and(|s| s != "garbage"))
            .count() as u64;
        let timeline = sentiment_over_time(&records);
        prop_assert_eq!(timeline.iter().map(|d| d.counts.total()).sum::<u64>(), expected);
        prop_assert!(timeline.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn keyword_ranking_is_sorted_and_bounded(
        records in prop::collection::vec(record(), 0..80),
        limit in 1usize..12,
    ) {
        let ranked = keyword_frequency(&records, limit);
        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));

        let with_keyword = records.iter().filter(|r| r.keyword().is_some()).count() as u64;
        let unlimited: u64 = keyword_frequency(&records, usize::MAX).iter().map(|k| k.count).sum();
        prop_assert_eq!(unlimited, with_keyword);
    }
}
