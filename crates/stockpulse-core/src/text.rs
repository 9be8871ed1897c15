//! Post text clean-up and keyword filtering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::Record;

/// Posts with fewer words than this after cleaning carry too little signal.
pub const MIN_WORDS: usize = 3;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid URL pattern"));
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("valid mention pattern"));
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("valid hashtag pattern"));
static NON_ASCII: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").expect("valid non-ascii pattern"));
static NON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid non-letter pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid space pattern"));

/// Normalizes post text for keyword matching and display.
///
/// Lowercases, then strips URLs, `@mentions`, `#hashtags`, non-ASCII
/// characters (emoji), digits and punctuation, and collapses whitespace.
///
/// ```rust
/// use stockpulse_core::text::clean_text;
///
/// assert_eq!(
///     clean_text("Buying $AAPL today!! https://t.co/x @bob #stocks 🚀"),
///     "buying aapl today"
/// );
/// ```
#[must_use]
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = URL.replace_all(&lowered, "");
    let stripped = MENTION.replace_all(&stripped, "");
    let stripped = HASHTAG.replace_all(&stripped, "");
    let stripped = NON_ASCII.replace_all(&stripped, "");
    let stripped = NON_LETTER.replace_all(&stripped, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Cleans every record's text, dropping records whose cleaned text is
/// missing or shorter than [`MIN_WORDS`] words.
#[must_use]
pub fn clean_records(records: &[Record]) -> Vec<Record> {
    let cleaned: Vec<Record> = records
        .iter()
        .filter_map(|record| {
            let text = clean_text(record.text()?);
            if text.split_whitespace().count() < MIN_WORDS {
                return None;
            }
            Some(Record {
                text: Some(text),
                ..record.clone()
            })
        })
        .collect();
    log::debug!("kept {} of {} records after cleaning", cleaned.len(), records.len());
    cleaned
}

/// Keeps records whose text contains any of `keywords`, ignoring case.
///
/// Records without text never match; an empty keyword list matches nothing.
#[must_use]
pub fn filter_by_keywords<'a, S: AsRef<str>>(
    records: &'a [Record],
    keywords: &[S],
) -> Vec<&'a Record> {
    let needles: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.as_ref().to_lowercase())
        .collect();

    records
        .iter()
        .filter(|record| {
            record.text().is_some_and(|text| {
                let haystack = text.to_lowercase();
                needles.iter().any(|needle| haystack.contains(needle.as_str()))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_noise() {
        assert_eq!(clean_text("Hello   WORLD"), "hello world");
        assert_eq!(clean_text("see www.example.com now"), "see now");
        assert_eq!(clean_text("Q2 earnings: +15%!"), "q earnings");
        assert_eq!(clean_text("café"), "caf");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_clean_records_drops_short_posts() {
        let records = vec![
            Record::new().with_text("Tesla deliveries beat estimates"),
            Record::new().with_text("lol 😂"),
            Record::new().with_keyword("AAPL"),
        ];
        let cleaned = clean_records(&records);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].text(), Some("tesla deliveries beat estimates"));
    }

    #[test]
    fn test_filter_by_keywords_case_insensitive() {
        let records = vec![
            Record::new().with_text("Apple launches new iPhone"),
            Record::new().with_text("Tesla recalls vehicles"),
            Record::new().with_keyword("AAPL"),
        ];
        let hits = filter_by_keywords(&records, &["APPLE", "microsoft"]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text(), Some("Apple launches new iPhone"));
    }

    #[test]
    fn test_filter_by_no_keywords_matches_nothing() {
        let records = vec![Record::new().with_text("anything")];
        let none: [&str; 0] = [];
        assert!(filter_by_keywords(&records, &none).is_empty());
    }
}
