//! Sentiment scores, labels and consensus voting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PulseError, PulseResult};

/// Five-level description of a sentiment score.
///
/// Variants are ordered from most negative to most positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLevel {
    /// Score below -0.6.
    VeryNegative,
    /// Score in [-0.6, -0.2).
    Negative,
    /// Score in [-0.2, 0.2).
    Neutral,
    /// Score in [0.2, 0.6).
    Positive,
    /// Score of 0.6 or more.
    VeryPositive,
}

impl SentimentLevel {
    /// All levels, most negative first.
    pub const ALL: [SentimentLevel; 5] = [
        SentimentLevel::VeryNegative,
        SentimentLevel::Negative,
        SentimentLevel::Neutral,
        SentimentLevel::Positive,
        SentimentLevel::VeryPositive,
    ];

    /// Classifies a score. Out-of-range scores are not clamped; NaN fails
    /// every threshold and lands in `VeryNegative`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.6 {
            SentimentLevel::VeryPositive
        } else if score >= 0.2 {
            SentimentLevel::Positive
        } else if score >= -0.2 {
            SentimentLevel::Neutral
        } else if score >= -0.6 {
            SentimentLevel::Negative
        } else {
            SentimentLevel::VeryNegative
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SentimentLevel::VeryPositive => "Very Positive",
            SentimentLevel::Positive => "Positive",
            SentimentLevel::Neutral => "Neutral",
            SentimentLevel::Negative => "Negative",
            SentimentLevel::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for SentimentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Describes a sentiment score with one of five labels.
///
/// ```rust
/// use stockpulse_core::sentiment::format_sentiment;
///
/// assert_eq!(format_sentiment(0.8), "Very Positive");
/// assert_eq!(format_sentiment(-0.4), "Negative");
/// ```
#[must_use]
pub fn format_sentiment(score: f64) -> &'static str {
    SentimentLevel::from_score(score).label()
}

/// Three-way consensus label attached to analysed posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// `positive`
    Positive,
    /// `negative`
    Negative,
    /// `neutral`
    Neutral,
}

impl SentimentLabel {
    /// All labels in chart order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Returns the wire form (`positive`, `negative`, `neutral`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Returns the capitalised display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = PulseError;

    /// Parses the exact wire form; anything else is rejected.
    fn from_str(s: &str) -> PulseResult<Self> {
        match s {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            other => Err(PulseError::unknown_label(other)),
        }
    }
}

/// Labels a VADER-style compound score (±0.05 dead band, inclusive).
#[must_use]
pub fn compound_label(compound: f64) -> SentimentLabel {
    if compound >= 0.05 {
        SentimentLabel::Positive
    } else if compound <= -0.05 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Labels a polarity score (±0.1 dead band, exclusive).
#[must_use]
pub fn polarity_label(polarity: f64) -> SentimentLabel {
    if polarity > 0.1 {
        SentimentLabel::Positive
    } else if polarity < -0.1 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Majority label across several analysis methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consensus {
    /// Winning label.
    pub label: SentimentLabel,
    /// Share of votes that agree with the winner, in (0, 1].
    pub confidence: f64,
}

impl Consensus {
    /// Takes a majority vote. Ties go to the label seen first; an empty
    /// ballot has no consensus.
    ///
    /// ```rust
    /// use stockpulse_core::sentiment::{Consensus, SentimentLabel::*};
    ///
    /// let consensus = Consensus::from_votes([Positive, Neutral, Positive]).unwrap();
    /// assert_eq!(consensus.label, Positive);
    /// ```
    pub fn from_votes<I>(votes: I) -> Option<Self>
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        let mut tally: Vec<(SentimentLabel, u32)> = Vec::with_capacity(3);
        let mut total = 0u32;
        for vote in votes {
            total += 1;
            match tally.iter_mut().find(|(label, _)| *label == vote) {
                Some((_, count)) => *count += 1,
                None => tally.push((vote, 1)),
            }
        }

        let mut winner: Option<(SentimentLabel, u32)> = None;
        for (label, count) in tally {
            if winner.map_or(true, |(_, best)| count > best) {
                winner = Some((label, count));
            }
        }

        winner.map(|(label, count)| Consensus {
            label,
            confidence: f64::from(count) / f64::from(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_levels() {
        assert_eq!(format_sentiment(0.8), "Very Positive");
        assert_eq!(format_sentiment(0.4), "Positive");
        assert_eq!(format_sentiment(0.0), "Neutral");
        assert_eq!(format_sentiment(-0.4), "Negative");
        assert_eq!(format_sentiment(-0.8), "Very Negative");
    }

    #[test]
    fn test_threshold_boundaries_are_inclusive_below() {
        assert_eq!(SentimentLevel::from_score(0.6), SentimentLevel::VeryPositive);
        assert_eq!(SentimentLevel::from_score(0.2), SentimentLevel::Positive);
        assert_eq!(SentimentLevel::from_score(-0.2), SentimentLevel::Neutral);
        assert_eq!(SentimentLevel::from_score(-0.6), SentimentLevel::Negative);
        assert_eq!(SentimentLevel::from_score(-0.600_001), SentimentLevel::VeryNegative);
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        assert_eq!(format_sentiment(2.0), "Very Positive");
        assert_eq!(format_sentiment(-5.0), "Very Negative");
        assert_eq!(format_sentiment(f64::NAN), "Very Negative");
    }

    #[test]
    fn test_label_parse() {
        assert_eq!("positive".parse::<SentimentLabel>().unwrap(), SentimentLabel::Positive);
        assert!("Positive".parse::<SentimentLabel>().is_err());
        assert!("bullish".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_label_serde() {
        let json = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }

    #[test]
    fn test_compound_label() {
        assert_eq!(compound_label(0.05), SentimentLabel::Positive);
        assert_eq!(compound_label(0.049), SentimentLabel::Neutral);
        assert_eq!(compound_label(-0.05), SentimentLabel::Negative);
    }

    #[test]
    fn test_polarity_label() {
        assert_eq!(polarity_label(0.1), SentimentLabel::Neutral);
        assert_eq!(polarity_label(0.11), SentimentLabel::Positive);
        assert_eq!(polarity_label(-0.1), SentimentLabel::Neutral);
        assert_eq!(polarity_label(-0.11), SentimentLabel::Negative);
    }

    #[test]
    fn test_consensus_majority() {
        use SentimentLabel::*;
        let consensus = Consensus::from_votes([Negative, Positive, Negative]).unwrap();
        assert_eq!(consensus.label, Negative);
        assert_relative_eq!(consensus.confidence, 2.0 / 3.0);
    }

    #[test]
    fn test_consensus_tie_goes_to_first_seen() {
        use SentimentLabel::*;
        let consensus = Consensus::from_votes([Neutral, Positive]).unwrap();
        assert_eq!(consensus.label, Neutral);
        assert_relative_eq!(consensus.confidence, 0.5);
    }

    #[test]
    fn test_consensus_empty() {
        assert!(Consensus::from_votes(std::iter::empty()).is_none());
    }
}
