//! Data models for the trend analyzer.
//!
//! This module contains the core data structures shared by the fetch,
//! analysis, and report stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall tone of the fetched titles, derived from the mean sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Mean sentiment above 0.1.
    Positive,
    /// Mean sentiment below -0.1.
    Negative,
    /// Everything in between, boundaries included.
    Neutral,
}

impl Tone {
    /// Classify a mean sentiment score into a tone band.
    ///
    /// The boundary values 0.1 and -0.1 themselves are Neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            Tone::Positive
        } else if score < -0.1 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    /// Returns an emoji representation of the tone.
    pub fn emoji(&self) -> &'static str {
        match self {
            Tone::Positive => "😊",
            Tone::Negative => "😟",
            Tone::Neutral => "😐",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Positive => write!(f, "Positive"),
            Tone::Negative => write!(f, "Negative"),
            Tone::Neutral => write!(f, "Neutral"),
        }
    }
}

/// A single ranked Hacker News story.
///
/// Created on successful fetch when a title is present; `sentiment` is
/// attached by the analysis stage before any reporting happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Item id from the ranking endpoint.
    pub id: u64,
    /// Story title (never empty in the final collection).
    pub title: String,
    /// Upvote score; items without one count as 0.
    #[serde(default)]
    pub score: i64,
    /// Author handle, when the API provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    /// Title sentiment polarity in [-1, 1].
    #[serde(default)]
    pub sentiment: f64,
}

impl Story {
    /// Creates a story with no sentiment attached yet.
    pub fn new(id: u64, title: String, score: i64, by: Option<String>) -> Self {
        Self {
            id,
            title,
            score,
            by,
            sentiment: 0.0,
        }
    }

    /// Author handle for display, falling back to "Unknown".
    pub fn author(&self) -> &str {
        self.by.as_deref().unwrap_or("Unknown")
    }
}

/// A word and its occurrence count across all titles.
pub type WordCount = (String, usize);

/// Counters collected while fetching story details.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Stories fetched with a title present, in fetch order.
    pub stories: Vec<Story>,
    /// Ids that resolved but carried no title.
    pub skipped_untitled: usize,
    /// Ids whose detail fetch failed.
    pub failed: usize,
}

impl FetchOutcome {
    /// Total number of ids that produced no story.
    pub fn dropped(&self) -> usize {
        self.skipped_untitled + self.failed
    }
}

/// Final run statistics printed at the end of the pipeline.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of stories in the final collection.
    pub fetched: usize,
    /// Ids skipped for having no title.
    pub skipped_untitled: usize,
    /// Ids dropped after a fetch error.
    pub failed: usize,
    /// Arithmetic mean of all title sentiments.
    pub average_sentiment: f64,
    /// Tone band of the average sentiment.
    pub tone: Tone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_bands() {
        assert_eq!(Tone::from_score(0.5), Tone::Positive);
        assert_eq!(Tone::from_score(0.11), Tone::Positive);
        assert_eq!(Tone::from_score(-0.5), Tone::Negative);
        assert_eq!(Tone::from_score(-0.11), Tone::Negative);
        assert_eq!(Tone::from_score(0.0), Tone::Neutral);
    }

    #[test]
    fn test_tone_boundaries_are_neutral() {
        assert_eq!(Tone::from_score(0.1), Tone::Neutral);
        assert_eq!(Tone::from_score(-0.1), Tone::Neutral);
    }

    #[test]
    fn test_tone_display() {
        assert_eq!(Tone::Positive.to_string(), "Positive");
        assert_eq!(Tone::Negative.to_string(), "Negative");
        assert_eq!(Tone::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_story_author_fallback() {
        let story = Story::new(1, "A title".to_string(), 10, None);
        assert_eq!(story.author(), "Unknown");

        let story = Story::new(1, "A title".to_string(), 10, Some("pg".to_string()));
        assert_eq!(story.author(), "pg");
    }

    #[test]
    fn test_story_score_defaults_to_zero() {
        let story: Story = serde_json::from_str(r#"{"id": 42, "title": "Hi"}"#).unwrap();
        assert_eq!(story.score, 0);
        assert_eq!(story.by, None);
        assert_eq!(story.sentiment, 0.0);
    }

    #[test]
    fn test_fetch_outcome_dropped() {
        let outcome = FetchOutcome {
            stories: Vec::new(),
            skipped_untitled: 2,
            failed: 3,
        };
        assert_eq!(outcome.dropped(), 5);
    }
}
