//! Title analysis modules.
//!
//! Sentiment scoring, word-frequency aggregation, and score statistics
//! over the fetched story collection.

pub mod sentiment;
pub mod stats;
pub mod words;

pub use sentiment::{attach_sentiment, average_sentiment, polarity};
pub use stats::{score_histogram, top_story, HistogramBin};
pub use words::{default_stop_words, word_frequency};
