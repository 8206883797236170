//! Word-frequency analysis over story titles.
//!
//! Titles are lowercased and split on whitespace; stop words and short
//! tokens are dropped before counting.

use crate::models::WordCount;
use std::collections::{HashMap, HashSet};

/// Stop words excluded from frequency counting.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "to", "for", "of", "and", "is", "with", "by", "this",
    "that", "from", "it", "as", "are", "be",
];

/// Build the built-in stop-word set, extended with any extra words.
///
/// Extra words are lowercased so the set matches the lowercased tokens.
pub fn default_stop_words(extra: &[String]) -> HashSet<String> {
    let mut set: HashSet<String> = STOP_WORDS.iter().map(|w| w.to_string()).collect();
    set.extend(extra.iter().map(|w| w.to_lowercase()));
    set
}

/// Count word occurrences across all titles and return the `top_n`
/// most frequent as (word, count) pairs in descending count order.
///
/// Tokens in the stop-word set or shorter than `min_len` characters are
/// never counted. Ordering among equal counts is unspecified.
pub fn word_frequency(
    titles: &[String],
    stop_words: &HashSet<String>,
    min_len: usize,
    top_n: usize,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for title in titles {
        for word in title.to_lowercase().split_whitespace() {
            if word.chars().count() < min_len || stop_words.contains(word) {
                continue;
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<WordCount> = counts.into_iter().collect();
    ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    ranked.truncate(top_n);

    ranked
}
