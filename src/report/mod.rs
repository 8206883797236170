//! Report generation modules.
//!
//! Chart rendering, JSON export, and the textual run summary.

pub mod charts;
pub mod export;

pub use charts::{render_score_histogram, render_word_chart};
pub use export::{
    summary_text, write_stories_json, SCORES_CHART_FILE, STORIES_JSON_FILE, WORDS_CHART_FILE,
};
