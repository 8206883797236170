//! JSON export and textual run summary.

use crate::models::{RunSummary, Story};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Word chart path, relative to the output root.
pub const WORDS_CHART_FILE: &str = "assets/top_words.png";
/// Score histogram path, relative to the output root.
pub const SCORES_CHART_FILE: &str = "assets/score_histogram.png";
/// JSON export path, relative to the output root.
pub const STORIES_JSON_FILE: &str = "output/top_stories.json";

/// Write the enriched story collection as indented JSON.
pub fn write_stories_json(stories: &[Story], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(stories)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write stories to {}", path.display()))?;

    info!("Saved {} stories to {}", stories.len(), path.display());
    Ok(())
}

/// Build the final summary block printed to stdout.
pub fn summary_text(summary: &RunSummary, top: Option<&Story>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "✅ Successfully fetched {} stories ({} untitled skipped, {} failed)\n\n",
        summary.fetched, summary.skipped_untitled, summary.failed
    ));

    out.push_str(&format!(
        "{} Average sentiment of titles: {:.3}\n",
        summary.tone.emoji(),
        summary.average_sentiment
    ));
    out.push_str(&format!("   Overall tone: {}\n", summary.tone));

    if let Some(top) = top {
        out.push_str(&format!("\n🏆 Top story: \"{}\"\n", top.title));
        out.push_str(&format!(
            "   👍 Score: {} | 👤 By: {}\n",
            top.score,
            top.author()
        ));
    }

    out
}
