//! Chart rendering with plotters.
//!
//! Renders the top-words horizontal bar chart and the score histogram
//! to PNG files. Empty inputs skip rendering instead of failing, so a
//! run with no analyzable data still completes.

use crate::analysis::HistogramBin;
use crate::models::WordCount;
use anyhow::{Context, Result};
use chrono::Local;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const BAR_COLOR: RGBColor = RGBColor(69, 117, 180);
const HIST_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Render a horizontal bar chart of the most common words.
///
/// Words are drawn top-down in the order given (most frequent first).
pub fn render_word_chart(words: &[WordCount], path: &Path, size: (u32, u32)) -> Result<()> {
    if words.is_empty() {
        warn!("No words to chart, skipping {}", path.display());
        return Ok(());
    }

    ensure_parent_dir(path)?;

    let n = words.len() as i64;
    let max_count = words.iter().map(|(_, c)| *c).max().unwrap_or(1) as i64;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "Top {} Most Common Words in Hacker News Titles ({})",
        words.len(),
        Local::now().format("%Y-%m-%d")
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(0i64..max_count + 1, 0i64..n)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(words.len())
        .y_label_formatter(&|v: &i64| {
            // bar for words[i] spans [n-1-i, n-i), so the label at the
            // lower edge v names words[n-1-v]
            let idx = n - 1 - *v;
            usize::try_from(idx)
                .ok()
                .and_then(|i| words.get(i))
                .map(|(w, _)| w.clone())
                .unwrap_or_default()
        })
        .x_desc("Count")
        .draw()?;

    chart.draw_series(words.iter().enumerate().map(|(i, (_, count))| {
        let y = n - 1 - i as i64;
        Rectangle::new([(0, y), (*count as i64, y + 1)], BAR_COLOR.mix(0.8).filled())
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    info!("Saved word chart to {}", path.display());
    Ok(())
}

/// Render the score distribution histogram.
pub fn render_score_histogram(bins: &[HistogramBin], path: &Path, size: (u32, u32)) -> Result<()> {
    if bins.is_empty() {
        warn!("No score bins to chart, skipping {}", path.display());
        return Ok(());
    }

    ensure_parent_dir(path)?;

    let n = bins.len() as i64;
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(1) as i64;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "Distribution of Hacker News Story Scores ({})",
        Local::now().format("%Y-%m-%d")
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i64..n, 0i64..max_count + 1)?;

    chart
        .configure_mesh()
        .x_labels(bins.len())
        .x_label_formatter(&|v: &i64| {
            usize::try_from(*v)
                .ok()
                .and_then(|i| bins.get(i))
                .map(|b| b.lower.to_string())
                .unwrap_or_default()
        })
        .x_desc("Score (Upvotes)")
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(bins.iter().enumerate().map(|(i, bin)| {
        Rectangle::new(
            [(i as i64, 0), (i as i64 + 1, bin.count as i64)],
            HIST_COLOR.filled(),
        )
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    info!("Saved score histogram to {}", path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_words_skip_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets/top_words.png");

        render_word_chart(&[], &path, (400, 300)).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_empty_bins_skip_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets/score_histogram.png");

        render_score_histogram(&[], &path, (400, 300)).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/chart.png");

        ensure_parent_dir(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
    }
}
