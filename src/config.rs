//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.hntrends.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Chart rendering settings.
    #[serde(default)]
    pub charts: ChartsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Hacker News API fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the Hacker News Firebase API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Number of top stories to fetch.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Fixed delay after each per-story request, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            limit: default_limit(),
            delay_ms: default_delay_ms(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://hacker-news.firebaseio.com/v0".to_string()
}

fn default_limit() -> usize {
    40
}

fn default_delay_ms() -> u64 {
    100
}

fn default_timeout() -> u64 {
    30
}

/// Title analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of most frequent words to keep.
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Minimum token length to count; shorter tokens are dropped.
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,

    /// Additional stop words on top of the built-in set.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
            min_word_len: default_min_word_len(),
            extra_stop_words: Vec::new(),
        }
    }
}

fn default_top_words() -> usize {
    15
}

fn default_min_word_len() -> usize {
    4
}

/// Chart rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Number of bins in the score histogram.
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Chart width in pixels.
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Chart height in pixels.
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

fn default_bins() -> usize {
    15
}

fn default_chart_width() -> u32 {
    1200
}

fn default_chart_height() -> u32 {
    600
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory under which assets/ and output/ are written.
    #[serde(default = "default_out_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
        }
    }
}

fn default_out_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".hntrends.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // Counts have defaults in the CLI, so they always override
        self.fetch.limit = args.limit;
        self.analysis.top_words = args.top_words;
        self.charts.bins = args.bins;

        // Optional settings - only override if provided
        if let Some(delay_ms) = args.delay_ms {
            self.fetch.delay_ms = delay_ms;
        }
        if let Some(timeout) = args.timeout {
            self.fetch.timeout_seconds = timeout;
        }
        if let Some(ref api_base) = args.api_base {
            self.fetch.api_base = api_base.clone();
        }
        if let Some(ref out_dir) = args.out_dir {
            self.output.dir = out_dir.to_string_lossy().to_string();
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
