//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// HnTrends - Hacker News trend analyzer
///
/// Fetch the current top stories, analyze title word frequency and
/// sentiment, and render two PNG charts plus a JSON export. Running
/// with no arguments reproduces the stock analysis (40 stories,
/// 15 top words, 15 histogram bins).
///
/// Examples:
///   hntrends
///   hntrends --limit 100 --top-words 25
///   hntrends --out-dir ./reports --delay-ms 250
///   hntrends --dry-run
///   hntrends --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Number of top stories to fetch
    ///
    /// The ranking endpoint serves at most 500 ids.
    #[arg(short, long, default_value = "40", value_name = "COUNT")]
    pub limit: usize,

    /// Number of most frequent words to chart
    #[arg(short, long, default_value = "15", value_name = "COUNT")]
    pub top_words: usize,

    /// Number of bins in the score histogram
    #[arg(short, long, default_value = "15", value_name = "COUNT")]
    pub bins: usize,

    /// Delay between per-story requests in milliseconds
    ///
    /// A fixed politeness throttle; not adaptive. Defaults to the
    /// config file value or 100 ms.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Base URL of the Hacker News API
    ///
    /// Mainly useful for testing against a local mock server.
    #[arg(long, value_name = "URL", env = "HNTRENDS_API_BASE")]
    pub api_base: Option<String>,

    /// Directory under which assets/ and output/ are written
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .hntrends.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: fetch and list the top story ids without details or charts
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .hntrends.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.limit == 0 {
            return Err("Limit must be at least 1".to_string());
        }
        if self.limit > 500 {
            return Err("Limit cannot exceed 500 (the ranking endpoint serves 500 ids)".to_string());
        }

        if self.top_words == 0 {
            return Err("Top words must be at least 1".to_string());
        }

        if self.bins == 0 {
            return Err("Bins must be at least 1".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate timeout if provided
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        // Validate API base URL format if provided
        if let Some(ref api_base) = self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err("API base URL must start with 'http://' or 'https://'".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            limit: 40,
            top_words: 15,
            bins: 15,
            delay_ms: None,
            timeout: None,
            api_base: None,
            out_dir: None,
            config: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_limit_bounds() {
        let mut args = make_args();
        args.limit = 0;
        assert!(args.validate().is_err());

        args.limit = 501;
        assert!(args.validate().is_err());

        args.limit = 500;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_api_base() {
        let mut args = make_args();
        args.api_base = Some("ftp://example.com".to_string());
        assert!(args.validate().is_err());

        args.api_base = Some("http://localhost:8080".to_string());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_skipped_for_init_config() {
        let mut args = make_args();
        args.limit = 0;
        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
