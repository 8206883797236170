//! Hacker News API client.
//!
//! Retrieves the ranked id list and per-story details via sequential
//! HTTP GETs, with a fixed politeness delay after each per-story
//! request. Per-story failures are logged and skipped; the ranked-list
//! fetch propagates its error to the caller.

use crate::models::{FetchOutcome, Story};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Errors from the Hacker News API client.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server could not be reached.
    #[error("cannot connect to {0}")]
    Connect(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Raw per-item payload from the API. Items may lack any of these
/// fields, and deleted ids resolve to JSON `null`.
#[derive(Debug, Deserialize)]
struct RawStory {
    id: Option<u64>,
    title: Option<String>,
    #[serde(default)]
    score: i64,
    by: Option<String>,
}

/// Sequential client for the Hacker News Firebase API.
pub struct HnClient {
    http: reqwest::Client,
    base_url: String,
    delay: Duration,
    timeout_seconds: u64,
}

impl HnClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>, delay: Duration, timeout_seconds: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: trim_trailing_slash(base_url.into()),
            delay,
            timeout_seconds,
        }
    }

    /// Fetch the ids of the current top stories, truncated to `limit`.
    ///
    /// Any failure here is fatal to the run and propagates to the caller.
    pub async fn fetch_top_ids(&self, limit: usize) -> Result<Vec<u64>, FetchError> {
        let url = format!("{}/topstories.json", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(&url, e))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        let mut ids: Vec<u64> = response
            .json()
            .await
            .map_err(|e| self.classify(&url, e))?;

        ids.truncate(limit);
        Ok(ids)
    }

    /// Fetch the details of a single story.
    ///
    /// Returns `Ok(None)` when the item is missing or has no title.
    /// A fixed delay is awaited after the request as a crude rate limit.
    pub async fn fetch_story(&self, id: u64) -> Result<Option<Story>, FetchError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(&url, e))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        let raw: Option<RawStory> = response
            .json()
            .await
            .map_err(|e| self.classify(&url, e))?;

        tokio::time::sleep(self.delay).await;

        Ok(raw.and_then(|raw| {
            let title = raw.title.filter(|t| !t.trim().is_empty())?;
            Some(Story::new(raw.id.unwrap_or(id), title, raw.score, raw.by))
        }))
    }

    /// Fetch details for every id, sequentially and in order.
    ///
    /// Per-id failures are logged with the failing id and counted; the
    /// id is dropped for this run with no retry. Untitled items are
    /// counted as skipped.
    pub async fn fetch_stories(&self, ids: &[u64], show_progress: bool) -> FetchOutcome {
        let progress_bar = if show_progress {
            let pb = ProgressBar::new(ids.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut outcome = FetchOutcome::default();

        for &id in ids {
            match self.fetch_story(id).await {
                Ok(Some(story)) => {
                    if let Some(ref pb) = progress_bar {
                        pb.set_message(truncate_title(&story.title, 50));
                    }
                    debug!("Fetched story {}: {}", id, story.title);
                    outcome.stories.push(story);
                }
                Ok(None) => {
                    warn!("Skipping story {} (no title)", id);
                    outcome.skipped_untitled += 1;
                }
                Err(e) => {
                    warn!("Error fetching story {}: {}", id, e);
                    outcome.failed += 1;
                }
            }

            if let Some(ref pb) = progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        outcome
    }

    /// Map a reqwest error to a more specific fetch error.
    fn classify(&self, url: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_seconds)
        } else if e.is_connect() {
            FetchError::Connect(self.base_url.clone())
        } else if e.is_decode() {
            FetchError::Decode {
                url: url.to_string(),
                source: e,
            }
        } else {
            FetchError::Transport(e)
        }
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Shorten a title for progress display, respecting char boundaries.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        title.to_string()
    } else {
        let mut truncated: String = title.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_title_short() {
        assert_eq!(truncate_title("Short title", 50), "Short title");
    }

    #[test]
    fn test_truncate_title_long() {
        let long = "a".repeat(80);
        let truncated = truncate_title(&long, 50);
        assert_eq!(truncated.chars().count(), 53);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_title_multibyte() {
        let title = "日本語のタイトル";
        assert_eq!(truncate_title(title, 4), "日本語の...");
    }

    #[test]
    fn test_trim_trailing_slash() {
        assert_eq!(
            trim_trailing_slash("http://localhost:8080/".to_string()),
            "http://localhost:8080"
        );
        assert_eq!(
            trim_trailing_slash("http://localhost:8080".to_string()),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_raw_story_null_item() {
        let raw: Option<RawStory> = serde_json::from_str("null").unwrap();
        assert!(raw.is_none());
    }

    #[test]
    fn test_raw_story_missing_fields() {
        let raw: Option<RawStory> = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let raw = raw.unwrap();
        assert_eq!(raw.id, Some(7));
        assert_eq!(raw.title, None);
        assert_eq!(raw.score, 0);
        assert_eq!(raw.by, None);
    }
}
