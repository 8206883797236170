//! Hacker News API client modules.
//!
//! This module provides the sequential, rate-limited client for the
//! Firebase-backed Hacker News API.

pub mod client;

pub use client::{FetchError, HnClient};
