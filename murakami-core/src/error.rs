//! Error types for fetching and configuring the calendar feed.

use thiserror::Error;

/// Errors that can occur while producing availability.
///
/// Malformed calendar text is not represented here: the parser degrades
/// missing or unrecognized fields to defaults instead of failing.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Network error reaching calendar provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch calendar: HTTP {0}")]
    HttpStatus(u16),

    #[error("Calendar fetch timed out after {0}s")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for FeedError {
    fn from(err: config::ConfigError) -> Self {
        FeedError::Config(err.to_string())
    }
}

/// Result type alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
