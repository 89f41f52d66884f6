use std::collections::HashMap;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the core IO layer
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} returned from {url} (authenticated as {})", .username.as_deref().unwrap_or("anonymous"))]
    Http {
        status: StatusCode,
        url: String,
        username: Option<String>,
    },

    #[error("malformed API response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// One or more write-back entries could not be posted during a flush.
    /// Entries that posted successfully are committed server-side; the map
    /// holds only the locators that failed.
    #[error("failed to flush {} cached configuration document(s)", .failures.len())]
    Flush { failures: HashMap<String, Error> },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status attached to this error, when one exists.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
