//! Record store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A document could not be read from disk.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server answered with a non-OK status.
    #[error("HTTP error! status: {status} ({url})")]
    Http { url: String, status: u16 },

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Network(String),

    /// A document was fetched but is not the expected JSON shape.
    #[error("Invalid JSON in {location}: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// No character matches the lookup key.
    #[error("Mii not found: {0}")]
    NotFound(String),
}

impl RecordError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RecordError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(location: impl Into<String>, source: serde_json::Error) -> Self {
        RecordError::Json {
            location: location.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for RecordError {
    fn from(err: reqwest::Error) -> Self {
        RecordError::Network(err.to_string())
    }
}
