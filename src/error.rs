//! Error types for repodiscover.
//!
//! [`DiscoverError`] covers transport failures, non-success backend
//! responses, and local configuration problems. Only primary lookups ever
//! surface one of these to the user; the live fallback maps its failures
//! to "no data" before they get this far.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` is whatever the backend said, or a
    /// status-derived default.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid sort key: '{value}'")]
    InvalidSortKey { value: String },

    #[error("Invalid difficulty: '{value}'. Use easy, medium or hard")]
    InvalidDifficulty { value: String },

    #[error("No HOME directory set")]
    HomeNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiscoverError>;

impl DiscoverError {
    /// Build an API error from a status code and an optional backend message.
    pub fn api(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("API error: {}", status));
        Self::Api { status, message }
    }

    pub fn invalid_sort_key(value: impl Into<String>) -> Self {
        Self::InvalidSortKey {
            value: value.into(),
        }
    }

    pub fn invalid_difficulty(value: impl Into<String>) -> Self {
        Self::InvalidDifficulty {
            value: value.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
