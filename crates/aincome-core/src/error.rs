//! Unified error handling for aincome-core

use thiserror::Error;

/// Core error type for aincome-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for aincome-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Error::Auth(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// The human-readable message the backend attached to this failure,
    /// if any. Transport-level failures have no backend message.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Error::Auth(msg) if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}
