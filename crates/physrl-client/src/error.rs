//! Error types for the discretization client

use thiserror::Error;

/// Failure of a single client round trip
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-success status. Displays the server's
    /// `error` field verbatim, or a fixed fallback message.
    #[error("{0}")]
    Request(String),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_request(&self) -> bool {
        matches!(self, ClientError::Request(_))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
