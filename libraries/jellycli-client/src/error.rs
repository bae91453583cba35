//! Error types for the Jellyfin client.

use thiserror::Error;

/// Errors that can occur when talking to a Jellyfin server.
#[derive(Error, Debug)]
pub enum JellyfinError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Auth key contains bytes that cannot go into a header
    #[error("Invalid auth key: {0}")]
    InvalidAuthKey(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, JellyfinError>;
