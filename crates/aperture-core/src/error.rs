//! Error types for the aperture media gateway.

use thiserror::Error;

/// Result type alias using aperture's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gateway operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Required credential or account identifier missing. Fails the call
    /// before any network I/O is attempted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single provider call exceeded its allotted window. Recovered
    /// locally by the strategy cascade unless it is the terminal failure.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The provider responded with an error status or body.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Every strategy executed and returned zero records. Carries an
    /// actionable hint for the caller, not a fault.
    #[error("No assets found")]
    NotFound {
        /// Guidance for the caller (e.g. check case-sensitive group name).
        hint: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed below the provider protocol level.
    #[error("Request error: {0}")]
    Request(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e.to_string())
        } else {
            Error::Request(e.to_string())
        }
    }
}
