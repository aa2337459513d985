//! Error types

use thiserror::Error;

/// Common error type
///
/// Two failure kinds reach the user: transport failures and
/// backend-rejected requests. `Display` renders the detail text that the
/// UI appends to its localized prefix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Transport-level failure (connection refused, CORS, DNS).
    /// The payload is the browser-provided detail.
    #[error("{0}")]
    Network(String),

    /// Non-ok HTTP status with no structured detail in the body.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Response body did not match the expected shape.
    #[error("risposta non valida: {0}")]
    InvalidResponse(String),

    /// Backend rejected the request with a message of its own.
    #[error("{0}")]
    Backend(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidResponse(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
