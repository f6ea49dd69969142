//! Oracle error types.

use thiserror::Error;

/// Errors that abort a fetch-and-encode run.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed in transit (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("Feed returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response has no such field.
    #[error("Response is missing field '{0}'")]
    MissingField(&'static str),

    /// The field is present but not a non-negative integer.
    #[error("Field '{field}' is not an unsigned integer: {value}")]
    InvalidField {
        field: &'static str,
        value: serde_json::Value,
    },

    /// A hex string could not be decoded into a 32-byte word.
    #[error("Invalid hex word: {0}")]
    Hex(#[from] hex::FromHexError),

    /// An encoded word does not fit in 64 bits.
    #[error("Encoded value exceeds u64")]
    Overflow,
}

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;
