//! Error types for calls to the order-admin backend.

use thiserror::Error;

/// Ways a backend call can fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The request could not be sent or no response came back.
    #[error("Network failure: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Rejected by server with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The backend answered 2xx but the body was not what we expected.
    #[error("Undecodable response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ServiceError::Decode(e.to_string())
        } else {
            ServiceError::Network(e.to_string())
        }
    }
}
