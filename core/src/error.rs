//! Error type for the events API client.
//!
//! # Design
//! There is a single error kind for everything that can go wrong during a
//! round trip. Variants only record *where* it went wrong so callers can
//! log or display it; the facade never recovers from any of them. A 404 is
//! an ordinary `Status` error, `is_not_found` exists purely as a caller
//! convenience.

use thiserror::Error;

/// Failure of a single request/response round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
