// ABOUTME: Transport error taxonomy for request dispatch.
// ABOUTME: Covers connection, HTTP, status, envelope, and decoding failures.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a dispatcher.
///
/// The API client passes these through untouched, so callers see exactly what
/// the transport reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to connect to {address}: {reason}")]
    Connect { address: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("backend error {code} (HTTP {status}): {message}")]
    Backend {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to decode response data: {0}")]
    Decode(String),
}

impl DispatchError {
    /// HTTP status attached to the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DispatchError::Status { status, .. } | DispatchError::Backend { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
