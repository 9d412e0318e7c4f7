//! Failure taxonomy for backend API calls.
//!
//! ERROR HANDLING
//! ==============
//! Two cases matter to callers: the server answered and said no (surface its
//! message), or no usable response reached the client (surface a transport
//! error). Pages render the `Display` output directly; nothing is retried
//! here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single backend API round trip.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Well-formed non-2xx response from the server.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Transport failure or an unreadable response.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status of the rejection, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

/// Classify a non-2xx response body.
///
/// The backend reports auth failures under `message` and membership failures
/// under `error`; `field` selects which one the calling endpoint expects.
/// A JSON body missing that field still counts as a rejection with a generic
/// message; a non-JSON body is treated as a network-level failure.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn rejection(status: u16, field: &str, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => {
            let message = json
                .get(field)
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("request failed with status {status}"), str::to_owned);
            ApiError::Rejected { status, message }
        }
        Err(_) => ApiError::Network(format!("unreadable response (status {status})")),
    }
}
