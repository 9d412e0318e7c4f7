//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth and reclamation calls, `cells` is the membership
//! client, `types` defines the shared wire schema, and `error` is the
//! uniform failure taxonomy all of them report through.

pub mod api;
pub mod cells;
pub mod error;
pub mod types;

/// Build the `Authorization` header value from the stored credential.
///
/// The token is read fresh from storage on every call; a missing credential
/// fails fast without a network round trip.
#[cfg(feature = "hydrate")]
pub(crate) fn bearer_header() -> Result<String, error::ApiError> {
    match crate::util::storage::load_token() {
        Some(token) => Ok(format!("Bearer {token}")),
        None => Err(error::ApiError::Rejected {
            status: 401,
            message: "Not signed in.".to_owned(),
        }),
    }
}
