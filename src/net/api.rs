//! Auth and reclamation endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an [`ApiError`] so pages can render the
//! server's own message for rejections and a generic one for transport
//! problems. Nothing here mutates session state; that is the session
//! manager's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthSuccess, RegisterForm};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(any(test, feature = "hydrate"))]
const RECLAMATION_ENDPOINT: &str = "/api/reclamations";

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn reclamation_payload(subject: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "subject": subject, "message": message })
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// [`ApiError::Rejected`] with the server's `message` field on a non-2xx
/// response, [`ApiError::Network`] on transport failure.
pub async fn login(email: &str, password: &str) -> Result<AuthSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(LOGIN_ENDPOINT, &login_payload(email, password)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// Success establishes a session exactly like [`login`]: the response carries
/// a fresh token and profile.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(form: &RegisterForm) -> Result<AuthSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        post_auth(REGISTER_ENDPOINT, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Submit a complaint via `POST /api/reclamations` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Rejected`] with the server's `error` field on a non-2xx
/// response, [`ApiError::Network`] on transport failure.
pub async fn submit_reclamation(subject: &str, message: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let bearer = super::bearer_header().map_err(|e| {
            leptos::logging::warn!("reclamation: submit failed: {e}");
            e
        })?;
        let resp = gloo_net::http::Request::post(RECLAMATION_ENDPOINT)
            .header("Authorization", &bearer)
            .json(&reclamation_payload(subject, message))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                let err = ApiError::Network(e.to_string());
                leptos::logging::warn!("reclamation: submit failed: {err}");
                err
            })?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let err = super::error::rejection(status, "error", &body);
            leptos::logging::warn!("reclamation: submit failed: {err}");
            return Err(err);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (subject, message);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// POST a JSON payload to an auth endpoint and decode the `{token, user}`
/// success body. Rejections surface the server's `message` field.
#[cfg(feature = "hydrate")]
async fn post_auth(endpoint: &str, payload: &serde_json::Value) -> Result<AuthSuccess, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            leptos::logging::warn!("auth: {endpoint} failed: {err}");
            err
        })?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = super::error::rejection(status, "message", &body);
        leptos::logging::warn!("auth: {endpoint} rejected: {err}");
        return Err(err);
    }
    resp.json::<AuthSuccess>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}
