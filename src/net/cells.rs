//! Membership API client for cell (group) operations.
//!
//! DESIGN
//! ======
//! Four single-round-trip operations, each authenticated with the bearer
//! token read fresh from storage at call time; nothing is cached client-side
//! and every read is a fresh fetch. Join/quit responses are backend-owned
//! records and are surfaced verbatim as JSON.
//!
//! ERROR HANDLING
//! ==============
//! Uniform across all four: a non-2xx JSON body surfaces its `error` field,
//! a non-JSON body degrades to a generic network error, and transport
//! failures carry the underlying message. Every failure is logged here
//! before being returned; callers own the user-visible presentation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "cells_test.rs"]
mod cells_test;

use super::error::ApiError;
use super::types::Cell;

#[cfg(any(test, feature = "hydrate"))]
const CELLS_ENDPOINT: &str = "/api/cellules";

#[cfg(any(test, feature = "hydrate"))]
fn user_cells_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/cells")
}

#[cfg(any(test, feature = "hydrate"))]
fn cell_users_endpoint(cell_id: i64) -> String {
    format!("/api/cellules/{cell_id}/users")
}

/// Fetch every cell via `GET /api/cellules`.
///
/// # Errors
///
/// See the module-level error contract.
pub async fn list_all_cells() -> Result<Vec<Cell>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_authed("list all", gloo_net::http::Request::get(CELLS_ENDPOINT)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the cells joined by `user_id` via `GET /api/users/{userId}/cells`.
///
/// # Errors
///
/// See the module-level error contract.
pub async fn list_user_cells(user_id: &str) -> Result<Vec<Cell>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_cells_endpoint(user_id);
        send_authed("list user", gloo_net::http::Request::get(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Join a cell via `POST /api/cellules/{cellId}/users`.
///
/// Returns the updated record exactly as the server sent it.
///
/// # Errors
///
/// See the module-level error contract.
pub async fn join_cell(cell_id: i64) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = cell_users_endpoint(cell_id);
        send_authed("join", gloo_net::http::Request::post(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cell_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Leave a cell via `DELETE /api/cellules/{cellId}/users`.
///
/// Returns the server's confirmation payload verbatim.
///
/// # Errors
///
/// See the module-level error contract.
pub async fn quit_cell(cell_id: i64) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = cell_users_endpoint(cell_id);
        send_authed("quit", gloo_net::http::Request::delete(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cell_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Attach the bearer header, send, and decode a 2xx JSON body.
#[cfg(feature = "hydrate")]
async fn send_authed<T: serde::de::DeserializeOwned>(
    op: &str,
    req: gloo_net::http::RequestBuilder,
) -> Result<T, ApiError> {
    let bearer = super::bearer_header().map_err(|e| {
        leptos::logging::warn!("cells: {op} failed: {e}");
        e
    })?;
    let resp = req
        .header("Authorization", &bearer)
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            leptos::logging::warn!("cells: {op} failed: {err}");
            err
        })?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = super::error::rejection(status, "error", &body);
        leptos::logging::warn!("cells: {op} rejected: {err}");
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        leptos::logging::warn!("cells: {op} failed: {err}");
        err
    })
}
