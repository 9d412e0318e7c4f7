//! Session manager: the single owner of client authentication state.
//!
//! DESIGN
//! ======
//! The lifecycle is a small state machine: a fresh session starts hydrating,
//! settles to authenticated or anonymous after one read of durable storage,
//! and afterwards moves between those two states via login/register/logout.
//! All consumers share one [`Session`] handle provided through Leptos
//! context; each transition is a single signal write, so an observer never
//! sees a half-updated snapshot. Reading the session outside the provider
//! panics (`expect_context`), which is the intended loud failure for a
//! wiring bug.
//!
//! Overlapping login/register calls are not serialized; the browser event
//! loop makes each settle a single atomic write, so the last call to settle
//! wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net;
use crate::net::error::ApiError;
use crate::net::types::{RegisterForm, UserProfile};
use crate::util::storage;

/// Where a successful login lands when no route was parked.
pub const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

/// Where logout lands.
pub const HOME_ROUTE: &str = "/";

/// Snapshot of the current authentication state.
///
/// `is_authenticated` is derived from the credential rather than stored, so
/// the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Opaque bearer token, present only when authenticated.
    pub credential: Option<String>,
    /// Profile of the signed-in member, present only when authenticated.
    pub profile: Option<UserProfile>,
    /// True during initial hydration and while a login/registration call is
    /// in flight; guaranteed to reach `false` once the operation settles.
    pub loading: bool,
}

impl SessionState {
    /// Initial state before durable storage has been consulted.
    pub fn hydrating() -> Self {
        Self { credential: None, profile: None, loading: true }
    }

    /// Settled state with no credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Settled state for a signed-in member.
    pub fn authenticated(credential: String, profile: UserProfile) -> Self {
        Self { credential: Some(credential), profile: Some(profile), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Pick the post-login destination, honoring a parked route once.
fn post_login_destination(intended: Option<String>) -> String {
    intended.unwrap_or_else(|| DEFAULT_LANDING_ROUTE.to_owned())
}

/// Shared session manager handle.
///
/// Cheap to copy; all clones observe the same underlying signal. Provide one
/// instance at the application root and fetch it with
/// `expect_context::<Session>()`.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session in the hydrating state.
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::hydrating()) }
    }

    /// Reactive read of the current snapshot.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Non-reactive read, for event handlers.
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Settle the initial state from durable storage.
    ///
    /// Local-only: no network call is made, so a stale persisted token
    /// surfaces as a 401 on the first authenticated API call rather than
    /// here.
    pub fn hydrate(&self) {
        let next = match storage::load_credential() {
            (Some(token), Some(profile)) => SessionState::authenticated(token, profile),
            _ => SessionState::anonymous(),
        };
        self.state.set(next);
    }

    /// Authenticate against the backend.
    ///
    /// On success the credential is persisted, the state becomes
    /// authenticated in one signal write, and the parked intended route (or
    /// the default landing route) is returned for the caller to navigate to.
    /// On failure stored credentials are left untouched and `loading` is
    /// still reset.
    ///
    /// # Errors
    ///
    /// The [`ApiError`] from the login endpoint, with the server's own
    /// message when it sent one.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        self.state.update(|s| s.loading = true);
        match net::api::login(email, password).await {
            Ok(auth) => {
                storage::save_credential(&auth.token, &auth.user);
                self.state.set(SessionState::authenticated(auth.token, auth.user));
                Ok(post_login_destination(storage::take_intended_route()))
            }
            Err(e) => {
                self.state.update(|s| s.loading = false);
                Err(e)
            }
        }
    }

    /// Create an account and establish a session in the same motion.
    ///
    /// Registration always lands on the default landing route; a route
    /// parked before registration is discarded so it cannot hijack a later
    /// login.
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::login`].
    pub async fn register(&self, form: &RegisterForm) -> Result<String, ApiError> {
        self.state.update(|s| s.loading = true);
        match net::api::register(form).await {
            Ok(auth) => {
                storage::save_credential(&auth.token, &auth.user);
                self.state.set(SessionState::authenticated(auth.token, auth.user));
                let _ = storage::take_intended_route();
                Ok(DEFAULT_LANDING_ROUTE.to_owned())
            }
            Err(e) => {
                self.state.update(|s| s.loading = false);
                Err(e)
            }
        }
    }

    /// Clear the stored credential and return to the anonymous state.
    ///
    /// Always succeeds; returns the home route for the caller to navigate to.
    pub fn logout(&self) -> &'static str {
        storage::clear_credential();
        self.state.set(SessionState::anonymous());
        HOME_ROUTE
    }
}
