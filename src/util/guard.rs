//! Route access decisions over session state.
//!
//! DESIGN
//! ======
//! Guards are pure functions from a session snapshot to an explicit intent;
//! navigation itself is performed by the adapter components in
//! `components::route_guard`. This keeps the access-control rules testable
//! without a UI runtime, and makes repeated evaluation with unchanged state
//! trivially idempotent.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Route to the login page.
pub const LOGIN_ROUTE: &str = "/login";

/// What a guard wants done for the current navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the guarded content.
    Allow,
    /// Session is still settling; render a placeholder, take no action.
    Loading,
    /// Anonymous visitor on a member-only route; park the path and go to login.
    RedirectToLogin,
    /// Signed-in visitor on a guest-only route; go to the landing page.
    RedirectToDashboard,
}

/// Decision for member-only routes.
pub fn guard_protected(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Decision for guest-only routes (login, registration).
pub fn guard_guest_only(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.is_authenticated() {
        GuardDecision::RedirectToDashboard
    } else {
        GuardDecision::Allow
    }
}
