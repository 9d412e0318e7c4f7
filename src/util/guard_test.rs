use super::*;
use crate::net::types::{Role, UserProfile};
use crate::state::session::SessionState;

fn member() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Member,
        avatar_url: None,
    }
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_renders_placeholder_while_hydrating() {
    assert_eq!(guard_protected(&SessionState::hydrating()), GuardDecision::Loading);
}

#[test]
fn protected_redirects_anonymous_visitors_to_login() {
    assert_eq!(guard_protected(&SessionState::anonymous()), GuardDecision::RedirectToLogin);
}

#[test]
fn protected_allows_authenticated_visitors() {
    let state = SessionState::authenticated("tok-1".to_owned(), member());
    assert_eq!(guard_protected(&state), GuardDecision::Allow);
}

// =============================================================
// Guest-only routes
// =============================================================

#[test]
fn guest_only_renders_placeholder_while_hydrating() {
    assert_eq!(guard_guest_only(&SessionState::hydrating()), GuardDecision::Loading);
}

#[test]
fn guest_only_redirects_authenticated_visitors_to_dashboard() {
    let state = SessionState::authenticated("tok-1".to_owned(), member());
    assert_eq!(guard_guest_only(&state), GuardDecision::RedirectToDashboard);
}

#[test]
fn guest_only_allows_anonymous_visitors() {
    assert_eq!(guard_guest_only(&SessionState::anonymous()), GuardDecision::Allow);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn repeated_evaluation_with_unchanged_state_is_identical() {
    let anonymous = SessionState::anonymous();
    let first = guard_protected(&anonymous);
    let second = guard_protected(&anonymous);
    assert_eq!(first, second);

    let authed = SessionState::authenticated("tok-1".to_owned(), member());
    assert_eq!(guard_guest_only(&authed), guard_guest_only(&authed));
}
