use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::net::types::Role;

/// Drive a future that settles without suspending, as login/register do when
/// the network layer fails immediately.
fn settle<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not settle in one poll"),
    }
}

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
// SessionState invariants
// =============================================================

#[test]
fn hydrating_state_is_loading_and_unauthenticated() {
    let state = SessionState::hydrating();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.profile.is_none());
}

#[test]
fn anonymous_state_is_settled_and_unauthenticated() {
    let state = SessionState::anonymous();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_state_derives_from_credential() {
    let state = SessionState::authenticated("tok-1".to_owned(), member());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.credential.as_deref(), Some("tok-1"));
    assert_eq!(state.profile, Some(member()));
}

#[test]
fn default_state_matches_anonymous() {
    assert_eq!(SessionState::default(), SessionState::anonymous());
}

// =============================================================
// Post-login destination
// =============================================================

#[test]
fn post_login_destination_honors_parked_route() {
    assert_eq!(post_login_destination(Some("/cells/42".to_owned())), "/cells/42");
}

#[test]
fn post_login_destination_falls_back_to_dashboard() {
    assert_eq!(post_login_destination(None), DEFAULT_LANDING_ROUTE);
}

// =============================================================
// Session handle transitions (storage is inert without a browser)
// =============================================================

#[test]
fn new_session_starts_hydrating() {
    let session = Session::new();
    assert_eq!(session.get_untracked(), SessionState::hydrating());
}

#[test]
fn hydrate_without_stored_credential_settles_anonymous() {
    let session = Session::new();
    session.hydrate();
    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn logout_returns_home_and_clears_state() {
    let session = Session::new();
    session.state.set(SessionState::authenticated("tok-1".to_owned(), member()));
    assert_eq!(session.logout(), HOME_ROUTE);
    let state = session.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.profile.is_none());
    assert!(!state.loading);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_login_settles_loading_back_to_false() {
    let session = Session::new();
    session.hydrate();
    // Without a browser the network layer rejects immediately.
    let result = settle(session.login("ana@example.com", "bad"));
    assert!(result.is_err());
    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_register_settles_loading_back_to_false() {
    let session = Session::new();
    session.hydrate();
    let form = RegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "s3cret".to_owned(),
    };
    let result = settle(session.register(&form));
    assert!(result.is_err());
    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn logout_is_safe_when_already_anonymous() {
    let session = Session::new();
    session.hydrate();
    assert_eq!(session.logout(), HOME_ROUTE);
    assert!(!session.get_untracked().is_authenticated());
}
