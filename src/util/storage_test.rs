#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::types::Role;

fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Member,
        avatar_url: None,
    }
}

// =============================================================
// decode_credential degradation rules
// =============================================================

#[test]
fn decode_round_trips_token_and_profile() {
    let raw = serde_json::to_string(&profile()).expect("profile json");
    let (token, decoded) = decode_credential(Some("tok-1".to_owned()), Some(raw));
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert_eq!(decoded, Some(profile()));
}

#[test]
fn decode_treats_missing_token_as_absence() {
    let raw = serde_json::to_string(&profile()).expect("profile json");
    assert_eq!(decode_credential(None, Some(raw)), (None, None));
}

#[test]
fn decode_treats_missing_profile_as_absence() {
    assert_eq!(decode_credential(Some("tok-1".to_owned()), None), (None, None));
}

#[test]
fn decode_treats_malformed_profile_as_absence() {
    let (token, decoded) =
        decode_credential(Some("tok-1".to_owned()), Some("{not json".to_owned()));
    assert_eq!(token, None);
    assert_eq!(decoded, None);
}

// =============================================================
// Non-hydrate stubs stay inert
// =============================================================

#[test]
fn load_credential_is_empty_without_a_browser() {
    assert_eq!(load_credential(), (None, None));
    assert_eq!(load_token(), None);
}

#[test]
fn clear_credential_is_idempotent() {
    clear_credential();
    clear_credential();
    assert_eq!(load_credential(), (None, None));
}

#[test]
fn take_intended_route_is_none_without_a_browser() {
    save_intended_route("/cells/42");
    assert_eq!(take_intended_route(), None);
}
