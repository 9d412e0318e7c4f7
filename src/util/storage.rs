//! Durable credential and intended-route storage over `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches persisted session data. The session
//! manager writes and clears the credential; the membership client reads the
//! token fresh on every call; the route guards park the path a visitor tried
//! to reach before being sent to login.
//!
//! ERROR HANDLING
//! ==============
//! Storage never fails callers: malformed or half-written data reads back as
//! "no credential", and every `web-sys` error is swallowed. Decoding is a
//! pure function so the degradation rules are natively testable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::UserProfile;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "artware_club_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "artware_club_user";
#[cfg(feature = "hydrate")]
const INTENDED_ROUTE_KEY: &str = "artware_club_intended_route";

/// Interpret raw stored values as a credential pair.
///
/// Both halves must be present and the profile must parse; anything else is
/// treated as absence, never as an error.
fn decode_credential(
    raw_token: Option<String>,
    raw_profile: Option<String>,
) -> (Option<String>, Option<UserProfile>) {
    match (raw_token, raw_profile) {
        (Some(token), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => (Some(token), Some(profile)),
            Err(_) => (None, None),
        },
        _ => (None, None),
    }
}

/// Persist the bearer token and profile under the fixed storage keys.
pub fn save_credential(token: &str, profile: &UserProfile) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(profile) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, profile);
    }
}

/// Load the persisted credential pair, or `(None, None)` when nothing usable
/// is stored.
pub fn load_credential() -> (Option<String>, Option<UserProfile>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return (None, None);
        };
        let raw_token = storage.get_item(TOKEN_KEY).ok().flatten();
        let raw_profile = storage.get_item(USER_KEY).ok().flatten();
        decode_credential(raw_token, raw_profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        decode_credential(None, None)
    }
}

/// Read just the bearer token. Used by API calls, which re-read it fresh on
/// every request rather than caching it.
pub fn load_token() -> Option<String> {
    load_credential().0
}

/// Remove the persisted credential pair. Safe to call when nothing is stored.
pub fn clear_credential() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Park the path a visitor tried to reach before redirecting to login.
/// At most one value is stored; a newer attempt overwrites an older one.
pub fn save_intended_route(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(INTENDED_ROUTE_KEY, path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Read and clear the parked route in one step, so it is honored at most
/// once per successful login.
pub fn take_intended_route() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let path = storage.get_item(INTENDED_ROUTE_KEY).ok().flatten()?;
        let _ = storage.remove_item(INTENDED_ROUTE_KEY);
        Some(path)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
