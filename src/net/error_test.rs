use super::*;

// =============================================================
// Rejection body classification
// =============================================================

#[test]
fn rejection_surfaces_auth_message_field() {
    let err = rejection(401, "message", r#"{"message":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() }
    );
}

#[test]
fn rejection_surfaces_membership_error_field() {
    let err = rejection(403, "error", r#"{"error":"Already a member"}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 403, message: "Already a member".to_owned() }
    );
}

#[test]
fn rejection_ignores_the_other_field() {
    let err = rejection(403, "error", r#"{"message":"wrong field"}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 403, message: "request failed with status 403".to_owned() }
    );
}

#[test]
fn rejection_with_json_body_missing_field_is_generic() {
    let err = rejection(500, "message", r#"{"ok":false}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 500, message: "request failed with status 500".to_owned() }
    );
}

#[test]
fn rejection_with_non_json_body_is_network_error() {
    let err = rejection(502, "error", "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Network("unreadable response (status 502)".to_owned()));
}

// =============================================================
// Display + status accessor
// =============================================================

#[test]
fn rejected_displays_bare_message() {
    let err = ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn network_display_is_prefixed() {
    let err = ApiError::Network("timed out".to_owned());
    assert_eq!(err.to_string(), "network error: timed out");
}

#[test]
fn status_is_present_only_for_rejections() {
    let rejected = ApiError::Rejected { status: 403, message: "no".to_owned() };
    assert_eq!(rejected.status(), Some(403));
    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
}
