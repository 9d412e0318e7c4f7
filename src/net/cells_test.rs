use super::*;

#[test]
fn cells_endpoint_is_fixed_path() {
    assert_eq!(CELLS_ENDPOINT, "/api/cellules");
}

#[test]
fn user_cells_endpoint_formats_expected_path() {
    assert_eq!(user_cells_endpoint("u123"), "/api/users/u123/cells");
}

#[test]
fn cell_users_endpoint_formats_expected_path() {
    assert_eq!(cell_users_endpoint(7), "/api/cellules/7/users");
}

#[test]
fn join_response_round_trips_verbatim() {
    // join/quit bodies are backend-owned; the client must not reshape them.
    let body = serde_json::json!({"id": 7, "members": ["u-1", "u-2"]});
    let parsed: serde_json::Value =
        serde_json::from_str(&body.to_string()).expect("join body");
    assert_eq!(parsed, body);
}
