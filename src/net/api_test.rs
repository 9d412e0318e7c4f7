use super::*;

#[test]
fn auth_endpoints_are_fixed_paths() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(REGISTER_ENDPOINT, "/api/auth/register");
    assert_eq!(RECLAMATION_ENDPOINT, "/api/reclamations");
}

#[test]
fn login_payload_carries_email_and_password() {
    assert_eq!(
        login_payload("ana@example.com", "s3cret"),
        serde_json::json!({ "email": "ana@example.com", "password": "s3cret" })
    );
}

#[test]
fn reclamation_payload_carries_subject_and_message() {
    assert_eq!(
        reclamation_payload("Broken kiln", "The kiln in room 2 no longer heats."),
        serde_json::json!({
            "subject": "Broken kiln",
            "message": "The kiln in room 2 no longer heats."
        })
    );
}
