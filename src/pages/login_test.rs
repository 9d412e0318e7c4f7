use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@example.com  ", "s3cret"),
        Ok(("ana@example.com".to_owned(), "s3cret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(
        validate_login_input("   ", "s3cret"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("ana@example.com", ""),
        Err("Enter both email and password.")
    );
}
