use super::*;

#[test]
fn validate_register_input_trims_and_builds_form() {
    let form = validate_register_input(" Ana ", " ana@example.com ", "s3cret").expect("form");
    assert_eq!(form.name, "Ana");
    assert_eq!(form.email, "ana@example.com");
    assert_eq!(form.password, "s3cret");
}

#[test]
fn validate_register_input_requires_name_and_email() {
    assert_eq!(
        validate_register_input("  ", "ana@example.com", "s3cret"),
        Err("Enter your name and email.")
    );
    assert_eq!(
        validate_register_input("Ana", "", "s3cret"),
        Err("Enter your name and email.")
    );
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(
        validate_register_input("Ana", "ana@example.com", "short"),
        Err("Password must be at least 6 characters.")
    );
}
