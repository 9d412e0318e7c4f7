use super::*;

#[test]
fn validate_reclamation_input_trims_both_fields() {
    assert_eq!(
        validate_reclamation_input("  Broken kiln  ", "  It no longer heats.  "),
        Ok(("Broken kiln".to_owned(), "It no longer heats.".to_owned()))
    );
}

#[test]
fn validate_reclamation_input_requires_subject() {
    assert_eq!(
        validate_reclamation_input("   ", "It no longer heats."),
        Err("Enter a subject and a message.")
    );
}

#[test]
fn validate_reclamation_input_requires_message() {
    assert_eq!(
        validate_reclamation_input("Broken kiln", ""),
        Err("Enter a subject and a message.")
    );
}
