use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  admin  ", " secret "),
        Ok(("admin".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("admin", ""),
        Err("Enter both username and password.")
    );
}
