use super::*;

#[test]
fn validate_login_input_trims_email() {
    let creds = validate_login_input("  a@b.com ", "Secret123").expect("valid");
    assert_eq!(creds, Credentials::new("a@b.com", "Secret123"));
}

#[test]
fn validate_login_input_rejects_bad_email() {
    assert_eq!(validate_login_input("", "Secret123"), Err(EMAIL_HINT));
    assert_eq!(validate_login_input("ab.com", "Secret123"), Err(EMAIL_HINT));
    assert_eq!(validate_login_input("@b.com", "Secret123"), Err(EMAIL_HINT));
    assert_eq!(validate_login_input("a@", "Secret123"), Err(EMAIL_HINT));
    assert_eq!(validate_login_input("a b@c.com", "Secret123"), Err(EMAIL_HINT));
}

#[test]
fn validate_login_input_requires_password_mix() {
    assert_eq!(validate_login_input("a@b.com", "Sec123"), Err(PASSWORD_HINT));
    assert_eq!(validate_login_input("a@b.com", "secret123"), Err(PASSWORD_HINT));
    assert_eq!(validate_login_input("a@b.com", "SECRET123"), Err(PASSWORD_HINT));
    assert_eq!(validate_login_input("a@b.com", "SecretPass"), Err(PASSWORD_HINT));
}

#[test]
fn validate_login_input_accepts_exactly_eight_chars() {
    assert!(validate_login_input("a@b.com", "Abcdef12").is_ok());
}

#[test]
fn password_is_not_trimmed() {
    let creds = validate_login_input("a@b.com", " Secret123 ").expect("valid");
    assert_eq!(creds.password, " Secret123 ");
}
