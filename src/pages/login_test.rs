use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com ", "secret"),
        Ok(LoginRequest {
            email: "user@example.com".to_owned(),
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Please fill in all fields"));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("a@b.com", " pw ").unwrap();
    assert_eq!(request.password, " pw ");
}

#[cfg(not(feature = "hydrate"))]
mod native {
    use super::*;
    use crate::test_support::{credentials_with, poll_ready};

    #[test]
    fn sign_in_outside_browser_leaves_no_credential() {
        let config = ApiConfig::with_base_url("http://api.test/");
        let credentials = credentials_with(None);
        let request = validate_login_input("a@b.com", "secret").unwrap();
        assert_eq!(
            poll_ready(sign_in(&config, &credentials, &request)),
            Err(ApiError::Unavailable)
        );
        assert!(!credentials.is_present());
    }
}
