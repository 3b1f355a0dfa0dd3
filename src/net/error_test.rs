use super::*;
use serde_json::json;

// =============================================================
// extract_detail
// =============================================================

#[test]
fn extract_detail_prefers_detail_key() {
    let body = json!({ "detail": "Invalid credentials", "message": "other" });
    assert_eq!(extract_detail(&body), Some("Invalid credentials".to_owned()));
}

#[test]
fn extract_detail_falls_back_to_message() {
    assert_eq!(extract_detail(&json!({ "message": "Try later" })), Some("Try later".to_owned()));
}

#[test]
fn extract_detail_reads_field_error_list() {
    let body = json!({ "email": ["user with this email already exists."] });
    assert_eq!(
        extract_detail(&body),
        Some("email: user with this email already exists.".to_owned())
    );
}

#[test]
fn extract_detail_non_field_errors_has_no_prefix() {
    let body = json!({ "non_field_errors": ["Passwords do not match"] });
    assert_eq!(extract_detail(&body), Some("Passwords do not match".to_owned()));
}

#[test]
fn extract_detail_none_for_unrecognized_shapes() {
    assert_eq!(extract_detail(&json!([1, 2])), None);
    assert_eq!(extract_detail(&json!({ "count": 3 })), None);
}

// =============================================================
// ApiError helpers
// =============================================================

#[test]
fn detail_or_uses_fallback_without_detail() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.detail_or("Login failed"), "Login failed");
}

#[test]
fn detail_or_uses_backend_detail() {
    let err = ApiError::Status { status: 400, detail: Some("Bad code".to_owned()) };
    assert_eq!(err.detail_or("Login failed"), "Bad code");
}

#[test]
fn unverified_email_detection() {
    let err = ApiError::Status {
        status: 401,
        detail: Some("Email is not verified".to_owned()),
    };
    assert!(err.is_unverified_email());
    let err = ApiError::Status { status: 401, detail: Some("Verify your email".to_owned()) };
    assert!(err.is_unverified_email());
    let err = ApiError::Status { status: 401, detail: Some("Wrong password".to_owned()) };
    assert!(!err.is_unverified_email());
}

#[test]
fn unauthorized_statuses() {
    assert!(ApiError::Status { status: 401, detail: None }.is_unauthorized());
    assert!(ApiError::MissingCredential.is_unauthorized());
    assert!(!ApiError::Status { status: 500, detail: None }.is_unauthorized());
}

#[test]
fn status_error_display() {
    assert_eq!(ApiError::Status { status: 429, detail: None }.to_string(), "request failed: 429");
}
