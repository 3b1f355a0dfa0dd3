use super::*;

// =============================================================
// purchase_email
// =============================================================

#[test]
fn signed_in_email_wins_over_typed() {
    assert_eq!(purchase_email(Some("me@uni.edu"), "other@x.io"), Ok("me@uni.edu".to_owned()));
}

#[test]
fn typed_email_used_when_anonymous() {
    assert_eq!(purchase_email(None, "  buyer@x.io "), Ok("buyer@x.io".to_owned()));
    assert_eq!(purchase_email(Some("  "), "buyer@x.io"), Ok("buyer@x.io".to_owned()));
}

#[test]
fn missing_email_is_rejected() {
    assert_eq!(purchase_email(None, "   "), Err("Email is required."));
}
