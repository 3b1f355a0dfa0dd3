use super::*;

// =============================================================
// validate_email_input
// =============================================================

#[test]
fn validate_email_input_trims_and_requires_value() {
    assert_eq!(validate_email_input("  a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_email_input(" \t "), Err("Please enter your email address"));
}

// =============================================================
// reset_password_href
// =============================================================

#[test]
fn reset_href_carries_email() {
    assert_eq!(reset_password_href("dev@uni.edu"), "/reset-password?email=dev%40uni.edu");
}

#[test]
fn reset_href_escapes_query_metacharacters() {
    assert_eq!(
        reset_password_href("a+b&c=d@x.io"),
        "/reset-password?email=a%2Bb%26c%3Dd%40x.io"
    );
}

#[test]
fn reset_href_encodes_utf8_bytes() {
    assert_eq!(reset_password_href("é"), "/reset-password?email=%C3%A9");
}

#[test]
fn reset_href_keeps_unreserved_characters() {
    assert_eq!(reset_password_href("A-z_0.9~"), "/reset-password?email=A-z_0.9~");
    assert_eq!(reset_password_href("a b"), "/reset-password?email=a%20b");
}
