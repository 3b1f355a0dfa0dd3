use super::*;

fn form() -> SignUpForm {
    SignUpForm {
        email: " dev@uni.edu ".to_owned(),
        full_name: " Ada Lovelace ".to_owned(),
        password: "secret1".to_owned(),
        password2: "secret1".to_owned(),
        contact: "0712345678".to_owned(),
    }
}

// =============================================================
// Password rules
// =============================================================

#[test]
fn password_pair_must_match() {
    assert_eq!(validate_password_pair("secret1", "secret2"), Err("Passwords do not match"));
}

#[test]
fn password_pair_enforces_minimum_length() {
    assert_eq!(
        validate_password_pair("abc12", "abc12"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(validate_password_pair("abc123", "abc123"), Ok(()));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert_eq!(validate_password_pair("pässwö", "pässwö"), Ok(()));
}

// =============================================================
// SignUpForm::validate
// =============================================================

#[test]
fn valid_form_builds_trimmed_request() {
    let request = form().validate().unwrap();
    assert_eq!(request.email, "dev@uni.edu");
    assert_eq!(request.full_name, "Ada Lovelace");
    assert_eq!(request.contact, "0712345678");
    assert_eq!(request.password, "secret1");
    assert_eq!(request.password2, "secret1");
}

#[test]
fn any_blank_field_is_rejected() {
    let blanks: [fn(&mut SignUpForm); 5] = [
        |f| f.email = "  ".to_owned(),
        |f| f.full_name = String::new(),
        |f| f.password = String::new(),
        |f| f.password2 = String::new(),
        |f| f.contact = " ".to_owned(),
    ];
    for blank in blanks {
        let mut f = form();
        blank(&mut f);
        assert_eq!(f.validate(), Err("Please fill in all fields"));
    }
}

#[test]
fn empty_fields_reported_before_password_rules() {
    let mut f = form();
    f.contact = String::new();
    f.password2 = "different".to_owned();
    assert_eq!(f.validate(), Err("Please fill in all fields"));
}

#[test]
fn mismatched_passwords_rejected() {
    let mut f = form();
    f.password2 = "secret2".to_owned();
    assert_eq!(f.validate(), Err("Passwords do not match"));
}
