use super::*;

fn filled(code: &str) -> OtpCode {
    let mut otp = OtpCode::new();
    for (i, ch) in code.chars().enumerate() {
        assert!(otp.input(i, &ch.to_string()));
    }
    otp
}

// =============================================================
// Digit entry
// =============================================================

#[test]
fn digits_advance_focus() {
    let mut otp = OtpCode::new();
    assert!(otp.input(0, "4"));
    assert_eq!(otp.focus(), 1);
    assert!(otp.input(1, "2"));
    assert_eq!(otp.focus(), 2);
    assert_eq!(otp.code(), "42");
}

#[test]
fn last_box_keeps_focus() {
    let otp = filled("123456");
    assert_eq!(otp.focus(), 5);
}

#[test]
fn non_digit_is_rejected_without_change() {
    let mut otp = OtpCode::new();
    assert!(otp.input(0, "7"));
    let before = otp;
    assert!(!otp.input(1, "a"));
    assert!(!otp.input(1, "-"));
    assert!(!otp.input(1, "٣"));
    assert_eq!(otp, before);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut otp = OtpCode::new();
    assert!(!otp.input(OTP_LENGTH, "1"));
}

#[test]
fn empty_value_clears_box_and_keeps_focus() {
    let mut otp = filled("12");
    assert!(otp.input(1, ""));
    assert_eq!(otp.digit(1), None);
    assert_eq!(otp.focus(), 1);
}

#[test]
fn overtyping_keeps_last_digit() {
    let mut otp = filled("1");
    assert!(otp.input(0, "19"));
    assert_eq!(otp.digit(0), Some('9'));
}

// =============================================================
// Backspace
// =============================================================

#[test]
fn backspace_on_empty_box_moves_left() {
    let mut otp = filled("42");
    assert_eq!(otp.focus(), 2);
    assert_eq!(otp.backspace(2), 1);
    assert_eq!(otp.code(), "42");
}

#[test]
fn backspace_on_filled_box_clears_in_place() {
    let mut otp = filled("42");
    assert_eq!(otp.backspace(1), 1);
    assert_eq!(otp.code(), "4");
}

#[test]
fn backspace_on_first_empty_box_stays() {
    let mut otp = OtpCode::new();
    assert_eq!(otp.backspace(0), 0);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_requires_six_digits() {
    assert!(!filled("").can_submit(false));
    assert!(!filled("12345").can_submit(false));
    assert!(filled("123456").can_submit(false));
    assert_eq!(filled("123456").code(), "123456");
}

#[test]
fn submit_disabled_while_busy() {
    assert!(!filled("123456").can_submit(true));
}

#[test]
fn gap_in_code_is_not_complete() {
    let mut otp = filled("123456");
    otp.input(2, "");
    assert!(!otp.is_complete());
    assert_eq!(otp.code(), "12456");
}

#[test]
fn clear_resets_boxes_and_focus() {
    let mut otp = filled("123456");
    otp.clear();
    assert_eq!(otp.code(), "");
    assert_eq!(otp.focus(), 0);
}

// =============================================================
// ResendCooldown
// =============================================================

#[test]
fn cooldown_starts_at_sixty_and_blocks_resend() {
    let mut cooldown = ResendCooldown::default();
    assert!(cooldown.can_resend());
    cooldown.start();
    assert_eq!(cooldown.remaining(), 60);
    assert!(!cooldown.can_resend());
}

#[test]
fn cooldown_reenables_after_sixty_ticks() {
    let mut cooldown = ResendCooldown::default();
    cooldown.start();
    for expected in (1..60).rev() {
        assert_eq!(cooldown.tick(), expected);
        assert!(!cooldown.can_resend());
    }
    assert_eq!(cooldown.tick(), 0);
    assert!(cooldown.can_resend());
    assert_eq!(cooldown.tick(), 0);
}
