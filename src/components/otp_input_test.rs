use super::*;

#[test]
fn resend_label_idle() {
    assert_eq!(
        resend_label(ResendCooldown::default(), false, "Resend Code"),
        "Resend Code"
    );
}

#[test]
fn resend_label_counts_down() {
    let mut cooldown = ResendCooldown::default();
    cooldown.start();
    assert_eq!(resend_label(cooldown, false, "Resend Code"), "Resend in 60s");
    cooldown.tick();
    assert_eq!(resend_label(cooldown, false, "Resend Code"), "Resend in 59s");
}

#[test]
fn resend_label_sending_wins() {
    let mut cooldown = ResendCooldown::default();
    cooldown.start();
    assert_eq!(resend_label(cooldown, true, "Resend Code"), "Sending...");
}
