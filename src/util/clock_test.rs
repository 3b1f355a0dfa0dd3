use super::*;

#[test]
fn manual_clock_starts_at_given_time() {
    let clock = ManualClock::new(1_000);
    assert_eq!(clock.now_millis(), 1_000);
}

#[test]
fn manual_clock_advance_and_set() {
    let clock = ManualClock::new(0);
    clock.advance(250);
    clock.advance(250);
    assert_eq!(clock.now_millis(), 500);
    clock.set(42);
    assert_eq!(clock.now_millis(), 42);
}

#[test]
fn system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_millis() > 1_577_836_800_000);
}
