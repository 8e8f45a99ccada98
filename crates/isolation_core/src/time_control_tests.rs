use super::*;
use std::cell::Cell;
use std::thread;

#[test]
fn test_time_control_counts_down() {
    let tc = TimeControl::with_millis(10_000);
    let left = tc.remaining_ms();
    assert!(left > 9_000 && left <= 10_000);
}

#[test]
fn test_time_control_goes_negative_after_expiry() {
    let tc = TimeControl::with_millis(5);
    thread::sleep(Duration::from_millis(20));
    assert!(tc.remaining_ms() < 0);
    assert!(tc.elapsed() >= Duration::from_millis(20));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    thread::sleep(Duration::from_millis(5));
    assert_eq!(tc.remaining_ms(), i64::MAX);
}

#[test]
fn test_closure_is_a_clock() {
    let ticks = Cell::new(1_000i64);
    let clock = || {
        ticks.set(ticks.get() - 100);
        ticks.get()
    };
    assert_eq!(clock.remaining_ms(), 900);
    assert_eq!(clock.remaining_ms(), 800);
    assert_eq!(Unlimited.remaining_ms(), i64::MAX);
}
