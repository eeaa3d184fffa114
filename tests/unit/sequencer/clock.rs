use super::*;

#[test]
fn manual_clock_clones_share_time() {
    let a = ManualClock::default();
    let b = a.clone();
    a.advance(Millis(40));
    assert_eq!(b.now(), Millis(40));
    b.set(Millis(100));
    assert_eq!(a.now(), Millis(100));
}

#[test]
fn manual_clock_never_goes_backwards() {
    let c = ManualClock::starting_at(Millis(500));
    c.set(Millis(200));
    assert_eq!(c.now(), Millis(500));
}

#[test]
fn monotonic_clock_is_non_decreasing() {
    let c = MonotonicClock::new();
    let a = c.now();
    let b = c.now();
    assert!(b >= a);
}
