// Coalescing throttle semantics for pointer input.

use glam::Vec2;
use hero_core::Throttled;

#[test]
fn first_sample_releases_immediately() {
    let mut t: Throttled<i32> = Throttled::new(16.0);
    assert!(t.take_ready(100.0).is_none(), "nothing pushed yet");
    t.push(7);
    assert_eq!(t.take_ready(100.0), Some(7));
    assert!(!t.has_pending());
}

#[test]
fn samples_within_the_window_coalesce_to_the_latest() {
    let mut t: Throttled<i32> = Throttled::new(16.0);
    t.push(1);
    assert_eq!(t.take_ready(0.0), Some(1));

    // Burst inside the 16ms window: only the last value survives.
    t.push(2);
    t.push(3);
    t.push(4);
    assert!(t.take_ready(10.0).is_none());
    assert!(t.has_pending());
    assert_eq!(t.take_ready(16.0), Some(4));
}

#[test]
fn window_reopens_after_each_emission() {
    let mut t: Throttled<i32> = Throttled::new(16.0);
    t.push(1);
    assert_eq!(t.take_ready(0.0), Some(1));
    t.push(2);
    assert_eq!(t.take_ready(16.0), Some(2));
    t.push(3);
    assert!(t.take_ready(31.9).is_none(), "window measured from last emit");
    assert_eq!(t.take_ready(32.0), Some(3));
}

#[test]
fn empty_throttle_never_emits() {
    let mut t: Throttled<Vec2> = Throttled::new(16.0);
    for i in 0..10 {
        assert!(t.take_ready(i as f64 * 100.0).is_none());
    }
}

#[test]
fn pending_value_survives_until_released() {
    let mut t: Throttled<i32> = Throttled::new(16.0);
    t.push(1);
    assert_eq!(t.take_ready(0.0), Some(1));
    t.push(9);
    // Repeated early polls neither drop nor emit the pending sample.
    assert!(t.take_ready(5.0).is_none());
    assert!(t.take_ready(10.0).is_none());
    assert_eq!(t.take_ready(20.0), Some(9));
}
