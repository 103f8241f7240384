use std::time::{Duration, Instant};

use casement::OneShot;

#[test]
fn test_fires_once_after_deadline() {
    let now = Instant::now();
    let mut timer = OneShot::new();
    timer.arm(now, Duration::from_millis(800));

    assert!(!timer.fire(now + Duration::from_millis(799)));
    assert!(timer.fire(now + Duration::from_millis(800)));
    // Consumed: does not fire again.
    assert!(!timer.fire(now + Duration::from_secs(10)));
    assert!(!timer.is_armed());
}

#[test]
fn test_rearm_replaces_deadline() {
    let now = Instant::now();
    let mut timer = OneShot::new();
    timer.arm(now, Duration::from_millis(100));
    // A new qualifying event pushes the deadline out; timers never stack.
    timer.arm(now + Duration::from_millis(50), Duration::from_millis(100));

    assert!(!timer.fire(now + Duration::from_millis(100)));
    assert!(timer.fire(now + Duration::from_millis(150)));
}

#[test]
fn test_cancel() {
    let now = Instant::now();
    let mut timer = OneShot::new();
    timer.arm(now, Duration::from_millis(100));
    timer.cancel();

    assert!(!timer.is_armed());
    assert!(!timer.fire(now + Duration::from_secs(1)));
    assert_eq!(timer.deadline(), None);
}
