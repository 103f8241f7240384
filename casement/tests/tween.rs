use std::time::{Duration, Instant};

use casement::{Easing, TransitionConfig, TweenProperty, TweenState};

fn linear(ms: u64) -> TransitionConfig {
    TransitionConfig::new(Duration::from_millis(ms), Easing::Linear)
}

#[test]
fn test_interpolates_linearly() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("knob", TweenProperty::Top, 0.0, 100.0, linear(1000), start);

    let mid = tweens
        .value("knob", TweenProperty::Top, start + Duration::from_millis(500))
        .unwrap();
    assert!((mid - 50.0).abs() < 0.5);
}

#[test]
fn test_retargets_from_current_value() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("bar", TweenProperty::Opacity, 0.0, 1.0, linear(1000), start);

    // Halfway through, retarget back to 0. The new tween starts at 0.5.
    let half = start + Duration::from_millis(500);
    tweens.start("bar", TweenProperty::Opacity, 1.0, 0.0, linear(1000), half);
    let value = tweens.value("bar", TweenProperty::Opacity, half).unwrap();
    assert!((value - 0.5).abs() < 0.01);
}

#[test]
fn test_completion_reported_once() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("menu", TweenProperty::TranslateXPct, 0.0, -100.0, linear(100), start);

    let after = start + Duration::from_millis(200);
    let finished = tweens.tick(after);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].0, "menu");
    assert_eq!(finished[0].2, -100.0);

    // Already pruned: nothing on the next tick.
    assert!(tweens.tick(after + Duration::from_millis(100)).is_empty());
    assert!(!tweens.has_active());
}

#[test]
fn test_set_cancels_tween() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("knob", TweenProperty::Left, 0.0, 50.0, linear(1000), start);
    tweens.set("knob", TweenProperty::Left);

    assert!(tweens.value("knob", TweenProperty::Left, start).is_none());
    assert!(tweens.tick(start + Duration::from_secs(2)).is_empty());
}

#[test]
fn test_zero_duration_completes_immediately() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("panel", TweenProperty::TranslateY, 0.0, -20.0, linear(0), start);

    assert_eq!(
        tweens.value("panel", TweenProperty::TranslateY, start),
        Some(-20.0)
    );
    let finished = tweens.tick(start);
    assert_eq!(finished.len(), 1);
}

#[test]
fn test_cancel_all_for_element() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("a", TweenProperty::Left, 0.0, 1.0, linear(100), start);
    tweens.start("a", TweenProperty::Top, 0.0, 1.0, linear(100), start);
    tweens.start("b", TweenProperty::Left, 0.0, 1.0, linear(100), start);

    tweens.cancel_all("a");
    assert!(tweens.value("a", TweenProperty::Left, start).is_none());
    assert!(tweens.value("b", TweenProperty::Left, start).is_some());
}

#[test]
fn test_next_deadline_is_earliest() {
    let start = Instant::now();
    let mut tweens = TweenState::new();
    tweens.start("a", TweenProperty::Left, 0.0, 1.0, linear(500), start);
    tweens.start("b", TweenProperty::Left, 0.0, 1.0, linear(200), start);

    assert_eq!(
        tweens.next_deadline(),
        Some(start + Duration::from_millis(200))
    );
}
