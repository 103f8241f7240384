use casement::Easing;

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
    // Quadratic: slower start.
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    // Quadratic: faster start.
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_expo_boundaries() {
    assert_eq!(Easing::ExpoIn.apply(0.0), 0.0);
    assert_eq!(Easing::ExpoOut.apply(1.0), 1.0);
    // Near-boundary values converge.
    assert!(Easing::ExpoIn.apply(0.001) < 0.01);
    assert!(Easing::ExpoOut.apply(0.999) > 0.99);
}

#[test]
fn test_easing_expo_shape() {
    // ExpoOut covers most of the distance early.
    assert!(Easing::ExpoOut.apply(0.3) > 0.8);
    // ExpoIn covers almost nothing early.
    assert!(Easing::ExpoIn.apply(0.3) < 0.01);
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}
