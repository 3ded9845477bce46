use super::*;

use kinetic_core::Runtime;
use kinetic_testing::prelude::*;

#[test]
fn tween_interpolates_over_time_and_lands_on_target() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut alpha = Animatable::new(0.0f32, runtime.handle());
    let state = alpha.state();

    alpha.animateTo(1.0, AnimationType::Tween(AnimationSpec::linear(300)));
    assert_eq!(state.get(), 0.0, "nothing moves before the first frame");
    assert!(runtime.needs_frame());

    let samples = driver.sample(32, || state.get());

    assert!(has_intermediate(&samples, 0.0, 1.0));
    assert!(is_non_decreasing(&samples));
    assert_eq!(*samples.last().expect("samples recorded"), 1.0);
    assert!(!alpha.is_running());
    assert!(driver.is_idle());
}

#[test]
fn tween_delay_holds_the_start_value() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut offset = Animatable::new(0.0f32, runtime.handle());

    offset.animateTo(
        100.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(200)),
    );
    // The first frame stamps the start time, the delay runs from there.
    driver.advance_frames(12);
    assert_eq!(offset.value(), 0.0);

    driver.run_until_idle(60);
    assert_eq!(offset.value(), 100.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut value = Animatable::new(0.0f32, runtime.handle());

    value.animateTo(10.0, AnimationType::Tween(AnimationSpec::linear(1000)));
    driver.advance_frames(20);
    let midway = value.value();
    assert!(midway > 0.0 && midway < 10.0);

    value.animateTo(-10.0, AnimationType::Tween(AnimationSpec::linear(200)));
    driver.advance_frame();
    assert_approx_eq(value.value(), midway);

    driver.run_until_idle(60);
    assert_eq!(value.value(), -10.0);
}

#[test]
fn snap_cancels_running_animation() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut value = Animatable::new(1.0f32, runtime.handle());

    value.animateTo(2.0, AnimationType::Tween(AnimationSpec::linear(500)));
    driver.advance_frames(3);
    value.snapTo(5.0);

    assert!(!value.is_running());
    assert!(driver.is_idle());
    driver.advance_frames(5);
    assert_eq!(value.value(), 5.0);
}

#[test]
fn finite_reverse_repeat_bounces_and_settles_on_target() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut scale = Animatable::new(1.0f32, runtime.handle());

    scale.animateTo(
        2.0,
        AnimationType::repeat(3, AnimationSpec::linear(100), RepeatMode::Reverse),
    );
    let samples = driver.sample(25, || scale.value());

    // Reaches near the target, comes back toward the start, then settles.
    let peak = samples
        .iter()
        .position(|value| *value > 1.8)
        .expect("first iteration climbs");
    assert!(samples[peak..].iter().any(|value| *value < 1.2));
    assert_eq!(scale.value(), 2.0);
    assert!(!scale.is_running());
}

#[test]
fn infinite_restart_repeat_never_settles() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut ring = Animatable::new(1.0f32, runtime.handle());

    ring.animateTo(
        1.5,
        AnimationType::repeat_forever(AnimationSpec::ease_in_out(1250), RepeatMode::Restart),
    );
    let samples = driver.sample(300, || ring.value());

    assert!(ring.is_running());
    assert!(!driver.is_idle());
    assert!(samples.iter().all(|value| (0.999..=1.501).contains(value)));
    // Restart without reversal: the value drops back to the start each cycle.
    let restarts = samples.windows(2).filter(|pair| pair[1] < pair[0] - 0.2).count();
    assert!(restarts >= 3, "saw {restarts} restarts");
    assert_eq!(ring.target(), 1.5);
}

#[test]
fn dropping_animatable_cancels_its_frames() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut ring = Animatable::new(1.0f32, runtime.handle());
    ring.animateTo(
        1.5,
        AnimationType::repeat_forever(AnimationSpec::linear(100), RepeatMode::Restart),
    );
    driver.advance_frames(3);
    assert!(!driver.is_idle());

    drop(ring);
    assert!(driver.is_idle());
}

#[test]
fn bouncy_spring_overshoots_then_settles() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut rotation = Animatable::new(0.0f32, runtime.handle());

    rotation.animateTo(360.0, AnimationType::spring(1000, 0.5));
    let mut peak = 0.0f32;
    for _ in 0..600 {
        if driver.is_idle() {
            break;
        }
        driver.advance_frame();
        peak = peak.max(rotation.value());
    }

    assert!(peak > 360.0, "bounce 0.5 should overshoot, peak {peak}");
    assert!(driver.is_idle(), "spring should settle");
    assert_eq!(rotation.value(), 360.0);
}

#[test]
fn colors_and_points_animate() {
    let runtime = Runtime::new();
    let mut driver = FrameDriver::new(runtime.handle());
    let mut fill = Animatable::new(Color::ORANGE, runtime.handle());
    let mut offset = Animatable::new(Point::new(30.0, -12.0), runtime.handle());

    fill.animateTo(Color::CYAN, AnimationType::tween(350, Easing::EaseInOut));
    offset.animateTo(Point::ZERO, AnimationType::Tween(AnimationSpec::linear(350)));
    driver.advance_frames(10);
    assert_ne!(fill.value(), Color::ORANGE);
    assert_ne!(offset.value(), Point::ZERO);

    driver.run_until_idle(120);
    assert_eq!(fill.value(), Color::CYAN);
    assert_eq!(offset.value(), Point::ZERO);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearEasing,
    ];

    for easing in easings {
        assert!(approx_eq(easing.transform(0.0), 0.0, 0.01), "{easing:?}");
        assert!(approx_eq(easing.transform(1.0), 1.0, 0.01), "{easing:?}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let early = Easing::EaseInOut.transform(0.25);
    let late = Easing::EaseInOut.transform(0.75);
    assert!(approx_eq(early + late, 1.0, 0.01));
    assert!(early < 0.25);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_presets() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert_eq!(SpringSpec::bouncy().damping_ratio, 0.5);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
}

#[test]
fn duration_bounce_spring_maps_to_physics() {
    let spring = SpringSpec::with_duration_bounce(1000, 0.8);
    assert!(approx_eq(spring.damping_ratio, 0.2, 1e-6));
    let expected_stiffness = (2.0 * std::f32::consts::PI).powi(2);
    assert!(approx_eq(spring.stiffness, expected_stiffness, 1e-3));

    let clamped = SpringSpec::with_duration_bounce(500, 2.0);
    assert!(clamped.damping_ratio > 0.0);
}

#[test]
fn repeatable_requires_at_least_one_iteration() {
    let spec = RepeatableSpec::repeatable(0, AnimationSpec::linear(10), RepeatMode::Restart);
    assert_eq!(spec.iterations, Some(1));
    assert!(!spec.is_infinite());
    assert!(RepeatableSpec::infinite(AnimationSpec::linear(10), RepeatMode::Reverse).is_infinite());
}

#[test]
fn retarget_from_an_earlier_frame_callback_keeps_one_registration() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let mut driver = FrameDriver::new(handle.clone());
    let mut offset = Animatable::new(0.0f32, handle.clone());

    let mut retarget = offset.clone();
    let _pending = handle.frame_clock().with_frame_nanos(move |_| {
        retarget.animateTo(10.0, AnimationType::Tween(AnimationSpec::linear(100)));
    });
    offset.animateTo(5.0, AnimationType::Tween(AnimationSpec::linear(100)));
    assert_eq!(runtime.pending_frame_callbacks(), 2);

    driver.advance_frame();
    assert_eq!(runtime.pending_frame_callbacks(), 1);
    assert_eq!(offset.target(), 10.0);

    for _ in 0..10 {
        driver.advance_frame();
        assert!(runtime.pending_frame_callbacks() <= 1);
    }
    assert_eq!(offset.value(), 10.0);
    assert!(!offset.is_running());
    assert!(driver.is_idle());
}
