use super::*;

use crate::scene::Scene;
use crate::state::ShowcaseState;

#[test]
fn frame_rate_sets_interval() {
    let options = ShowcaseOptions::default().with_frame_rate(50);
    assert_eq!(options.frame_interval_nanos, 20_000_000);
    assert_eq!(options.frame_interval_millis(), 20.0);
    assert!((ShowcaseOptions::default().frame_interval_millis() - 16.667).abs() < 1e-3);
}

#[test]
fn pulse_duration_feeds_the_repeating_curve() {
    let options = ShowcaseOptions::default().with_pulse_duration(800);
    match options.pulse_animation() {
        AnimationType::Repeatable(spec) => {
            assert!(spec.is_infinite());
            assert_eq!(spec.animation.duration_millis, 800);
            assert_eq!(spec.repeat_mode, RepeatMode::Restart);
        }
        other => panic!("unexpected pulse curve {other:?}"),
    }
}

#[test]
fn custom_text_sets_the_animated_letters() {
    let options = ShowcaseOptions::default().with_text("Hi!");
    let scene = Scene::compose(&ShowcaseState::default(), &options);
    assert_eq!(scene.letters, vec!['H', 'i', '!']);
}

#[test]
fn stepper_range_bounds_steps() {
    let options = ShowcaseOptions::default().with_stepper_range(1..=3);
    let mut state = ShowcaseState::default();
    for _ in 0..5 {
        state.step_scale(1, &options);
    }
    assert_eq!(state.scale_step, 3);
}

#[test]
fn stagger_delay_scales_with_index() {
    let options = ShowcaseOptions::default();
    assert_eq!(options.stagger_delay_millis(0), 0);
    assert_eq!(options.stagger_delay_millis(7), 350);
    assert_eq!(
        ShowcaseOptions::default()
            .with_stagger_divisor(0.0)
            .stagger_delay_millis(7),
        0
    );
}
