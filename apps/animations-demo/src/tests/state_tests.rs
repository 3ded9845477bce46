use super::*;

#[test]
fn initial_state_matches_screen_defaults() {
    let state = ShowcaseState::default();
    assert_eq!(state.pulse_amount, 1.0);
    assert_eq!(state.rotation_amount, 1.0);
    assert_eq!(state.scale_step, 1);
    assert!(!state.shape_enabled && !state.text_enabled);
    assert!(!state.view_visible && !state.transition_visible);
    assert_eq!(state.drag_offset, Point::ZERO);
}

#[test]
fn stepper_is_clamped_but_grow_is_not() {
    let options = ShowcaseOptions::default();
    let mut state = ShowcaseState::default();

    assert!(!state.step_scale(-1, &options));
    assert_eq!(state.scale_step, 1);

    for _ in 0..20 {
        state.step_scale(1, &options);
    }
    assert_eq!(state.scale_step, 10);

    state.grow();
    state.grow();
    assert_eq!(state.scale_step, 12);
}

#[test]
fn events_pick_their_transactions() {
    let options = ShowcaseOptions::default();
    let mut state = ShowcaseState::default();

    assert_eq!(state.apply(ShowcaseEvent::Grow, &options), Transaction::none());
    assert_eq!(
        state.apply(ShowcaseEvent::Turn, &options),
        Transaction::animated(options.turn_animation())
    );
    assert_eq!(
        state.apply(ShowcaseEvent::StepScale(1), &options),
        Transaction::animated(options.stepper_animation())
    );
    assert_eq!(
        state.apply(ShowcaseEvent::ToggleTransition, &options),
        Transaction::animated(options.default_animation())
    );
    assert_eq!(
        state.apply(ShowcaseEvent::DragEnded, &options),
        Transaction::none()
    );
}

#[test]
fn drag_end_resets_offset_and_flips_text_color() {
    let options = ShowcaseOptions::default();
    let mut state = ShowcaseState::default();
    state.apply(ShowcaseEvent::DragChanged(Point::new(12.0, -40.0)), &options);
    assert_eq!(state.drag_offset, Point::new(12.0, -40.0));

    state.apply(ShowcaseEvent::DragEnded, &options);
    assert_eq!(state.drag_offset, Point::ZERO);
    assert!(state.text_enabled);
}

#[test]
fn tapping_pulse_changes_nothing() {
    let options = ShowcaseOptions::default();
    let mut state = ShowcaseState::default();
    state.apply(ShowcaseEvent::Appear, &options);
    let before = state.clone();
    state.apply(ShowcaseEvent::TapPulse, &options);
    assert_eq!(state, before);
    assert_eq!(state.pulse_amount, 1.5);
}

#[test]
fn stepper_steps_back_after_grow_overshoots_range() {
    let options = ShowcaseOptions::default();
    let mut state = ShowcaseState::default();
    for _ in 0..11 {
        state.grow();
    }
    assert_eq!(state.scale_step, 12);

    assert!(!state.step_scale(1, &options));
    assert!(state.step_scale(-1, &options));
    assert_eq!(state.scale_step, 11);
    assert!(state.step_scale(-1, &options));
    assert!(state.step_scale(-1, &options));
    assert_eq!(state.scale_step, 9);
    assert!(state.step_scale(1, &options));
    assert_eq!(state.scale_step, 10);
}

#[test]
fn rejected_step_commits_without_animation() {
    let options = ShowcaseOptions::default();
    let mut state = ShowcaseState::default();

    assert_eq!(
        state.apply(ShowcaseEvent::StepScale(-1), &options),
        Transaction::none()
    );
    assert_eq!(state.scale_step, 1);
    assert_eq!(
        state.apply(ShowcaseEvent::StepScale(1), &options),
        Transaction::animated(options.stepper_animation())
    );
}
