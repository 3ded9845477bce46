use animations_demo::{
    pivot_angle, FrameSnapshot, NodeId, PropertyKey, RenderedNode, Showcase, ShowcaseOptions,
    RING_FADE_SCALE,
};
use kinetic_testing::prelude::*;
use kinetic_ui_graphics::{Color, Point, TransformOrigin};

fn launch() -> Showcase {
    Showcase::launch(ShowcaseOptions::default())
}

fn node<'a>(frame: &'a FrameSnapshot, id: NodeId) -> &'a RenderedNode {
    frame
        .node(id)
        .unwrap_or_else(|| panic!("{id:?} missing from {frame}"))
}

#[test]
fn pulse_target_is_set_once_on_appear() {
    let mut showcase = launch();
    assert_eq!(showcase.state().pulse_amount, 1.5);

    for _ in 0..5 {
        showcase.tap_pulse();
        showcase.advance_frame();
        assert_eq!(showcase.state().pulse_amount, 1.5);
    }
}

#[test]
fn pulse_ring_grows_fades_and_restarts_forever() {
    let mut showcase = launch();
    let mut scales = Vec::new();
    for _ in 0..240 {
        showcase.advance_frame();
        let frame = showcase.frame();
        let ring = node(&frame, NodeId::PulseRing);
        assert_approx_eq(ring.layer.alpha, (1.5 - ring.layer.scale).clamp(0.0, 1.0));
        scales.push(ring.layer.scale);
    }

    assert!(showcase.is_animating(), "the ring never stops");
    assert!(has_intermediate(&scales, 1.0, 1.5));
    let restarts = scales.windows(2).filter(|pair| pair[1] < pair[0] - 0.2).count();
    assert!(restarts >= 2, "saw {restarts} restarts in four seconds");
}

#[test]
fn ring_fades_at_fixed_scale_whatever_the_pulse_target() {
    let options = ShowcaseOptions {
        pulse_target: 2.0,
        ..ShowcaseOptions::default()
    };
    let mut showcase = Showcase::launch(options);
    let mut faded = 0;
    for _ in 0..75 {
        showcase.advance_frame();
        let frame = showcase.frame();
        let ring = &node(&frame, NodeId::PulseRing).layer;
        assert_approx_eq(ring.alpha, (1.5 - ring.scale).clamp(0.0, 1.0));
        if ring.scale >= RING_FADE_SCALE {
            assert_eq!(ring.alpha, 0.0);
            faded += 1;
        }
    }
    assert!(faded > 0, "the ring grew past its fade scale");
}

#[test]
fn grow_adds_one_step_per_tap_without_animation() {
    let mut showcase = launch();
    let initial = showcase.state().scale_step;
    for taps in 1..=12 {
        showcase.grow();
        assert_eq!(showcase.state().scale_step, initial + taps);
    }

    let frame = showcase.frame();
    assert_eq!(node(&frame, NodeId::GrowButton).layer.scale, 13.0);
}

#[test]
fn stepper_animates_with_bounded_repeat_and_clamps() {
    let mut showcase = launch();
    showcase.step_scale(1);
    assert_eq!(showcase.state().scale_step, 2);
    assert!(showcase.animator().is_running(PropertyKey::GrowScale));

    let mut scales = Vec::new();
    while showcase.animator().is_running(PropertyKey::GrowScale) && scales.len() < 400 {
        showcase.advance_frame();
        scales.push(node(&showcase.frame(), NodeId::GrowButton).layer.scale);
    }
    // Three 700ms ease-in-out runs, the middle one reversed.
    let peak = scales
        .iter()
        .position(|scale| *scale > 1.9)
        .expect("first run reaches the target");
    assert!(scales[peak..].iter().any(|scale| *scale < 1.1));
    assert_eq!(*scales.last().expect("frames ran"), 2.0);

    for _ in 0..20 {
        showcase.step_scale(-1);
    }
    assert_eq!(showcase.state().scale_step, 1);
}

#[test]
fn stepper_recovers_after_grow_leaves_its_range() {
    let mut showcase = launch();
    for _ in 0..11 {
        showcase.grow();
    }
    assert_eq!(showcase.state().scale_step, 12);

    showcase.step_scale(1);
    assert_eq!(showcase.state().scale_step, 12);
    assert!(!showcase.animator().is_running(PropertyKey::GrowScale));

    showcase.step_scale(-1);
    assert_eq!(showcase.state().scale_step, 11);
    assert!(showcase.animator().is_running(PropertyKey::GrowScale));
    showcase.settle(PropertyKey::GrowScale, 400);
    assert_eq!(node(&showcase.frame(), NodeId::GrowButton).layer.scale, 11.0);
}

#[test]
fn turn_adds_exactly_one_revolution_per_tap() {
    let mut showcase = launch();
    let mut previous = showcase.state().rotation_amount;
    for _ in 0..4 {
        showcase.turn();
        let rotation = showcase.state().rotation_amount;
        assert_eq!(rotation - previous, 360.0);
        assert!(rotation > previous);
        previous = rotation;
        showcase.advance_by_millis(100);
    }

    showcase.settle(PropertyKey::TurnRotation, 1000);
    let frame = showcase.frame();
    assert_eq!(node(&frame, NodeId::TurnButton).layer.rotation_y, 1.0 + 4.0 * 360.0);
}

#[test]
fn shape_toggle_round_trips_after_two_taps() {
    let mut showcase = launch();
    let before = node(&showcase.frame(), NodeId::ChangeButton).clone();
    assert_eq!(before.fill, Color::ORANGE);
    assert_eq!(before.corner_radius, 0.0);

    showcase.toggle_shape();
    showcase.advance_by_millis(200);
    let midway = node(&showcase.frame(), NodeId::ChangeButton).clone();
    assert_ne!(midway.fill, before.fill);
    assert_ne!(midway.corner_radius, 0.0);

    showcase.settle(PropertyKey::ChangeCornerRadius, 2000);
    let enabled = node(&showcase.frame(), NodeId::ChangeButton).clone();
    assert_eq!(enabled.fill, Color::CYAN);
    assert_eq!(enabled.corner_radius, 50.0);

    showcase.toggle_shape();
    showcase.settle(PropertyKey::ChangeCornerRadius, 2000);
    showcase.settle(PropertyKey::ChangeFill, 100);
    let after = node(&showcase.frame(), NodeId::ChangeButton).clone();
    assert_eq!(after.fill, before.fill);
    assert_eq!(after.corner_radius, before.corner_radius);
    assert!(!showcase.state().shape_enabled);
}

#[test]
fn letters_trail_the_drag_in_a_wave() {
    let mut showcase = launch();
    showcase.drag_changed(Point::new(100.0, 20.0));
    showcase.advance_by_millis(300);

    let offsets = showcase.frame().letter_offsets();
    assert_eq!(offsets.len(), "Text Animation".chars().count());
    assert!(offsets[0] > 0.0, "first letter moves immediately");
    assert_eq!(*offsets.last().expect("letters"), 0.0, "last letter still waits");
    assert!(
        offsets.windows(2).all(|pair| pair[0] >= pair[1]),
        "earlier letters lead: {offsets:?}"
    );
}

#[test]
fn drag_end_resets_offset_and_flips_color_for_any_path() {
    let paths: [&[Point]; 3] = [
        &[Point::new(10.0, 0.0)],
        &[Point::new(-50.0, 80.0), Point::new(-20.0, 5.0), Point::new(300.0, -12.0)],
        &[],
    ];
    for path in paths {
        let mut showcase = launch();
        let text_enabled = showcase.state().text_enabled;
        for translation in path {
            showcase.drag_changed(*translation);
            showcase.advance_frame();
        }
        showcase.drag_ended();

        assert_eq!(showcase.state().drag_offset, Point::ZERO);
        assert_eq!(showcase.state().text_enabled, !text_enabled);

        showcase.advance_by_millis(1500);
        let frame = showcase.frame();
        assert!(frame.letter_offsets().iter().all(|offset| *offset == 0.0));
        assert_eq!(node(&frame, NodeId::Letter(13)).fill, Color::BLUE);
    }
}

#[test]
fn view_toggle_scales_in_and_fades_out() {
    let mut showcase = launch();
    assert!(!showcase.frame().contains(NodeId::ShowingView));

    showcase.toggle_view();
    showcase.advance_by_millis(100);
    let entering = node(&showcase.frame(), NodeId::ShowingView).layer;
    assert!(entering.scale < 1.0);
    assert_eq!(entering.alpha, 1.0);

    showcase.advance_by_millis(400);
    assert!(node(&showcase.frame(), NodeId::ShowingView).layer.is_identity());

    showcase.toggle_view();
    showcase.advance_by_millis(100);
    let exiting = node(&showcase.frame(), NodeId::ShowingView).layer;
    assert_eq!(exiting.scale, 1.0);
    assert!(exiting.alpha < 1.0);

    showcase.advance_by_millis(400);
    assert!(!showcase.frame().contains(NodeId::ShowingView));
}

#[test]
fn pivot_visibility_follows_tap_parity() {
    for taps in 0..6 {
        let mut showcase = launch();
        for _ in 0..taps {
            showcase.toggle_transition();
            showcase.advance_frame();
        }
        assert_eq!(showcase.state().transition_visible, taps % 2 == 1, "{taps} taps");
    }
}

#[test]
fn pivot_overlay_swings_in_about_its_corner() {
    let mut showcase = launch();
    showcase.toggle_transition();
    showcase.advance_by_millis(150);

    let presence = showcase.animator().pivot_visibility().presence();
    let overlay = node(&showcase.frame(), NodeId::PivotOverlay).layer;
    assert!(presence > 0.0 && presence < 1.0);
    assert_approx_eq(overlay.rotation_z, pivot_angle(presence));
    assert_eq!(overlay.transform_origin, TransformOrigin::TOP_LEADING);
    assert!(overlay.clip);

    showcase.advance_by_millis(400);
    let settled = node(&showcase.frame(), NodeId::PivotOverlay).layer;
    assert_eq!(settled.rotation_z, 0.0);

    showcase.toggle_transition();
    showcase.advance_by_millis(500);
    let frame = showcase.frame();
    assert!(!frame.contains(NodeId::PivotOverlay));
    assert!(frame.contains(NodeId::PivotBase));
    assert!(frame.contains(NodeId::PivotCaption));
}
