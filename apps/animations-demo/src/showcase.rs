use kinetic_core::{Runtime, RuntimeHandle, NANOS_PER_MILLI};
use kinetic_ui_graphics::Point;

use crate::animator::PropertyAnimator;
use crate::config::ShowcaseOptions;
use crate::frame::FrameSnapshot;
use crate::scene::{PropertyKey, PropertyValue, Scene};
use crate::state::{ShowcaseEvent, ShowcaseState};

/// The showcase screen: state, animations and a frame clock.
///
/// All mutation happens through [`Showcase::dispatch`] on the caller's
/// thread; animations advance only when frames are pumped.
pub struct Showcase {
    runtime: Runtime,
    options: ShowcaseOptions,
    state: ShowcaseState,
    animator: PropertyAnimator,
    frame_time_nanos: u64,
}

impl Showcase {
    /// Build the screen with its initial state, before it appears.
    pub fn new(options: ShowcaseOptions) -> Self {
        let runtime = Runtime::new();
        let state = ShowcaseState::default();
        let scene = Scene::compose(&state, &options);
        let animator = PropertyAnimator::new(runtime.handle(), scene, options.clone());
        Self {
            runtime,
            options,
            state,
            animator,
            frame_time_nanos: 0,
        }
    }

    /// Build the screen and deliver the appear event.
    pub fn launch(options: ShowcaseOptions) -> Self {
        let mut showcase = Self::new(options);
        showcase.dispatch(ShowcaseEvent::Appear);
        showcase
    }

    pub fn dispatch(&mut self, event: ShowcaseEvent) {
        log::debug!("dispatch {event:?}");
        let transaction = self.state.apply(event, &self.options);
        let scene = Scene::compose(&self.state, &self.options);
        self.animator.commit(scene, transaction);
    }

    pub fn tap_pulse(&mut self) {
        self.dispatch(ShowcaseEvent::TapPulse);
    }

    pub fn grow(&mut self) {
        self.dispatch(ShowcaseEvent::Grow);
    }

    pub fn step_scale(&mut self, delta: i32) {
        self.dispatch(ShowcaseEvent::StepScale(delta));
    }

    pub fn turn(&mut self) {
        self.dispatch(ShowcaseEvent::Turn);
    }

    pub fn toggle_shape(&mut self) {
        self.dispatch(ShowcaseEvent::ToggleShape);
    }

    pub fn toggle_view(&mut self) {
        self.dispatch(ShowcaseEvent::ToggleView);
    }

    pub fn toggle_transition(&mut self) {
        self.dispatch(ShowcaseEvent::ToggleTransition);
    }

    pub fn drag_changed(&mut self, translation: Point) {
        self.dispatch(ShowcaseEvent::DragChanged(translation));
    }

    pub fn drag_ended(&mut self) {
        self.dispatch(ShowcaseEvent::DragEnded);
    }

    pub fn state(&self) -> &ShowcaseState {
        &self.state
    }

    pub fn options(&self) -> &ShowcaseOptions {
        &self.options
    }

    pub fn animator(&self) -> &PropertyAnimator {
        &self.animator
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Current presented value of `key`.
    pub fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.animator.value(key)
    }

    /// True while any animation still wants frames. The pulse ring keeps
    /// this true forever once the screen appeared.
    pub fn is_animating(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += self.options.frame_interval_nanos;
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Pump whole frames until at least `millis` have passed.
    pub fn advance_by_millis(&mut self, millis: u64) -> u64 {
        let deadline = self
            .frame_time_nanos
            .saturating_add(millis.saturating_mul(NANOS_PER_MILLI));
        let mut frames = 0;
        while self.frame_time_nanos < deadline {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Pump frames until `key` stops animating or `max_frames` ran.
    pub fn settle(&mut self, key: PropertyKey, max_frames: u64) -> u64 {
        let mut frames = 0;
        while self.animator.is_running(key) && frames < max_frames {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot::capture(
            self.frame_time_nanos,
            &self.animator.committed().letters,
            &self.animator,
        )
    }
}
