use kinetic_ui_graphics::Point;

use crate::animator::Transaction;
use crate::config::ShowcaseOptions;

/// Input delivered by the host event loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShowcaseEvent {
    /// The screen became visible.
    Appear,
    TapPulse,
    Grow,
    /// Stepper increment (+1) or decrement (-1).
    StepScale(i32),
    Turn,
    ToggleShape,
    ToggleView,
    ToggleTransition,
    DragChanged(Point),
    DragEnded,
}

/// View-local state of the showcase screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseState {
    pub pulse_amount: f32,
    pub rotation_amount: f32,
    pub scale_step: i32,
    pub shape_enabled: bool,
    pub text_enabled: bool,
    pub view_visible: bool,
    pub transition_visible: bool,
    pub drag_offset: Point,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            pulse_amount: 1.0,
            rotation_amount: 1.0,
            scale_step: 1,
            shape_enabled: false,
            text_enabled: false,
            view_visible: false,
            transition_visible: false,
            drag_offset: Point::ZERO,
        }
    }
}

impl ShowcaseState {
    pub fn on_appear(&mut self, pulse_target: f32) {
        self.pulse_amount = pulse_target;
    }

    /// The pulse button has no action; the ring animates on its own.
    pub fn tap_pulse(&mut self) {}

    /// Unbounded and unanimated, unlike the stepper.
    pub fn grow(&mut self) {
        self.scale_step += 1;
    }

    /// Returns false when the step was rejected by the range. A value left
    /// outside the range by [`grow`](Self::grow) can still step back toward it.
    pub fn step_scale(&mut self, delta: i32, options: &ShowcaseOptions) -> bool {
        let (start, end) = (*options.stepper_range.start(), *options.stepper_range.end());
        let next = self.scale_step.saturating_add(delta);
        self.scale_step = match delta.signum() {
            1 if self.scale_step < end => next.min(end),
            -1 if self.scale_step > start => next.max(start),
            _ => return false,
        };
        true
    }

    pub fn turn(&mut self, degrees: f32) {
        self.rotation_amount += degrees;
    }

    pub fn toggle_shape(&mut self) {
        self.shape_enabled = !self.shape_enabled;
    }

    pub fn toggle_view(&mut self) {
        self.view_visible = !self.view_visible;
    }

    pub fn toggle_transition(&mut self) {
        self.transition_visible = !self.transition_visible;
    }

    pub fn drag_changed(&mut self, translation: Point) {
        self.drag_offset = translation;
    }

    pub fn drag_ended(&mut self) {
        self.drag_offset = Point::ZERO;
        self.text_enabled = !self.text_enabled;
    }

    /// Mutate the state for `event` and return the transaction it runs in.
    pub fn apply(&mut self, event: ShowcaseEvent, options: &ShowcaseOptions) -> Transaction {
        match event {
            ShowcaseEvent::Appear => {
                self.on_appear(options.pulse_target);
                Transaction::none()
            }
            ShowcaseEvent::TapPulse => {
                self.tap_pulse();
                Transaction::none()
            }
            ShowcaseEvent::Grow => {
                self.grow();
                Transaction::none()
            }
            ShowcaseEvent::StepScale(delta) => {
                if self.step_scale(delta, options) {
                    Transaction::animated(options.stepper_animation())
                } else {
                    Transaction::none()
                }
            }
            ShowcaseEvent::Turn => {
                self.turn(options.turn_degrees);
                Transaction::animated(options.turn_animation())
            }
            ShowcaseEvent::ToggleShape => {
                self.toggle_shape();
                Transaction::none()
            }
            ShowcaseEvent::ToggleView => {
                self.toggle_view();
                Transaction::animated(options.default_animation())
            }
            ShowcaseEvent::ToggleTransition => {
                self.toggle_transition();
                Transaction::animated(options.default_animation())
            }
            ShowcaseEvent::DragChanged(translation) => {
                self.drag_changed(translation);
                Transaction::none()
            }
            ShowcaseEvent::DragEnded => {
                self.drag_ended();
                Transaction::none()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
