//! Tuning constants for the showcase, builder style.
//!
//! ```
//! use animations_demo::ShowcaseOptions;
//!
//! let options = ShowcaseOptions::default()
//!     .with_title("Animations")
//!     .with_stagger_divisor(10.0);
//! assert_eq!(options.stagger_delay_millis(3), 300);
//! ```

use std::ops::RangeInclusive;

use kinetic_animation::{AnimationSpec, AnimationType, RepeatMode};
use kinetic_core::NANOS_PER_MILLI;

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseOptions {
    pub title: String,
    pub frame_interval_nanos: u64,
    /// One grow-and-fade cycle of the ring around the pulse button.
    pub pulse_duration_millis: u64,
    /// Ring scale at the end of a cycle; the ring is fully faded there.
    pub pulse_target: f32,
    /// Letter `i` starts `i / stagger_divisor` seconds after letter 0.
    pub stagger_divisor: f32,
    pub letter_duration_millis: u64,
    pub stepper_range: RangeInclusive<i32>,
    pub stepper_duration_millis: u64,
    pub stepper_iterations: u32,
    pub turn_degrees: f32,
    pub turn_spring_millis: u64,
    pub turn_bounce: f32,
    pub corner_spring_millis: u64,
    pub corner_bounce: f32,
    pub corner_radius: f32,
    pub default_duration_millis: u64,
    pub text: String,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        Self {
            title: "Animations".to_string(),
            frame_interval_nanos: 16_666_667,
            pulse_duration_millis: 1250,
            pulse_target: 1.5,
            stagger_divisor: 20.0,
            letter_duration_millis: 350,
            stepper_range: 1..=10,
            stepper_duration_millis: 700,
            stepper_iterations: 3,
            turn_degrees: 360.0,
            turn_spring_millis: 1000,
            turn_bounce: 0.5,
            corner_spring_millis: 1000,
            corner_bounce: 0.8,
            corner_radius: 50.0,
            default_duration_millis: 350,
            text: "Text Animation".to_string(),
        }
    }
}

impl ShowcaseOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_frame_rate(mut self, frames_per_second: u32) -> Self {
        self.frame_interval_nanos = 1_000_000_000 / u64::from(frames_per_second.max(1));
        self
    }

    pub fn with_pulse_duration(mut self, millis: u64) -> Self {
        self.pulse_duration_millis = millis;
        self
    }

    pub fn with_stagger_divisor(mut self, divisor: f32) -> Self {
        self.stagger_divisor = divisor;
        self
    }

    pub fn with_stepper_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.stepper_range = range;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn frame_interval_millis(&self) -> f32 {
        self.frame_interval_nanos as f32 / NANOS_PER_MILLI as f32
    }

    pub fn stagger_delay_millis(&self, index: usize) -> u64 {
        if self.stagger_divisor <= 0.0 {
            return 0;
        }
        (index as f32 / self.stagger_divisor * 1000.0).round() as u64
    }

    pub fn default_animation(&self) -> AnimationType {
        AnimationType::Tween(AnimationSpec::ease_in_out(self.default_duration_millis))
    }

    pub fn pulse_animation(&self) -> AnimationType {
        AnimationType::repeat_forever(
            AnimationSpec::ease_in_out(self.pulse_duration_millis),
            RepeatMode::Restart,
        )
    }

    pub fn stepper_animation(&self) -> AnimationType {
        AnimationType::repeat(
            self.stepper_iterations,
            AnimationSpec::ease_in_out(self.stepper_duration_millis),
            RepeatMode::Reverse,
        )
    }

    pub fn turn_animation(&self) -> AnimationType {
        AnimationType::spring(self.turn_spring_millis, self.turn_bounce)
    }

    pub fn corner_animation(&self) -> AnimationType {
        AnimationType::spring(self.corner_spring_millis, self.corner_bounce)
    }

    pub fn letter_animation(&self, index: usize) -> AnimationType {
        AnimationType::Tween(
            AnimationSpec::linear(self.letter_duration_millis)
                .with_delay(self.stagger_delay_millis(index)),
        )
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
