//! Animation specs and the frame-driven [`Animatable`].
//!
//! Note: `animateTo` and `snapTo` keep Jetpack Compose's camelCase names.

use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use kinetic_core::{
    FrameCallbackRegistration, MutableState, RuntimeHandle, State, NANOS_PER_MILLI,
};
use kinetic_ui_graphics::{Color, Point};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Color::lerp(self, target, fraction)
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

/// Easing functions for animations matching Jetpack Compose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching x, bisection if it stalls.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut low = 0.0;
        let mut high = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Tween specification: duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn ease_in_out(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::EaseInOut)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = bouncy, > 1.0 = over-damped.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Settling thresholds, expressed in start-to-target progress units.
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Build a spring from a perceptual duration and bounce.
    ///
    /// The undamped period equals `duration_millis`; `bounce` 0 is critically
    /// damped and values toward 1 oscillate longer.
    pub fn with_duration_bounce(duration_millis: u64, bounce: f32) -> Self {
        let duration_secs = duration_millis.max(1) as f32 / 1000.0;
        let angular_frequency = 2.0 * PI / duration_secs;
        Self {
            damping_ratio: 1.0 - bounce.clamp(0.0, 0.99),
            stiffness: angular_frequency * angular_frequency,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Every iteration runs start -> target.
    Restart,
    /// Odd iterations run target -> start.
    Reverse,
}

/// A tween repeated a fixed number of times, or forever when `iterations`
/// is `None`. Finite repeats always settle on the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatableSpec {
    pub animation: AnimationSpec,
    pub iterations: Option<u32>,
    pub repeat_mode: RepeatMode,
}

impl RepeatableSpec {
    pub fn repeatable(iterations: u32, animation: AnimationSpec, repeat_mode: RepeatMode) -> Self {
        Self {
            animation,
            iterations: Some(iterations.max(1)),
            repeat_mode,
        }
    }

    pub fn infinite(animation: AnimationSpec, repeat_mode: RepeatMode) -> Self {
        Self {
            animation,
            iterations: None,
            repeat_mode,
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.iterations.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
    Repeatable(RepeatableSpec),
}

impl AnimationType {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        AnimationType::Tween(AnimationSpec::tween(duration_millis, easing))
    }

    pub fn spring(duration_millis: u64, bounce: f32) -> Self {
        AnimationType::Spring(SpringSpec::with_duration_bounce(duration_millis, bounce))
    }

    pub fn repeat_forever(animation: AnimationSpec, repeat_mode: RepeatMode) -> Self {
        AnimationType::Repeatable(RepeatableSpec::infinite(animation, repeat_mode))
    }

    pub fn repeat(iterations: u32, animation: AnimationSpec, repeat_mode: RepeatMode) -> Self {
        AnimationType::Repeatable(RepeatableSpec::repeatable(iterations, animation, repeat_mode))
    }
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Sub-step for spring integration, in seconds.
const SPRING_TIMESTEP: f32 = 0.004;

/// Generic animatable value holder.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    animation_type: AnimationType,
    /// Fraction of the way from `start` to `target`; may overshoot.
    progress: f32,
    velocity: f32,
    running: bool,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    /// Bumped per scheduled frame; a callback carrying an older value is stale.
    frame_generation: u64,
}

impl<T: Lerp + Clone + 'static> AnimatableInner<T> {
    fn apply_progress(&mut self) {
        self.current = self.start.lerp(&self.target, self.progress);
        self.state.set_value(self.current.clone());
    }

    fn settle(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.progress = 0.0;
        self.velocity = 0.0;
        self.running = false;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.state.set_value(self.target.clone());
    }

    /// Returns true while more frames are needed.
    fn step_tween(
        &mut self,
        spec: AnimationSpec,
        iterations: Option<u32>,
        repeat_mode: RepeatMode,
        elapsed_nanos: u64,
    ) -> bool {
        let delay_nanos = spec.delay_millis * NANOS_PER_MILLI;
        if elapsed_nanos < delay_nanos {
            return true;
        }
        let running_nanos = elapsed_nanos - delay_nanos;
        let duration_nanos = (spec.duration_millis * NANOS_PER_MILLI).max(1);
        let iteration = running_nanos / duration_nanos;
        if let Some(count) = iterations {
            if iteration >= u64::from(count) {
                self.settle();
                return false;
            }
        }
        let linear = (running_nanos % duration_nanos) as f32 / duration_nanos as f32;
        let fraction = match repeat_mode {
            RepeatMode::Reverse if iteration % 2 == 1 => 1.0 - linear,
            _ => linear,
        };
        self.progress = spec.easing.transform(fraction);
        self.apply_progress();
        true
    }

    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        let Some(last) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return true;
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();

        // Damped harmonic oscillator in progress space, target at 1.0.
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = SPRING_TIMESTEP.min(remaining);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress += self.velocity * step;
            remaining -= step;
        }
        self.progress = self.progress.clamp(-1.0, 2.0);

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = (self.progress - 1.0).abs() < spec.position_threshold;
        if at_rest && near_target {
            self.settle();
            false
        } else {
            self.apply_progress();
            true
        }
    }
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            progress: 0.0,
            velocity: 0.0,
            running: false,
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            frame_generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`.
    pub fn animateTo(&mut self, target: T, animation: AnimationType) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.progress = 0.0;
            inner.velocity = 0.0;
            inner.running = true;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            log::debug!("animateTo with {animation:?}");
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `target`, cancelling any running animation.
    pub fn snapTo(&mut self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.target = target;
        inner.settle();
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (runtime, generation) = {
            let mut inner = this.borrow_mut();
            if inner.registration.is_some() {
                return;
            }
            inner.frame_generation += 1;
            (inner.runtime.clone(), inner.frame_generation)
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, generation, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, generation: u64, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            // Retargeted after this callback left the queue; the newer
            // registration is still pending and owns the next step.
            if inner.frame_generation != generation {
                log::trace!("dropping stale frame callback");
                return;
            }
            if let Some(registration) = inner.registration.take() {
                registration.disarm();
            }
            if !inner.running {
                return;
            }
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);

            let animation_type = inner.animation_type;
            match animation_type {
                AnimationType::Tween(spec) => {
                    inner.step_tween(spec, Some(1), RepeatMode::Restart, elapsed_nanos)
                }
                AnimationType::Repeatable(spec) => inner.step_tween(
                    spec.animation,
                    spec.iterations,
                    spec.repeat_mode,
                    elapsed_nanos,
                ),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
