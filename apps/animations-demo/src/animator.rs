//! State change -> scene diff -> per-property curve -> interpolation.

use kinetic_animation::{
    Animatable, AnimationType, Transition, TransitionPair, VisibilityAnimator,
};
use kinetic_core::RuntimeHandle;
use kinetic_ui_graphics::{Color, Point};
use rustc_hash::FxHashMap;

use crate::config::ShowcaseOptions;
use crate::pivot::pivot;
use crate::scene::{PropertyKey, PropertyValue, Scene};

/// Explicit animation a state change was committed with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transaction {
    pub animation: Option<AnimationType>,
}

impl Transaction {
    pub fn none() -> Self {
        Self { animation: None }
    }

    pub fn animated(animation: AnimationType) -> Self {
        Self {
            animation: Some(animation),
        }
    }
}

enum AnimatedProperty {
    Float(Animatable<f32>),
    Color(Animatable<Color>),
    Offset(Animatable<Point>),
}

impl AnimatedProperty {
    fn new(value: PropertyValue, runtime: RuntimeHandle) -> Self {
        match value {
            PropertyValue::Float(value) => AnimatedProperty::Float(Animatable::new(value, runtime)),
            PropertyValue::Color(color) => AnimatedProperty::Color(Animatable::new(color, runtime)),
            PropertyValue::Offset(offset) => {
                AnimatedProperty::Offset(Animatable::new(offset, runtime))
            }
        }
    }

    /// Returns false if `value` has a different kind than the property.
    fn retarget(&mut self, value: PropertyValue, curve: Option<AnimationType>) -> bool {
        match (self, value) {
            (AnimatedProperty::Float(animatable), PropertyValue::Float(target)) => {
                drive(animatable, target, curve)
            }
            (AnimatedProperty::Color(animatable), PropertyValue::Color(target)) => {
                drive(animatable, target, curve)
            }
            (AnimatedProperty::Offset(animatable), PropertyValue::Offset(target)) => {
                drive(animatable, target, curve)
            }
            _ => return false,
        }
        true
    }

    fn value(&self) -> PropertyValue {
        match self {
            AnimatedProperty::Float(animatable) => PropertyValue::Float(animatable.value()),
            AnimatedProperty::Color(animatable) => PropertyValue::Color(animatable.value()),
            AnimatedProperty::Offset(animatable) => PropertyValue::Offset(animatable.value()),
        }
    }

    fn is_running(&self) -> bool {
        match self {
            AnimatedProperty::Float(animatable) => animatable.is_running(),
            AnimatedProperty::Color(animatable) => animatable.is_running(),
            AnimatedProperty::Offset(animatable) => animatable.is_running(),
        }
    }
}

fn drive<T>(animatable: &mut Animatable<T>, target: T, curve: Option<AnimationType>)
where
    T: kinetic_animation::Lerp + Clone + 'static,
{
    match curve {
        Some(animation) => animatable.animateTo(target, animation),
        None => animatable.snapTo(target),
    }
}

/// Keeps one animatable per scene property plus the two conditional views.
pub struct PropertyAnimator {
    runtime: RuntimeHandle,
    options: ShowcaseOptions,
    properties: FxHashMap<PropertyKey, AnimatedProperty>,
    previous: Scene,
    view: VisibilityAnimator,
    pivot: VisibilityAnimator,
}

impl PropertyAnimator {
    /// Seed every property with the initial scene, without animating.
    pub fn new(runtime: RuntimeHandle, initial: Scene, options: ShowcaseOptions) -> Self {
        let properties = initial
            .properties()
            .iter()
            .map(|(key, value)| (*key, AnimatedProperty::new(*value, runtime.clone())))
            .collect();
        let view = VisibilityAnimator::new(
            initial.view_visible,
            TransitionPair::asymmetric(Transition::scale(0.0), Transition::opacity(0.0)),
            runtime.clone(),
        );
        let pivot = VisibilityAnimator::new(
            initial.transition_visible,
            TransitionPair::symmetric(pivot()),
            runtime.clone(),
        );
        Self {
            runtime,
            options,
            properties,
            previous: initial,
            view,
            pivot,
        }
    }

    /// Diff `scene` against the last committed scene and start animations
    /// for every changed property.
    pub fn commit(&mut self, scene: Scene, transaction: Transaction) {
        let changed = scene.changed_from(&self.previous);
        if !changed.is_empty() {
            log::debug!("scene diff: {changed:?} ({transaction:?})");
        }
        for key in changed {
            let Some(value) = scene.get(key) else {
                continue;
            };
            let curve = key.implicit_curve(&self.options).or(transaction.animation);
            let runtime = self.runtime.clone();
            let property = self
                .properties
                .entry(key)
                .or_insert_with(|| AnimatedProperty::new(value, runtime.clone()));
            if !property.retarget(value, curve) {
                log::warn!("property {key:?} changed kind; replacing without animation");
                *property = AnimatedProperty::new(value, runtime);
            }
        }

        self.view
            .set_visible(scene.view_visible, transaction.animation);
        self.pivot
            .set_visible(scene.transition_visible, transaction.animation);
        self.previous = scene;
    }

    /// Current, possibly mid-animation, value of `key`.
    pub fn value(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.properties.get(&key).map(AnimatedProperty::value)
    }

    pub fn float(&self, key: PropertyKey) -> f32 {
        self.value(key)
            .and_then(|value| value.as_float())
            .unwrap_or_default()
    }

    pub fn color(&self, key: PropertyKey) -> Color {
        self.value(key)
            .and_then(|value| value.as_color())
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn offset(&self, key: PropertyKey) -> Point {
        self.value(key)
            .and_then(|value| value.as_offset())
            .unwrap_or_default()
    }

    pub fn is_running(&self, key: PropertyKey) -> bool {
        self.properties
            .get(&key)
            .map(AnimatedProperty::is_running)
            .unwrap_or(false)
    }

    pub fn committed(&self) -> &Scene {
        &self.previous
    }

    pub fn view_visibility(&self) -> &VisibilityAnimator {
        &self.view
    }

    pub fn pivot_visibility(&self) -> &VisibilityAnimator {
        &self.pivot
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
