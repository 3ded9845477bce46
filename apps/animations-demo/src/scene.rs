//! Target values of every animatable property, derived from state.

use kinetic_animation::AnimationType;
use kinetic_ui_graphics::{Color, Point};

use crate::config::ShowcaseOptions;
use crate::state::ShowcaseState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKey {
    PulseScale,
    GrowScale,
    TurnRotation,
    ChangeCornerRadius,
    ChangeFill,
    LetterOffset(usize),
    LetterFill(usize),
}

impl PropertyKey {
    /// Curve attached to the property itself. It overrides any transaction
    /// animation whenever the property changes.
    pub fn implicit_curve(&self, options: &ShowcaseOptions) -> Option<AnimationType> {
        match self {
            PropertyKey::PulseScale => Some(options.pulse_animation()),
            PropertyKey::ChangeCornerRadius => Some(options.corner_animation()),
            PropertyKey::ChangeFill => Some(options.default_animation()),
            PropertyKey::LetterOffset(index) | PropertyKey::LetterFill(index) => {
                Some(options.letter_animation(*index))
            }
            PropertyKey::GrowScale | PropertyKey::TurnRotation => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Color(Color),
    Offset(Point),
}

impl PropertyValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_offset(&self) -> Option<Point> {
        match self {
            PropertyValue::Offset(offset) => Some(*offset),
            _ => None,
        }
    }
}

/// One render pass worth of targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    properties: Vec<(PropertyKey, PropertyValue)>,
    pub letters: Vec<char>,
    pub view_visible: bool,
    pub transition_visible: bool,
}

impl Scene {
    pub fn compose(state: &ShowcaseState, options: &ShowcaseOptions) -> Scene {
        let letters: Vec<char> = options.text.chars().collect();
        let mut properties = Vec::with_capacity(5 + letters.len() * 2);

        properties.push((PropertyKey::PulseScale, PropertyValue::Float(state.pulse_amount)));
        properties.push((
            PropertyKey::GrowScale,
            PropertyValue::Float(state.scale_step as f32),
        ));
        properties.push((
            PropertyKey::TurnRotation,
            PropertyValue::Float(state.rotation_amount),
        ));
        let (radius, fill) = if state.shape_enabled {
            (options.corner_radius, Color::CYAN)
        } else {
            (0.0, Color::ORANGE)
        };
        properties.push((PropertyKey::ChangeCornerRadius, PropertyValue::Float(radius)));
        properties.push((PropertyKey::ChangeFill, PropertyValue::Color(fill)));

        let letter_fill = if state.text_enabled {
            Color::BLUE
        } else {
            Color::RED
        };
        for index in 0..letters.len() {
            properties.push((
                PropertyKey::LetterOffset(index),
                PropertyValue::Offset(state.drag_offset),
            ));
            properties.push((PropertyKey::LetterFill(index), PropertyValue::Color(letter_fill)));
        }

        Scene {
            properties,
            letters,
            view_visible: state.view_visible,
            transition_visible: state.transition_visible,
        }
    }

    pub fn properties(&self) -> &[(PropertyKey, PropertyValue)] {
        &self.properties
    }

    pub fn get(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.properties
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| *value)
    }

    /// Keys whose target differs from `previous` (or that `previous` lacks).
    pub fn changed_from(&self, previous: &Scene) -> Vec<PropertyKey> {
        self.properties
            .iter()
            .filter(|(key, value)| previous.get(*key) != Some(*value))
            .map(|(key, _)| *key)
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
