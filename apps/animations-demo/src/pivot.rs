//! Corner-pivot transition: content swings in around its top-leading corner.

use kinetic_animation::{LayerModifier, Lerp, Transition};
use kinetic_ui_graphics::{GraphicsLayer, TransformOrigin};

/// Rotation while fully hidden.
pub const PIVOT_HIDDEN_DEGREES: f32 = -90.0;

/// Rotation about a fixed anchor, clipped to the node bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRotate {
    pub degrees: f32,
    pub anchor: TransformOrigin,
}

impl CornerRotate {
    pub fn new(degrees: f32, anchor: TransformOrigin) -> Self {
        Self { degrees, anchor }
    }
}

impl Lerp for CornerRotate {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        CornerRotate {
            degrees: Lerp::lerp(&self.degrees, &target.degrees, fraction),
            anchor: self.anchor,
        }
    }
}

impl LayerModifier for CornerRotate {
    fn layer(&self) -> GraphicsLayer {
        GraphicsLayer {
            rotation_z: self.degrees,
            transform_origin: self.anchor,
            clip: true,
            ..GraphicsLayer::default()
        }
    }
}

pub fn pivot() -> Transition {
    Transition::modifier(
        CornerRotate::new(PIVOT_HIDDEN_DEGREES, TransformOrigin::TOP_LEADING),
        CornerRotate::new(0.0, TransformOrigin::TOP_LEADING),
    )
}

/// Rotation for a presence fraction: -90 hidden, 0 present.
pub fn pivot_angle(presence: f32) -> f32 {
    Lerp::lerp(&PIVOT_HIDDEN_DEGREES, &0.0, presence)
}

#[cfg(test)]
#[path = "tests/pivot_tests.rs"]
mod tests;
