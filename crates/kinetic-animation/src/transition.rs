//! Enter/exit transitions for conditionally shown content.
//!
//! A [`Transition`] maps a presence fraction (0 = fully hidden, 1 = fully
//! present) to a [`GraphicsLayer`]. [`VisibilityAnimator`] animates that
//! fraction when the content is shown or hidden.

use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use kinetic_core::{RuntimeHandle, State};
use kinetic_ui_graphics::{GraphicsLayer, TransformOrigin};
use smallvec::SmallVec;

use crate::{Animatable, AnimationType, Lerp};

/// A value that renders as a graphics layer, used by modifier transitions.
pub trait LayerModifier {
    fn layer(&self) -> GraphicsLayer;
}

#[derive(Clone)]
enum TransitionEffect {
    Scale { initial_scale: f32 },
    Opacity { initial_alpha: f32 },
    Modifier(Rc<dyn Fn(f32) -> GraphicsLayer>),
}

impl TransitionEffect {
    fn layer_at(&self, presence: f32) -> GraphicsLayer {
        match self {
            TransitionEffect::Scale { initial_scale } => GraphicsLayer {
                scale: Lerp::lerp(initial_scale, &1.0, presence),
                transform_origin: TransformOrigin::CENTER,
                ..GraphicsLayer::default()
            },
            TransitionEffect::Opacity { initial_alpha } => GraphicsLayer {
                alpha: Lerp::lerp(initial_alpha, &1.0, presence).clamp(0.0, 1.0),
                ..GraphicsLayer::default()
            },
            TransitionEffect::Modifier(layer_for) => layer_for(presence),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TransitionEffect::Scale { .. } => "scale",
            TransitionEffect::Opacity { .. } => "opacity",
            TransitionEffect::Modifier(_) => "modifier",
        }
    }
}

/// Composable list of transition effects. Combine with `+`.
#[derive(Clone, Default)]
pub struct Transition {
    effects: SmallVec<[TransitionEffect; 2]>,
}

impl Transition {
    /// No visual change; content pops in and out.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Scale from `initial_scale` around the center.
    pub fn scale(initial_scale: f32) -> Self {
        Self::single(TransitionEffect::Scale { initial_scale })
    }

    /// Fade from `initial_alpha`.
    pub fn opacity(initial_alpha: f32) -> Self {
        Self::single(TransitionEffect::Opacity { initial_alpha })
    }

    /// Interpolate a modifier between its `active` (hidden) and `identity`
    /// (present) configurations.
    pub fn modifier<M>(active: M, identity: M) -> Self
    where
        M: Lerp + LayerModifier + 'static,
    {
        Self::single(TransitionEffect::Modifier(Rc::new(move |presence| {
            active.lerp(&identity, presence).layer()
        })))
    }

    fn single(effect: TransitionEffect) -> Self {
        let mut effects = SmallVec::new();
        effects.push(effect);
        Self { effects }
    }

    pub fn combined(mut self, other: Transition) -> Self {
        self.effects.extend(other.effects);
        self
    }

    pub fn layer_at(&self, presence: f32) -> GraphicsLayer {
        self.effects
            .iter()
            .fold(GraphicsLayer::default(), |layer, effect| {
                layer.then(&effect.layer_at(presence))
            })
    }
}

impl Add for Transition {
    type Output = Transition;

    fn add(self, rhs: Transition) -> Transition {
        self.combined(rhs)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.effects.iter().map(TransitionEffect::name))
            .finish()
    }
}

/// Insertion and removal sides of a transition.
#[derive(Clone, Debug, Default)]
pub struct TransitionPair {
    pub insertion: Transition,
    pub removal: Transition,
}

impl TransitionPair {
    pub fn symmetric(transition: Transition) -> Self {
        Self {
            insertion: transition.clone(),
            removal: transition,
        }
    }

    pub fn asymmetric(insertion: Transition, removal: Transition) -> Self {
        Self { insertion, removal }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPhase {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

/// Animates the presence of conditionally rendered content.
pub struct VisibilityAnimator {
    presence: Animatable<f32>,
    visible: bool,
    transitions: TransitionPair,
}

impl VisibilityAnimator {
    pub fn new(visible: bool, transitions: TransitionPair, runtime: RuntimeHandle) -> Self {
        let initial = if visible { 1.0 } else { 0.0 };
        Self {
            presence: Animatable::new(initial, runtime),
            visible,
            transitions,
        }
    }

    /// Show or hide the content. `None` applies the change without animating.
    pub fn set_visible(&mut self, visible: bool, animation: Option<AnimationType>) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        let target = if visible { 1.0 } else { 0.0 };
        match animation {
            Some(animation) => self.presence.animateTo(target, animation),
            None => self.presence.snapTo(target),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn presence(&self) -> f32 {
        self.presence.value()
    }

    pub fn presence_state(&self) -> State<f32> {
        self.presence.state()
    }

    pub fn phase(&self) -> VisibilityPhase {
        match (self.visible, self.presence.is_running()) {
            (true, true) => VisibilityPhase::Entering,
            (true, false) => VisibilityPhase::Visible,
            (false, true) => VisibilityPhase::Exiting,
            (false, false) => VisibilityPhase::Hidden,
        }
    }

    /// Content stays in the tree until its removal transition finishes.
    pub fn is_rendered(&self) -> bool {
        self.phase() != VisibilityPhase::Hidden
    }

    pub fn layer(&self) -> GraphicsLayer {
        let presence = self.presence();
        match self.phase() {
            VisibilityPhase::Exiting => self.transitions.removal.layer_at(presence),
            _ => self.transitions.insertion.layer_at(presence),
        }
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
