//! Presented frame: what the screen would draw right now.

use std::fmt;

use kinetic_ui_graphics::{Color, GraphicsLayer, Size, TransformOrigin};

use crate::animator::PropertyAnimator;
use crate::scene::PropertyKey;

const BUTTON_SIZE: Size = Size::new(100.0, 100.0);
const LETTER_SIZE: Size = Size::new(18.0, 30.0);
const SHOWING_VIEW_SIZE: Size = Size::new(150.0, 100.0);
const PIVOT_SIZE: Size = Size::new(200.0, 200.0);

/// Ring scale at which the pulse ring is fully transparent; its opacity is
/// `RING_FADE_SCALE - scale`. The default pulse target grows the ring to
/// exactly this scale.
pub const RING_FADE_SCALE: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeId {
    PulseButton,
    PulseRing,
    GrowButton,
    TurnButton,
    ChangeButton,
    ViewButton,
    Letter(usize),
    ShowingView,
    PivotBase,
    PivotOverlay,
    PivotCaption,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedNode {
    pub id: NodeId,
    pub label: Option<String>,
    pub size: Size,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub corner_radius: f32,
    pub layer: GraphicsLayer,
}

impl RenderedNode {
    fn new(id: NodeId, size: Size, fill: Color) -> Self {
        Self {
            id,
            label: None,
            size,
            fill,
            stroke: None,
            corner_radius: 0.0,
            layer: GraphicsLayer::default(),
        }
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn circle(mut self) -> Self {
        self.corner_radius = self.size.width.min(self.size.height) / 2.0;
        self
    }

    fn layer(mut self, layer: GraphicsLayer) -> Self {
        self.layer = layer;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub frame_time_nanos: u64,
    pub nodes: Vec<RenderedNode>,
}

impl FrameSnapshot {
    pub fn capture(frame_time_nanos: u64, letters: &[char], animator: &PropertyAnimator) -> Self {
        let mut nodes = Vec::with_capacity(12 + letters.len());

        nodes.push(
            RenderedNode::new(NodeId::PulseButton, BUTTON_SIZE, Color::RED)
                .label("Tap Me")
                .circle(),
        );
        let ring_scale = animator.float(PropertyKey::PulseScale);
        let mut ring = RenderedNode::new(NodeId::PulseRing, BUTTON_SIZE, Color::TRANSPARENT)
            .circle()
            .layer(GraphicsLayer {
                scale: ring_scale,
                alpha: (RING_FADE_SCALE - ring_scale).clamp(0.0, 1.0),
                ..GraphicsLayer::default()
            });
        ring.stroke = Some(Color::RED);
        nodes.push(ring);

        nodes.push(
            RenderedNode::new(NodeId::GrowButton, BUTTON_SIZE, Color::BLUE)
                .label("Grow")
                .circle()
                .layer(GraphicsLayer {
                    scale: animator.float(PropertyKey::GrowScale),
                    ..GraphicsLayer::default()
                }),
        );
        nodes.push(
            RenderedNode::new(NodeId::TurnButton, BUTTON_SIZE, Color::GREEN)
                .label("Turn")
                .circle()
                .layer(GraphicsLayer {
                    rotation_y: animator.float(PropertyKey::TurnRotation),
                    ..GraphicsLayer::default()
                }),
        );

        let mut change = RenderedNode::new(
            NodeId::ChangeButton,
            BUTTON_SIZE,
            animator.color(PropertyKey::ChangeFill),
        )
        .label("Change");
        change.corner_radius = animator.float(PropertyKey::ChangeCornerRadius);
        nodes.push(change);
        nodes.push(
            RenderedNode::new(NodeId::ViewButton, BUTTON_SIZE, Color::INDIGO)
                .label("View")
                .circle(),
        );

        for (index, letter) in letters.iter().enumerate() {
            let offset = animator.offset(PropertyKey::LetterOffset(index));
            nodes.push(
                RenderedNode::new(
                    NodeId::Letter(index),
                    LETTER_SIZE,
                    animator.color(PropertyKey::LetterFill(index)),
                )
                .label(letter.to_string())
                .layer(GraphicsLayer {
                    translation_x: offset.x,
                    translation_y: offset.y,
                    ..GraphicsLayer::default()
                }),
            );
        }

        let view = animator.view_visibility();
        if view.is_rendered() {
            nodes.push(
                RenderedNode::new(NodeId::ShowingView, SHOWING_VIEW_SIZE, Color::GREEN)
                    .label("Showing view")
                    .layer(view.layer()),
            );
        }

        nodes.push(RenderedNode::new(NodeId::PivotBase, PIVOT_SIZE, Color::BLUE));
        let pivot = animator.pivot_visibility();
        if pivot.is_rendered() {
            nodes.push(
                RenderedNode::new(NodeId::PivotOverlay, PIVOT_SIZE, Color::RED)
                    .layer(pivot.layer()),
            );
        }
        nodes.push(
            RenderedNode::new(NodeId::PivotCaption, PIVOT_SIZE, Color::TRANSPARENT)
                .label("Custom Transition"),
        );

        Self {
            frame_time_nanos,
            nodes,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&RenderedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Horizontal offsets of the letters, in order.
    pub fn letter_offsets(&self) -> Vec<f32> {
        self.nodes
            .iter()
            .filter(|node| matches!(node.id, NodeId::Letter(_)))
            .map(|node| node.layer.translation_x)
            .collect()
    }
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame @{:.1}ms", self.frame_time_nanos as f64 / 1e6)?;
        for node in &self.nodes {
            if matches!(node.id, NodeId::Letter(index) if index > 0) {
                continue;
            }
            let layer = &node.layer;
            write!(f, " | {:?}", node.id)?;
            if layer.scale != 1.0 {
                write!(f, " scale={:.2}", layer.scale)?;
            }
            if layer.alpha != 1.0 {
                write!(f, " alpha={:.2}", layer.alpha)?;
            }
            if layer.rotation_y != 0.0 {
                write!(f, " rotY={:.1}", layer.rotation_y)?;
            }
            if layer.rotation_z != 0.0 || layer.transform_origin == TransformOrigin::TOP_LEADING {
                write!(f, " rotZ={:.1}", layer.rotation_z)?;
            }
            if layer.translation_x != 0.0 || layer.translation_y != 0.0 {
                write!(f, " dx={:.1} dy={:.1}", layer.translation_x, layer.translation_y)?;
            }
            if node.id == NodeId::ChangeButton {
                write!(f, " radius={:.1}", node.corner_radius)?;
            }
        }
        Ok(())
    }
}
