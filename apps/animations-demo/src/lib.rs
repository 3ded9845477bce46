//! Single-screen animation showcase.
//!
//! [`Showcase`] owns the view-local [`ShowcaseState`], turns every event into
//! a new [`Scene`] and lets the [`PropertyAnimator`] interpolate between the
//! previous and the new scene on the attached curves.

pub mod animator;
pub mod config;
pub mod frame;
pub mod pivot;
pub mod scene;
pub mod script;
pub mod showcase;
pub mod state;

pub use animator::{PropertyAnimator, Transaction};
pub use config::ShowcaseOptions;
pub use frame::{FrameSnapshot, NodeId, RenderedNode, RING_FADE_SCALE};
pub use pivot::{pivot, pivot_angle, CornerRotate};
pub use scene::{PropertyKey, PropertyValue, Scene};
pub use script::{
    parse_script, run_script, ScriptError, ScriptStep, ScriptSummary, DEFAULT_SCRIPT,
    MAX_WAIT_MILLIS,
};
pub use showcase::Showcase;
pub use state::{ShowcaseEvent, ShowcaseState};
