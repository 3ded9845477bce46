//! Core runtime for the kinetic animation showcase.
//!
//! Provides the single-threaded frame-callback queue that drives every
//! animation, a [`FrameClock`] wrapper around it, and observable
//! [`MutableState`] cells.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
