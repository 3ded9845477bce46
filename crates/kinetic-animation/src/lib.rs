//! Time-based animations, spring physics and enter/exit transitions,
//! driven by the [`kinetic_core::FrameClock`].

#![allow(non_snake_case)]

mod animation;
mod transition;

pub use animation::*;
pub use transition::*;
