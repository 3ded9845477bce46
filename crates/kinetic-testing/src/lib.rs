//! Testing utilities for frame-driven animations.

pub mod assertions;
pub mod frame_driver;

pub use assertions::*;
pub use frame_driver::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::frame_driver::*;
}
