//! Pure graphics primitives: colors, geometry and layer transforms.

mod color;
mod geometry;
mod layer;

pub use color::*;
pub use geometry::*;
pub use layer::*;

#[cfg(test)]
#[path = "tests/layer_tests.rs"]
mod tests;
