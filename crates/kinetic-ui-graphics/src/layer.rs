use crate::{Point, Size, TransformOrigin};

/// Render-time transform applied to a node. Rotations are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub rotation_z: f32,
    /// Rotation around the vertical axis.
    pub rotation_y: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub transform_origin: TransformOrigin,
    pub clip: bool,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            rotation_z: 0.0,
            rotation_y: 0.0,
            translation_x: 0.0,
            translation_y: 0.0,
            transform_origin: TransformOrigin::CENTER,
            clip: false,
        }
    }
}

impl GraphicsLayer {
    pub fn is_identity(&self) -> bool {
        *self == GraphicsLayer::default()
    }

    /// Stack `other` on top of `self`. Scales and alphas multiply, rotations
    /// and translations add, clipping is sticky. The pivot of a rotating or
    /// scaling `other` wins.
    pub fn then(&self, other: &GraphicsLayer) -> GraphicsLayer {
        let other_transforms =
            other.scale != 1.0 || other.rotation_z != 0.0 || other.rotation_y != 0.0;
        GraphicsLayer {
            alpha: self.alpha * other.alpha,
            scale: self.scale * other.scale,
            rotation_z: self.rotation_z + other.rotation_z,
            rotation_y: self.rotation_y + other.rotation_y,
            translation_x: self.translation_x + other.translation_x,
            translation_y: self.translation_y + other.translation_y,
            transform_origin: if other_transforms {
                other.transform_origin
            } else {
                self.transform_origin
            },
            clip: self.clip || other.clip,
        }
    }

    /// Map a point in local coordinates of a node of `size` through scale,
    /// z-rotation (about the transform origin) and translation.
    pub fn map_point(&self, size: Size, point: Point) -> Point {
        let pivot = self.transform_origin.resolve(size);
        let local = point - pivot;
        let (sin, cos) = self.rotation_z.to_radians().sin_cos();
        let scaled = Point::new(local.x * self.scale, local.y * self.scale);
        let rotated = Point::new(
            scaled.x * cos - scaled.y * sin,
            scaled.x * sin + scaled.y * cos,
        );
        rotated + pivot + Point::new(self.translation_x, self.translation_y)
    }

    /// Apparent horizontal extent factor of a y-rotated node.
    pub fn horizontal_projection(&self) -> f32 {
        self.rotation_y.to_radians().cos()
    }
}
