//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    /// Component-wise interpolation; `fraction` is not clamped so spring
    /// overshoot stays visible.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Color {
        Color(
            self.0 + (target.0 - self.0) * fraction,
            self.1 + (target.1 - self.1) * fraction,
            self.2 + (target.2 - self.2) * fraction,
            self.3 + (target.3 - self.3) * fraction,
        )
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::from_rgb_u8(255, 59, 48);
    pub const GREEN: Color = Color::from_rgb_u8(52, 199, 89);
    pub const BLUE: Color = Color::from_rgb_u8(0, 122, 255);
    pub const CYAN: Color = Color::from_rgb_u8(50, 173, 230);
    pub const ORANGE: Color = Color::from_rgb_u8(255, 149, 0);
    pub const INDIGO: Color = Color::from_rgb_u8(88, 86, 214);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}
