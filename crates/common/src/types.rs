use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Flat RGB fill color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Background the demo clears to before drawing.
    pub const SLATE: Self = Self::rgb(0.2, 0.3, 0.3);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

/// Axis-aligned rectangle a shape's center is kept inside of.
///
/// Both ends are inclusive: a coordinate sitting exactly on `min` or `max`
/// is still inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Normalized device coordinates, `[-1, 1]` on both axes.
    pub const NORMALIZED: Self = Self {
        min: Vec2::new(-1.0, -1.0),
        max: Vec2::new(1.0, 1.0),
    };

    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max.x
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.max.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::NORMALIZED
    }
}
