use bounce_common::{Bounds, Color};
use glam::Vec2;
use serde::Serialize;

/// Errors from constructing a [`Shape`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("{0} contains a non-finite value")]
    NonFinite(&'static str),
    #[error("polygon radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

/// Which velocity components were negated by an update step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    /// Number of axes that flipped (0, 1 or 2).
    pub fn count(&self) -> usize {
        self.x as usize + self.y as usize
    }
}

/// A flat-colored polygon moving at constant speed inside the normalized
/// viewport.
///
/// Geometry and color are fixed at construction. Position and velocity only
/// change through [`Shape::update`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    geometry: Box<[Vec2]>,
    position: Vec2,
    velocity: Vec2,
    color: Color,
}

impl Shape {
    /// Build a shape from fan-ordered vertices (the first vertex is shared by
    /// every triangle when drawn).
    pub fn new(
        geometry: impl Into<Vec<Vec2>>,
        position: Vec2,
        velocity: Vec2,
        color: Color,
    ) -> Result<Self, ShapeError> {
        let geometry: Vec<Vec2> = geometry.into();
        if geometry.len() < 3 {
            return Err(ShapeError::TooFewVertices(geometry.len()));
        }
        if !geometry.iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite("geometry"));
        }
        if !position.is_finite() {
            return Err(ShapeError::NonFinite("position"));
        }
        if !velocity.is_finite() {
            return Err(ShapeError::NonFinite("velocity"));
        }
        if !color.is_finite() {
            return Err(ShapeError::NonFinite("color"));
        }

        Ok(Self {
            geometry: geometry.into_boxed_slice(),
            position,
            velocity,
            color,
        })
    }

    /// Isosceles triangle with half-extent `size`, apex pointing up.
    pub fn triangle(
        size: f32,
        position: Vec2,
        velocity: Vec2,
        color: Color,
    ) -> Result<Self, ShapeError> {
        Self::new(
            vec![
                Vec2::new(-size, -size),
                Vec2::new(size, -size),
                Vec2::new(0.0, size),
            ],
            position,
            velocity,
            color,
        )
    }

    /// Axis-aligned square with half-extent `size`, counter-clockwise from
    /// the bottom-left corner.
    pub fn square(
        size: f32,
        position: Vec2,
        velocity: Vec2,
        color: Color,
    ) -> Result<Self, ShapeError> {
        Self::new(
            vec![
                Vec2::new(-size, -size),
                Vec2::new(size, -size),
                Vec2::new(size, size),
                Vec2::new(-size, size),
            ],
            position,
            velocity,
            color,
        )
    }

    /// Regular polygon with `sides` vertices on a circle of `radius`, first
    /// vertex straight up.
    pub fn regular_polygon(
        sides: usize,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
        color: Color,
    ) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewVertices(sides));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius(radius));
        }

        let step = std::f32::consts::TAU / sides as f32;
        let geometry: Vec<Vec2> = (0..sides)
            .map(|i| {
                let angle = std::f32::consts::FRAC_PI_2 + step * i as f32;
                Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();

        Self::new(geometry, position, velocity, color)
    }

    pub fn geometry(&self) -> &[Vec2] {
        &self.geometry
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Advance by `dt` seconds, then reflect off the normalized viewport.
    ///
    /// The bounds check runs after the move and only looks at the center, so
    /// a shape can sit past the edge for one frame before it turns around.
    /// Each axis is checked on its own. Reflection only negates a component,
    /// speed is never gained or lost.
    pub fn update(&mut self, dt: f32) -> Reflection {
        self.position += self.velocity * dt;

        let bounds = Bounds::NORMALIZED;
        let mut reflection = Reflection::default();
        if !bounds.contains_x(self.position.x) {
            self.velocity.x = -self.velocity.x;
            reflection.x = true;
        }
        if !bounds.contains_y(self.position.y) {
            self.velocity.y = -self.velocity.y;
            reflection.y = true;
        }
        reflection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_at(position: Vec2, velocity: Vec2) -> Shape {
        Shape::square(0.1, position, velocity, Color::GREEN).unwrap()
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, 1e-6)
    }

    #[test]
    fn moves_without_reflection_inside_bounds() {
        let mut s = shape_at(Vec2::ZERO, Vec2::new(0.3, 0.5));
        let r = s.update(1.0);
        assert!(close(s.position(), Vec2::new(0.3, 0.5)));
        assert_eq!(s.velocity(), Vec2::new(0.3, 0.5));
        assert!(!r.any());
    }

    #[test]
    fn reflects_off_positive_x_edge() {
        let mut s = shape_at(Vec2::new(0.95, 0.0), Vec2::new(0.5, 0.0));
        let r = s.update(0.2);
        assert!(close(s.position(), Vec2::new(1.05, 0.0)));
        assert_eq!(s.velocity(), Vec2::new(-0.5, 0.0));
        assert_eq!(r, Reflection { x: true, y: false });
    }

    #[test]
    fn reflects_off_negative_x_edge() {
        let mut s = shape_at(Vec2::new(-0.95, 0.0), Vec2::new(-0.5, 0.0));
        s.update(0.2);
        assert!(close(s.position(), Vec2::new(-1.05, 0.0)));
        assert_eq!(s.velocity(), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut s = shape_at(Vec2::new(0.4, -0.7), Vec2::new(-0.2, 0.9));
        let r = s.update(0.0);
        assert_eq!(s.position(), Vec2::new(0.4, -0.7));
        assert_eq!(s.velocity(), Vec2::new(-0.2, 0.9));
        assert!(!r.any());
    }

    #[test]
    fn both_axes_flip_independently() {
        let mut s = shape_at(Vec2::new(0.9, -0.9), Vec2::new(1.0, -1.0));
        let r = s.update(0.5);
        assert!(close(s.position(), Vec2::new(1.4, -1.4)));
        assert_eq!(s.velocity(), Vec2::new(-1.0, 1.0));
        assert_eq!(r.count(), 2);

        // Only y leaves the range here; x must keep its sign.
        let mut s = shape_at(Vec2::new(0.0, 0.95), Vec2::new(0.4, 0.5));
        let r = s.update(0.2);
        assert_eq!(s.velocity(), Vec2::new(0.4, -0.5));
        assert_eq!(r, Reflection { x: false, y: true });
    }

    #[test]
    fn boundary_itself_does_not_reflect() {
        let mut s = shape_at(Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.0));
        s.update(1.0);
        assert_eq!(s.position(), Vec2::new(1.0, 0.0));
        assert_eq!(s.velocity(), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn speed_is_preserved_for_any_step() {
        let coords = [-1.0, -0.6, -0.05, 0.0, 0.3, 0.99, 1.0];
        let speeds = [-2.0, -0.5, 0.0, 0.25, 1.5];
        let dts = [0.0, 0.001, 0.016, 0.2, 1.0, 10.0];

        for &px in &coords {
            for &py in &coords {
                for &vx in &speeds {
                    for &vy in &speeds {
                        for &dt in &dts {
                            let before = Vec2::new(vx, vy);
                            let mut s = shape_at(Vec2::new(px, py), before);
                            s.update(dt);
                            assert_eq!(s.velocity().abs(), before.abs());
                        }
                    }
                }
            }
        }
    }

    /// The check runs after moving, so the center ends up past the edge for
    /// a frame. With a short follow-up frame it is still outside and the
    /// velocity flips straight back.
    #[test]
    fn overshoot_is_visible_for_one_frame() {
        let mut s = shape_at(Vec2::new(0.95, 0.0), Vec2::new(0.5, 0.0));
        s.update(0.2);
        assert!(s.position().x > 1.0);
        assert_eq!(s.velocity().x, -0.5);

        // A full frame back brings it inside again.
        let mut back = s.clone();
        back.update(0.2);
        assert!(close(back.position(), Vec2::new(0.95, 0.0)));
        assert_eq!(back.velocity().x, -0.5);

        // A short frame leaves it outside, so it reflects again.
        s.update(0.05);
        assert!(close(s.position(), Vec2::new(1.025, 0.0)));
        assert_eq!(s.velocity().x, 0.5);
    }

    #[test]
    fn geometry_is_untouched_by_updates() {
        let mut s = Shape::triangle(0.1, Vec2::ZERO, Vec2::new(3.0, 2.0), Color::RED).unwrap();
        let before = s.geometry().to_vec();
        for _ in 0..50 {
            s.update(0.1);
        }
        assert_eq!(s.geometry(), before.as_slice());
        assert_eq!(s.color(), Color::RED);
    }

    #[test]
    fn rejects_degenerate_polygons() {
        let err = Shape::new(
            vec![Vec2::ZERO, Vec2::X],
            Vec2::ZERO,
            Vec2::ZERO,
            Color::RED,
        )
        .unwrap_err();
        assert_eq!(err, ShapeError::TooFewVertices(2));
    }

    #[test]
    fn rejects_non_finite_state() {
        let err = Shape::square(0.1, Vec2::new(f32::NAN, 0.0), Vec2::ZERO, Color::RED).unwrap_err();
        assert_eq!(err, ShapeError::NonFinite("position"));

        let err =
            Shape::square(0.1, Vec2::ZERO, Vec2::new(0.0, f32::INFINITY), Color::RED).unwrap_err();
        assert_eq!(err, ShapeError::NonFinite("velocity"));
    }

    #[test]
    fn regular_polygon_layout() {
        let s = Shape::regular_polygon(6, 0.2, Vec2::ZERO, Vec2::ZERO, Color::BLUE).unwrap();
        assert_eq!(s.geometry().len(), 6);
        assert!(close(s.geometry()[0], Vec2::new(0.0, 0.2)));
        for v in s.geometry() {
            assert!((v.length() - 0.2).abs() < 1e-6);
        }

        assert_eq!(
            Shape::regular_polygon(2, 0.2, Vec2::ZERO, Vec2::ZERO, Color::BLUE).unwrap_err(),
            ShapeError::TooFewVertices(2)
        );
        assert_eq!(
            Shape::regular_polygon(5, 0.0, Vec2::ZERO, Vec2::ZERO, Color::BLUE).unwrap_err(),
            ShapeError::InvalidRadius(0.0)
        );
    }
}
