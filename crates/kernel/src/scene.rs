use bounce_common::Color;
use glam::Vec2;
use serde::Serialize;

use crate::shape::{Shape, ShapeError};

/// The set of shapes being simulated, in creation order.
///
/// Shapes are added while the scene is built and live until the scene is
/// dropped; there is no way to remove one. Iteration order is the order the
/// shapes were added in, and every per-frame pass (update, draw) follows it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    shapes: Vec<Shape>,
    tick: u64,
    /// Simulated seconds accumulated over all steps.
    elapsed: f64,
}

impl Scene {
    /// Create an empty scene at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            ..Self::default()
        }
    }

    /// Append a shape. Meant for building the scene before the first frame.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// The red triangle and green square of the classic demo.
    pub fn demo() -> Result<Self, ShapeError> {
        let triangle = Shape::new(
            vec![
                Vec2::new(-0.1, -0.1),
                Vec2::new(0.1, -0.1),
                Vec2::new(0.0, 0.1),
            ],
            Vec2::ZERO,
            Vec2::new(0.3, 0.5),
            Color::RED,
        )?;
        let square = Shape::square(
            0.1,
            Vec2::new(0.5, -0.5),
            Vec2::new(-0.4, 0.3),
            Color::GREEN,
        )?;

        Ok(Self::new().with_shape(triangle).with_shape(square))
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of steps taken.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance every shape by `dt` seconds in creation order.
    ///
    /// Returns how many velocity components were reflected this step.
    pub fn step(&mut self, dt: f32) -> usize {
        let mut reflections = 0;
        for (index, shape) in self.shapes.iter_mut().enumerate() {
            let r = shape.update(dt);
            if r.any() {
                tracing::debug!(
                    tick = self.tick,
                    shape = index,
                    x = r.x,
                    y = r.y,
                    "shape reflected"
                );
            }
            reflections += r.count();
        }
        self.tick += 1;
        self.elapsed += dt as f64;
        reflections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_starts_empty() {
        let s = Scene::new();
        assert_eq!(s.tick(), 0);
        assert!(s.is_empty());
        assert_eq!(s.elapsed(), 0.0);
    }

    #[test]
    fn demo_scene_layout() {
        let s = Scene::demo().unwrap();
        assert_eq!(s.len(), 2);

        let triangle = &s.shapes()[0];
        assert_eq!(triangle.geometry().len(), 3);
        assert_eq!(triangle.position(), Vec2::ZERO);
        assert_eq!(triangle.velocity(), Vec2::new(0.3, 0.5));
        assert_eq!(triangle.color(), Color::RED);

        let square = &s.shapes()[1];
        assert_eq!(square.geometry().len(), 4);
        assert_eq!(square.position(), Vec2::new(0.5, -0.5));
        assert_eq!(square.velocity(), Vec2::new(-0.4, 0.3));
        assert_eq!(square.color(), Color::GREEN);
    }

    #[test]
    fn step_updates_every_shape_and_counts_ticks() {
        let mut s = Scene::demo().unwrap();
        s.step(0.5);
        s.step(0.5);
        assert_eq!(s.tick(), 2);
        assert!((s.elapsed() - 1.0).abs() < 1e-9);
        assert!(s.shapes()[0].position().abs_diff_eq(Vec2::new(0.3, 0.5), 1e-6));
        assert!(s.shapes()[1].position().abs_diff_eq(Vec2::new(0.1, -0.2), 1e-6));
    }

    #[test]
    fn step_reports_reflections() {
        let edge = Shape::square(0.1, Vec2::new(0.95, 0.95), Vec2::new(1.0, 1.0), Color::RED)
            .unwrap();
        let calm = Shape::square(0.1, Vec2::ZERO, Vec2::new(0.1, 0.0), Color::GREEN).unwrap();
        let mut s = Scene::from_shapes(vec![edge, calm]);

        assert_eq!(s.step(0.1), 2);
        assert_eq!(s.shapes()[0].velocity(), Vec2::new(-1.0, -1.0));
        assert_eq!(s.shapes()[1].velocity(), Vec2::new(0.1, 0.0));
    }

    #[test]
    fn creation_order_is_kept() {
        let colors = [Color::RED, Color::GREEN, Color::BLUE];
        let mut s = Scene::new();
        for c in colors {
            s = s.with_shape(Shape::square(0.1, Vec2::ZERO, Vec2::ZERO, c).unwrap());
        }
        s.step(0.1);
        let order: Vec<Color> = s.shapes().iter().map(|sh| sh.color()).collect();
        assert_eq!(order, colors);
    }

    #[test]
    fn shapes_stay_near_viewport_over_long_runs() {
        let mut s = Scene::demo().unwrap();
        for _ in 0..10_000 {
            s.step(1.0 / 60.0);
        }
        for shape in s.shapes() {
            let p = shape.position();
            // at most one frame of overshoot past the edge
            assert!(p.x.abs() <= 1.0 + 0.5 / 60.0 + 1e-4);
            assert!(p.y.abs() <= 1.0 + 0.5 / 60.0 + 1e-4);
        }
    }
}
