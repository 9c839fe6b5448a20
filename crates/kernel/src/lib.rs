//! Bounce kernel: shape state, the per-frame simulation step, frame timing.
//!
//! # Invariants
//! - Shape geometry and color never change after construction.
//! - Position and velocity change only through `Shape::update`.
//! - Scene iteration order is creation order.
//! - The first frame advances the simulation by `dt == 0`.

pub mod clock;
pub mod scene;
pub mod shape;

pub use clock::{FrameClock, FrameTime};
pub use scene::Scene;
pub use shape::{Reflection, Shape, ShapeError};
