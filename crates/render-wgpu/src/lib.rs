//! wgpu render backend for bounce.
//!
//! Draws each shape as a flat-colored triangle fan translated by its
//! position. There is no camera or projection: shape coordinates are clip
//! space.
//!
//! # Invariants
//! - Renderer never mutates shapes.
//! - Geometry is uploaded fresh for every draw.

mod gpu;
mod shaders;

pub use gpu::{WgpuFrame, WgpuRenderer};
