//! Rendering adapter: renderer-agnostic interface and the frame driver.
//!
//! # Invariants
//! - Renderers never mutate shapes; the driver owns the scene.
//! - Every frame updates all shapes before any of them is drawn.
//! - Updates and draws follow scene creation order.

mod driver;
mod renderer;

pub use driver::{FrameDriver, FrameHost};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "bounce-render v0.1.0"
}
