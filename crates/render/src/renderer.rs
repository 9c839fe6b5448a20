use std::fmt::Write;

use bounce_kernel::{FrameTime, Shape};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A frame is `begin_frame`, one `draw` per shape in scene order, then
/// `end_frame`. Renderers only read shapes; simulation state is owned by the
/// frame driver.
pub trait Renderer {
    /// What a finished frame produces.
    type Output;

    /// Start a new frame.
    fn begin_frame(&mut self, time: &FrameTime);

    /// Draw one filled polygon: fan of the shape's geometry, translated by
    /// its position, in its flat color.
    fn draw(&mut self, shape: &Shape);

    /// Finish the frame.
    fn end_frame(&mut self) -> Self::Output;
}

/// Produces a human-readable listing of every draw in a frame.
///
/// Used by the headless CLI and for testing the draw sequence.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    out: String,
    draws: usize,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn begin_frame(&mut self, time: &FrameTime) {
        self.out.clear();
        self.draws = 0;
        let _ = writeln!(
            self.out,
            "=== Frame {} (t={:.3}s, dt={:.4}s) ===",
            time.frame_index,
            time.now.as_secs_f64(),
            time.dt
        );
    }

    fn draw(&mut self, shape: &Shape) {
        let p = shape.position();
        let v = shape.velocity();
        let c = shape.color();
        let _ = writeln!(
            self.out,
            "  [{}] verts={} pos=({:.3}, {:.3}) vel=({:.2}, {:.2}) color=({:.1}, {:.1}, {:.1})",
            self.draws,
            shape.geometry().len(),
            p.x,
            p.y,
            v.x,
            v.y,
            c.r,
            c.g,
            c.b
        );
        self.draws += 1;
    }

    fn end_frame(&mut self) -> String {
        let _ = writeln!(self.out, "Draws: {}", self.draws);
        std::mem::take(&mut self.out)
    }
}
