use std::time::Duration;

use bounce_kernel::{FrameClock, Scene};

use crate::renderer::Renderer;

/// Window/context side of a pull-style frame loop.
///
/// Event-driven hosts (winit's `ApplicationHandler`) call
/// [`FrameDriver::frame`] themselves instead.
pub trait FrameHost {
    /// What the host accepts for presentation.
    type Frame;

    /// Wall-clock time since the host was created.
    fn elapsed(&self) -> Duration;

    /// Whether the user (or the host itself) asked to stop.
    fn close_requested(&self) -> bool;

    /// Show a finished frame (buffer swap).
    fn present(&mut self, frame: Self::Frame);

    /// Pump pending window/system events.
    fn poll_events(&mut self);
}

/// Owns the scene and frame timing, and sequences each frame:
/// tick the clock, step every shape, then draw every shape.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    scene: Scene,
    clock: FrameClock,
}

impl FrameDriver {
    pub fn new(scene: Scene) -> Self {
        Self::with_clock(scene, FrameClock::new())
    }

    pub fn with_clock(scene: Scene, clock: FrameClock) -> Self {
        tracing::info!(shapes = scene.len(), "frame driver ready");
        Self { scene, clock }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Start timing over; the next frame steps by zero.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Run one frame at host time `now`.
    pub fn frame<R: Renderer>(&mut self, now: Duration, renderer: &mut R) -> R::Output {
        let time = self.clock.tick(now);
        let reflections = self.scene.step(time.dt);
        tracing::trace!(
            frame = time.frame_index,
            dt = time.dt,
            reflections,
            "frame stepped"
        );

        renderer.begin_frame(&time);
        for shape in self.scene.shapes() {
            renderer.draw(shape);
        }
        renderer.end_frame()
    }

    /// Drive frames until the host reports a close request.
    ///
    /// Returns the number of frames presented.
    pub fn run<H, R>(&mut self, host: &mut H, renderer: &mut R) -> u64
    where
        R: Renderer,
        H: FrameHost<Frame = R::Output>,
    {
        let mut frames = 0;
        while !host.close_requested() {
            let output = self.frame(host.elapsed(), renderer);
            host.present(output);
            host.poll_events();
            frames += 1;
        }
        tracing::info!(frames, tick = self.scene.tick(), "frame loop finished");
        frames
    }
}
