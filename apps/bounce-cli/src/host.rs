use bounce_render::FrameHost;
use std::time::Duration;

/// Headless host: time advances by a fixed step on every poll and the loop
/// closes after a set number of frames.
///
/// Frames that land on the print interval are kept; everything else is
/// discarded.
pub struct SimulatedHost {
    now: Duration,
    step: Duration,
    remaining: u64,
    every: u64,
    presented: u64,
    kept: Vec<String>,
}

impl SimulatedHost {
    pub fn new(frames: u64, step: Duration, every: u64) -> Self {
        Self {
            now: Duration::ZERO,
            step,
            remaining: frames,
            every: every.max(1),
            presented: 0,
            kept: Vec::new(),
        }
    }

    /// Frames kept so far, oldest first.
    pub fn take_kept(&mut self) -> Vec<String> {
        std::mem::take(&mut self.kept)
    }
}

impl FrameHost for SimulatedHost {
    type Frame = String;

    fn elapsed(&self) -> Duration {
        self.now
    }

    fn close_requested(&self) -> bool {
        self.remaining == 0
    }

    fn present(&mut self, frame: String) {
        if self.presented % self.every == 0 {
            self.kept.push(frame);
        }
        self.presented += 1;
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn poll_events(&mut self) {
        self.now += self.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_kernel::Scene;
    use bounce_render::{DebugTextRenderer, FrameDriver};

    #[test]
    fn runs_requested_number_of_frames() {
        let mut driver = FrameDriver::new(Scene::demo().unwrap());
        let mut host = SimulatedHost::new(10, Duration::from_millis(100), 1);
        let frames = driver.run(&mut host, &mut DebugTextRenderer::new());

        assert_eq!(frames, 10);
        assert_eq!(host.take_kept().len(), 10);
        // first frame steps by zero, the other nine by 0.1s
        assert!((driver.scene().elapsed() - 0.9).abs() < 1e-5);
    }

    #[test]
    fn keeps_every_nth_frame() {
        let mut driver = FrameDriver::new(Scene::demo().unwrap());
        let mut host = SimulatedHost::new(7, Duration::from_millis(16), 3);
        driver.run(&mut host, &mut DebugTextRenderer::new());

        let kept = host.take_kept();
        assert_eq!(kept.len(), 3);
        assert!(kept[0].contains("Frame 0"));
        assert!(kept[1].contains("Frame 3"));
        assert!(kept[2].contains("Frame 6"));
    }

    #[test]
    fn zero_frames_closes_immediately() {
        let mut host = SimulatedHost::new(0, Duration::from_millis(16), 1);
        assert!(host.close_requested());
        assert!(host.take_kept().is_empty());
    }
}
