use std::time::Duration;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick. Zero on the first tick.
    pub dt: f32,
    /// Host timestamp the tick was taken at.
    pub now: Duration,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Turns host timestamps into per-frame delta times.
///
/// Timestamps are durations since the host started, so a headless host can
/// feed simulated time and a windowed host can feed `Instant::elapsed`.
/// There is no previous frame on the first tick, so its `dt` is exactly zero
/// rather than the distance from some arbitrary origin.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Duration>,
    frame_index: u64,
    max_dt: Option<Duration>,
}

impl FrameClock {
    /// Clock without any clamping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that caps each delta at `max_dt`, e.g. after the window was
    /// dragged or the process was stopped in a debugger.
    pub fn with_max_dt(max_dt: Duration) -> Self {
        Self {
            max_dt: Some(max_dt),
            ..Self::default()
        }
    }

    pub fn max_dt(&self) -> Option<Duration> {
        self.max_dt
    }

    /// Number of ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Forget the last timestamp; the next tick reports `dt == 0` again.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advance the clock to `now`.
    ///
    /// A timestamp older than the previous one yields `dt == 0`.
    pub fn tick(&mut self, now: Duration) -> FrameTime {
        let mut dt = match self.last {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        if let Some(max) = self.max_dt {
            dt = dt.min(max);
        }
        self.last = Some(now);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
