//! Wall-clock frame stepping for hosts without their own frame callback.

use web_time::{Duration, Instant};

/// Wall-clock frame stepper producing the `dt` fed to
/// [`Deck::tick`](crate::deck::Deck::tick).
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single step, so a stalled host does not teleport
    /// springs through their whole trajectory in one frame
    max_step: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Default cap on one step (~6 frames at 60 Hz).
    pub const DEFAULT_MAX_STEP: Duration = Duration::from_millis(100);

    /// Create a clock starting now.
    #[must_use]
    pub fn new(max_step: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_step,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Time since the previous call, capped at `max_step`.
    pub fn next_delta(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_step)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_STEP)
    }
}
