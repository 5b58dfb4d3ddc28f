//! Fixed-duration eased animation.

use web_time::Duration;

use crate::util::Easing;

/// Moves a value from `from` to `to` over `duration` along `easing`.
#[derive(Debug, Clone, Copy)]
pub struct TimingAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl TimingAnimation {
    /// Animation starting now.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Advance by `dt`; returns the new value and whether it finished.
    pub fn step(&mut self, dt: Duration) -> (f32, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        let t = self.progress();
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.evaluate(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut t = TimingAnimation::new(0.0, 1.0, Duration::ZERO, Easing::Linear);
        assert_eq!(t.step(Duration::ZERO), (1.0, true));
    }

    #[test]
    fn progress_tracks_elapsed() {
        let mut t = TimingAnimation::new(
            1.0,
            0.0,
            Duration::from_millis(200),
            Easing::Linear,
        );
        let (v, done) = t.step(Duration::from_millis(50));
        assert!((v - 0.75).abs() < 1e-4);
        assert!(!done);
        assert!((t.progress() - 0.25).abs() < 1e-4);
    }
}
