//! Damped spring integrator.

use web_time::Duration;

use crate::options::SpringConfig;

/// Fixed integration substep. Keeps stiff springs stable regardless of the
/// host frame rate.
const SUBSTEP: f64 = 1.0 / 1000.0;

/// Result of advancing a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    /// Position after the step.
    pub position: f32,
    /// Velocity after the step, units per second.
    pub velocity: f32,
    /// Whether the spring came to rest on its target.
    pub done: bool,
}

/// A spring pulling a value towards `target`.
#[derive(Debug, Clone, Copy)]
pub struct SpringAnimation {
    target: f32,
    /// Side of the target the value started on; used for overshoot clamping.
    start_side: f32,
    config: SpringConfig,
}

impl SpringAnimation {
    /// Spring from `from` to `target`.
    #[must_use]
    pub fn new(from: f32, target: f32, config: SpringConfig) -> Self {
        let start_side = if from == target {
            0.0
        } else {
            (from - target).signum()
        };
        Self {
            target,
            start_side,
            config,
        }
    }

    /// Resting position.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance by `dt` using semi-implicit Euler substeps.
    #[must_use]
    pub fn step(&self, position: f32, velocity: f32, dt: Duration) -> SpringStep {
        let SpringConfig {
            damping,
            stiffness,
            mass,
            overshoot_clamping,
            rest_displacement_threshold,
            rest_speed_threshold,
        } = self.config;
        let mass = f64::from(mass.max(f32::EPSILON));
        let (stiffness, damping) = (f64::from(stiffness), f64::from(damping));
        let target = f64::from(self.target);
        let start_side = f64::from(self.start_side);

        // Integrate in f64: near a large target, f32 steps round to zero.
        let mut x = f64::from(position);
        let mut v = f64::from(velocity);
        let mut remaining = dt.as_secs_f64();

        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            remaining -= h;

            let displacement = x - target;
            let accel = (-stiffness * displacement - damping * v) / mass;
            v += accel * h;
            x += v * h;

            let crossed =
                start_side != 0.0 && (x - target).signum() != start_side;
            if overshoot_clamping && crossed {
                return self.rest();
            }
            if (x - target).abs() < f64::from(rest_displacement_threshold)
                && v.abs() < f64::from(rest_speed_threshold)
            {
                return self.rest();
            }
        }

        if !x.is_finite() || !v.is_finite() {
            log::warn!("spring diverged; snapping to target {}", self.target);
            return self.rest();
        }

        SpringStep {
            position: x as f32,
            velocity: v as f32,
            done: false,
        }
    }

    fn rest(&self) -> SpringStep {
        SpringStep {
            position: self.target,
            velocity: 0.0,
            done: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &SpringAnimation, mut x: f32, mut v: f32) -> (f32, usize, f32) {
        let mut peak = x;
        for frame in 0..2_000 {
            let step = spring.step(x, v, Duration::from_millis(16));
            x = step.position;
            v = step.velocity;
            peak = peak.max(x);
            if step.done {
                return (x, frame, peak);
            }
        }
        (x, usize::MAX, peak)
    }

    #[test]
    fn default_spring_settles_within_a_few_seconds() {
        let spring = SpringAnimation::new(0.0, 585.0, SpringConfig::default());
        let (x, frames, _) = run(&spring, 0.0, 0.0);
        assert_eq!(x, 585.0);
        assert!(frames < 300, "took {frames} frames");
    }

    #[test]
    fn underdamped_spring_overshoots_unless_clamped() {
        let bouncy = SpringConfig {
            damping: 2.0,
            stiffness: 200.0,
            mass: 1.0,
            ..SpringConfig::default()
        };
        let spring = SpringAnimation::new(0.0, 100.0, bouncy);
        let (_, _, peak) = run(&spring, 0.0, 0.0);
        assert!(peak > 100.0);

        let clamped = SpringConfig {
            overshoot_clamping: true,
            ..bouncy
        };
        let spring = SpringAnimation::new(0.0, 100.0, clamped);
        let (x, frames, peak) = run(&spring, 0.0, 0.0);
        assert_eq!(x, 100.0);
        assert!(peak <= 100.0);
        assert!(frames < 100);
    }

    #[test]
    fn initial_velocity_carries_momentum() {
        let spring = SpringAnimation::new(0.0, 0.0, SpringConfig::default());
        let step = spring.step(0.0, 800.0, Duration::from_millis(16));
        assert!(step.position > 0.0);
        assert!(!step.done);
    }
}
