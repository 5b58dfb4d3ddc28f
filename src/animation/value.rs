//! Atomic shared scalars and the animated values that drive them.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use web_time::Duration;

use super::spring::SpringAnimation;
use super::timing::TimingAnimation;
use crate::options::SpringConfig;
use crate::util::Easing;

#[derive(Debug, Default)]
struct Cell {
    bits: AtomicU32,
    version: AtomicU64,
}

/// An `f32` written by the animation context and readable from any thread.
///
/// Cloning shares the cell. Every write bumps a version counter so a
/// reader can tell whether a snapshot is stale.
#[derive(Debug, Clone, Default)]
pub struct SharedValue {
    cell: Arc<Cell>,
}

impl SharedValue {
    /// New cell holding `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        let cell = Cell {
            bits: AtomicU32::new(value.to_bits()),
            version: AtomicU64::new(0),
        };
        Self {
            cell: Arc::new(cell),
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.cell.bits.load(Ordering::Acquire))
    }

    /// Overwrite the value.
    #[inline]
    pub fn set(&self, value: f32) {
        self.cell.bits.store(value.to_bits(), Ordering::Release);
        let _ = self.cell.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Atomically replace the value with `f(current)`, returning the new
    /// value.
    #[must_use]
    pub fn update(&self, f: impl Fn(f32) -> f32) -> f32 {
        let previous = match self.cell.bits.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |bits| Some(f(f32::from_bits(bits)).to_bits()),
        ) {
            Ok(bits) | Err(bits) => bits,
        };
        let _ = self.cell.version.fetch_add(1, Ordering::AcqRel);
        f(f32::from_bits(previous))
    }

    /// Number of writes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.cell.version.load(Ordering::Acquire)
    }

    /// Whether `other` is a handle to the same cell.
    #[must_use]
    pub fn same_cell(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

#[derive(Debug, Clone)]
enum Driver {
    Spring(SpringAnimation),
    Timing(TimingAnimation),
}

/// A [`SharedValue`] plus the animation currently driving it.
///
/// The driver is owned by the animation context; only the published value
/// is shared.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    shared: SharedValue,
    velocity: f32,
    driver: Option<Driver>,
}

impl AnimatedValue {
    /// Value at rest.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            shared: SharedValue::new(value),
            velocity: 0.0,
            driver: None,
        }
    }

    /// Handle to the published value.
    #[must_use]
    pub fn shared(&self) -> &SharedValue {
        &self.shared
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> f32 {
        self.shared.get()
    }

    /// Current velocity in units per second (springs only).
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Target of the running animation.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        match &self.driver {
            Some(Driver::Spring(s)) => Some(s.target()),
            Some(Driver::Timing(t)) => Some(t.target()),
            None => None,
        }
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Jump to `value`, cancelling any animation.
    pub fn set(&mut self, value: f32) {
        self.driver = None;
        self.velocity = 0.0;
        self.shared.set(value);
    }

    /// Stop the running animation where it is.
    pub fn cancel(&mut self) {
        if self.driver.take().is_some() {
            log::trace!("cancelled animation at {}", self.get());
        }
        self.velocity = 0.0;
    }

    /// Spring towards `target` starting with `velocity`.
    pub fn spring_to(&mut self, target: f32, velocity: f32, config: &SpringConfig) {
        self.velocity = velocity;
        self.driver = Some(Driver::Spring(SpringAnimation::new(
            self.get(),
            target,
            *config,
        )));
    }

    /// Ease towards `target` over `duration`.
    pub fn timing_to(&mut self, target: f32, duration: Duration, easing: Easing) {
        self.velocity = 0.0;
        self.driver = Some(Driver::Timing(TimingAnimation::new(
            self.get(),
            target,
            duration,
            easing,
        )));
    }

    /// Advance the running animation by `dt`.
    ///
    /// Returns `true` if an animation finished during this step.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(driver) = self.driver.as_mut() else {
            return false;
        };
        let (value, velocity, done) = match driver {
            Driver::Spring(spring) => {
                let step = spring.step(self.shared.get(), self.velocity, dt);
                (step.position, step.velocity, step.done)
            }
            Driver::Timing(timing) => {
                let (value, done) = timing.step(dt);
                (value, 0.0, done)
            }
        };
        self.shared.set(value);
        self.velocity = velocity;
        if done {
            self.driver = None;
            self.velocity = 0.0;
        }
        done
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
