use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::direction::SwipeDirection;

/// Physical parameters of a spring animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spring", inline)]
#[serde(default)]
pub struct SpringConfig {
    /// Velocity-proportional resistance.
    #[schemars(range(min = 0.0, max = 200.0))]
    pub damping: f32,
    /// Displacement-proportional pull towards the target.
    #[schemars(range(min = 1.0, max = 2000.0))]
    pub stiffness: f32,
    /// Inertia of the animated value.
    #[schemars(range(min = 0.01, max = 20.0))]
    pub mass: f32,
    /// Stop the instant the value crosses its target.
    pub overshoot_clamping: bool,
    /// Distance from target below which the spring may come to rest.
    #[schemars(skip)]
    pub rest_displacement_threshold: f32,
    /// Speed below which the spring may come to rest.
    #[schemars(skip)]
    pub rest_speed_threshold: f32,
}

impl SpringConfig {
    /// Whether every parameter is finite and physically meaningful.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.damping.is_finite()
            && self.damping >= 0.0
            && self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.mass.is_finite()
            && self.mass > 0.0
            && self.rest_displacement_threshold.is_finite()
            && self.rest_displacement_threshold > 0.0
            && self.rest_speed_threshold.is_finite()
            && self.rest_speed_threshold > 0.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 15.0,
            stiffness: 120.0,
            mass: 0.5,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
        }
    }
}

/// Spring used for each swipe direction and for returning to rest.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Springs", inline)]
#[serde(default)]
pub struct SpringOptions {
    /// Fling off to the left.
    pub left: SpringConfig,
    /// Fling off to the right.
    pub right: SpringConfig,
    /// Fling off the top.
    pub top: SpringConfig,
    /// Fling off the bottom.
    pub bottom: SpringConfig,
    /// Return to rest (rejected drag, swipe back, loop restart).
    pub back: SpringConfig,
}

impl SpringOptions {
    /// Spring for committing towards `direction`.
    #[must_use]
    pub const fn for_direction(&self, direction: SwipeDirection) -> &SpringConfig {
        match direction {
            SwipeDirection::Left => &self.left,
            SwipeDirection::Right => &self.right,
            SwipeDirection::Top => &self.top,
            SwipeDirection::Bottom => &self.bottom,
        }
    }

    /// First invalid spring, by name.
    #[must_use]
    pub fn first_invalid(&self) -> Option<&'static str> {
        [
            ("left", &self.left),
            ("right", &self.right),
            ("top", &self.top),
            ("bottom", &self.bottom),
            ("back", &self.back),
        ]
        .into_iter()
        .find(|(_, s)| !s.is_valid())
        .map(|(name, _)| name)
    }
}
