use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::Easing;

/// Axis the card spins around when flipped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FlipAxis {
    /// Spin around the horizontal axis (top edge comes towards the viewer).
    X,
    /// Spin around the vertical axis.
    #[default]
    Y,
}

/// Flip reveal animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flip", inline)]
#[serde(default)]
pub struct FlipOptions {
    /// Spin axis.
    pub axis: FlipAxis,
    /// Duration of a half turn, milliseconds.
    #[schemars(range(min = 0, max = 3000))]
    pub duration_ms: u64,
    /// Spin curve.
    #[schemars(skip)]
    pub easing: Easing,
}

impl Default for FlipOptions {
    fn default() -> Self {
        Self {
            axis: FlipAxis::Y,
            duration_ms: 500,
            easing: Easing::QuadraticInOut,
        }
    }
}
