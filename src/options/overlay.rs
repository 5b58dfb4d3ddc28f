use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opacity mapping of one overlay label. Unset fields resolve to
/// `[0, ±w/3]` (or `±h/3`) → `[0, 1]`.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(inline)]
#[serde(default)]
pub struct OverlayRangeOptions {
    /// Drag distance breakpoints.
    pub input: Option<Vec<f32>>,
    /// Opacity at each breakpoint.
    pub output: Option<Vec<f32>>,
}

/// Overlay label opacity ranges, one per direction.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Overlay Labels", inline)]
#[serde(default)]
pub struct OverlayOptions {
    /// Label shown while dragging left (keyed off X).
    pub left: OverlayRangeOptions,
    /// Label shown while dragging right (keyed off X).
    pub right: OverlayRangeOptions,
    /// Label shown while dragging up (keyed off Y).
    pub top: OverlayRangeOptions,
    /// Label shown while dragging down (keyed off Y).
    pub bottom: OverlayRangeOptions,
}
