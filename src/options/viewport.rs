use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Size of the area the deck is laid out in, in logical pixels.
///
/// Every geometry default (translate, rotate and overlay ranges, the
/// fling distance) derives from this, resolved once per mount.
pub struct ViewportOptions {
    /// Viewport width.
    #[schemars(range(min = 1.0))]
    pub width: f32,
    /// Viewport height.
    #[schemars(range(min = 1.0))]
    pub height: f32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}
