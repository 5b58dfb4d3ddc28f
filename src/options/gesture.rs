use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::Easing;

/// Drag thresholds, rotation, disabled directions and press feedback.
///
/// Unset ranges are derived from the viewport at resolve time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gesture", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GestureOptions {
    /// Horizontal commit range; default `[-w/3, 0, w/3]`.
    pub translate_x_range: Option<Vec<f32>>,
    /// Vertical commit range; default `[-h/3, 0, h/3]`.
    pub translate_y_range: Option<Vec<f32>>,
    /// Translation X feeding the card rotation; default `[-w/3, 0, w/3]`.
    pub rotate_input_range: Option<Vec<f32>>,
    /// Rotation in radians; default `[-pi/20, 0, pi/20]`.
    pub rotate_output_range: Option<Vec<f32>>,
    /// Release speed (px/s) above which the velocity alone picks the
    /// direction.
    pub velocity_threshold: Option<f32>,
    /// Project the release velocity onto the commit range before
    /// classifying a slow release.
    pub project_release_velocity: bool,
    /// Never commit to the left from a drag.
    pub disable_left_swipe: bool,
    /// Never commit to the right from a drag.
    pub disable_right_swipe: bool,
    /// Never commit upwards from a drag.
    pub disable_top_swipe: bool,
    /// Never commit downwards from a drag.
    pub disable_bottom_swipe: bool,
    /// Scale the card eases to while held; `None` disables press feedback.
    pub press_scale: Option<f32>,
    /// Duration of the press feedback, milliseconds.
    #[schemars(range(min = 0, max = 2000))]
    pub press_duration_ms: u64,
    /// Curve of the press feedback.
    #[schemars(skip)]
    pub press_easing: Easing,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            translate_x_range: None,
            translate_y_range: None,
            rotate_input_range: None,
            rotate_output_range: None,
            velocity_threshold: None,
            project_release_velocity: false,
            disable_left_swipe: false,
            disable_right_swipe: false,
            disable_top_swipe: false,
            disable_bottom_swipe: false,
            press_scale: None,
            press_duration_ms: 150,
            press_easing: Easing::QuadraticInOut,
        }
    }
}
