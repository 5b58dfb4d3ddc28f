use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::Easing;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stack", inline)]
#[serde(default)]
/// Window size, looping and the fanned-stack look.
pub struct StackOptions {
    /// Cards kept mounted ahead of the active one; default
    /// `max(len - 1, 1)`, never below 1.
    pub prerender_items: Option<usize>,
    /// Restart from `initial_index` after the last card.
    #[serde(rename = "loop")]
    pub loop_cards: bool,
    /// Card shown on top at mount (clamped into the data).
    pub initial_index: usize,
    /// Scale lost per position behind the active card.
    #[schemars(title = "Scale Step", range(min = 0.0, max = 0.3), extend("step" = 0.01))]
    pub scale_step: f32,
    /// Duration of stack scale/opacity transitions, milliseconds.
    #[schemars(range(min = 0, max = 2000))]
    pub transition_ms: u64,
    /// Curve of stack scale/opacity transitions.
    #[schemars(skip)]
    pub transition_easing: Easing,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            prerender_items: None,
            loop_cards: false,
            initial_index: 0,
            scale_step: 0.07,
            transition_ms: 300,
            transition_easing: Easing::QuadraticInOut,
        }
    }
}
