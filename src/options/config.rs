//! Immutable per-mount configuration resolved from [`DeckOptions`].

use std::f32::consts::PI;

use glam::Vec2;
use web_time::Duration;

use super::{DeckOptions, FlipAxis, OverlayRangeOptions, SpringOptions};
use crate::direction::{Axis, PerDirection, SwipeDirection};
use crate::error::DeckError;
use crate::util::Easing;

/// Factor of the viewport dimension a committed card flies out to.
pub const FLING_FACTOR: f32 = 1.5;

/// Resolved opacity mapping of one overlay label.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRanges {
    /// Drag distance breakpoints.
    pub input: Vec<f32>,
    /// Opacity at each breakpoint.
    pub output: Vec<f32>,
}

/// Press-down scale feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressFeedback {
    /// Scale while held.
    pub scale: f32,
    /// Ease-in/out duration.
    pub duration: Duration,
    /// Curve.
    pub easing: Easing,
}

/// Resolved flip animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipConfig {
    /// Spin axis.
    pub axis: FlipAxis,
    /// Half-turn duration.
    pub duration: Duration,
    /// Curve.
    pub easing: Easing,
}

/// Everything a mounted deck needs, with viewport-derived defaults filled
/// in. Built once by [`DeckOptions::resolve`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// Viewport size.
    pub viewport: Vec2,
    /// Horizontal commit range.
    pub translate_x_range: Vec<f32>,
    /// Vertical commit range.
    pub translate_y_range: Vec<f32>,
    /// Rotation input (translation X).
    pub rotate_input_range: Vec<f32>,
    /// Rotation output (radians).
    pub rotate_output_range: Vec<f32>,
    /// Overlay label opacity per direction.
    pub overlays: PerDirection<OverlayRanges>,
    /// Springs per direction and for returning to rest.
    pub springs: SpringOptions,
    /// Release speed that alone decides the direction.
    pub velocity_threshold: Option<f32>,
    /// Project release velocity before classifying a slow release.
    pub project_release_velocity: bool,
    /// Directions a drag may never commit to.
    pub disabled: PerDirection<bool>,
    /// Press feedback, if enabled.
    pub press: Option<PressFeedback>,
    /// Explicit prerender count (see [`DeckConfig::prerender`]).
    pub prerender_items: Option<usize>,
    /// Restart after the last card.
    pub looping: bool,
    /// Index the deck starts (and loops back) at.
    pub initial_index: usize,
    /// Scale lost per position behind the active card.
    pub scale_step: f32,
    /// Stack scale/opacity transition duration.
    pub stack_transition: Duration,
    /// Stack scale/opacity transition curve.
    pub stack_easing: Easing,
    /// Flip animation.
    pub flip: FlipConfig,
}

impl DeckConfig {
    /// Number of cards mounted ahead of the active one for a list of `len`
    /// items. Never below 1, and never more than the list holds.
    #[must_use]
    pub fn prerender(&self, len: usize) -> usize {
        self.prerender_items
            .unwrap_or_else(|| len.saturating_sub(1))
            .min(len)
            .max(1)
    }

    /// Whether drags may not commit towards `direction`.
    #[must_use]
    pub fn is_disabled(&self, direction: SwipeDirection) -> bool {
        *self.disabled.get(direction)
    }

    /// Commit range for `axis`.
    #[must_use]
    pub fn translate_range(&self, axis: Axis) -> &[f32] {
        match axis {
            Axis::Horizontal => &self.translate_x_range,
            Axis::Vertical => &self.translate_y_range,
        }
    }

    /// Off-screen resting point of a card committed towards `direction`.
    #[must_use]
    pub fn fling_target(&self, direction: SwipeDirection) -> f32 {
        direction.sign() * FLING_FACTOR * direction.axis().component(self.viewport)
    }
}

impl DeckOptions {
    /// Resolve against a data list of `len` items.
    ///
    /// Clamps the initial index into `[0, len - 1]` and derives every unset
    /// range from the viewport.
    ///
    /// # Errors
    ///
    /// [`DeckError::InvalidOptions`] for a non-positive viewport, an
    /// unusable spring, or out-of-range gesture/stack values.
    pub fn resolve(&self, len: usize) -> Result<DeckConfig, DeckError> {
        let (w, h) = (self.viewport.width, self.viewport.height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(DeckError::InvalidOptions(format!(
                "viewport must be positive, got {w}x{h}"
            )));
        }
        if let Some(name) = self.springs.first_invalid() {
            return Err(DeckError::InvalidOptions(format!(
                "spring '{name}' needs positive stiffness, mass and rest \
                 thresholds and non-negative damping"
            )));
        }
        let g = &self.gesture;
        if let Some(t) = g.velocity_threshold {
            if !t.is_finite() || t < 0.0 {
                return Err(DeckError::InvalidOptions(format!(
                    "velocity_threshold must be a non-negative number, got {t}"
                )));
            }
        }
        if let Some(s) = g.press_scale {
            if !s.is_finite() || s <= 0.0 {
                return Err(DeckError::InvalidOptions(format!(
                    "press_scale must be positive, got {s}"
                )));
            }
        }
        if !self.stack.scale_step.is_finite() {
            return Err(DeckError::InvalidOptions(
                "scale_step must be finite".into(),
            ));
        }

        let third_w = w / 3.0;
        let third_h = h / 3.0;
        let range_or = |r: &Option<Vec<f32>>, default: [f32; 3]| {
            r.clone().unwrap_or_else(|| default.to_vec())
        };

        let o = &self.overlay;
        let overlay = |opts: &OverlayRangeOptions, reach: f32| OverlayRanges {
            input: opts.input.clone().unwrap_or_else(|| vec![0.0, reach]),
            output: opts.output.clone().unwrap_or_else(|| vec![0.0, 1.0]),
        };

        let initial_index = self.stack.initial_index.min(len.saturating_sub(1));
        if initial_index != self.stack.initial_index {
            log::warn!(
                "initial_index {} clamped to {initial_index} for {len} items",
                self.stack.initial_index
            );
        }

        Ok(DeckConfig {
            viewport: Vec2::new(w, h),
            translate_x_range: range_or(&g.translate_x_range, [-third_w, 0.0, third_w]),
            translate_y_range: range_or(&g.translate_y_range, [-third_h, 0.0, third_h]),
            rotate_input_range: range_or(&g.rotate_input_range, [-third_w, 0.0, third_w]),
            rotate_output_range: range_or(
                &g.rotate_output_range,
                [-PI / 20.0, 0.0, PI / 20.0],
            ),
            overlays: PerDirection {
                left: overlay(&o.left, -third_w),
                right: overlay(&o.right, third_w),
                top: overlay(&o.top, -third_h),
                bottom: overlay(&o.bottom, third_h),
            },
            springs: self.springs,
            velocity_threshold: g.velocity_threshold,
            project_release_velocity: g.project_release_velocity,
            disabled: PerDirection {
                left: g.disable_left_swipe,
                right: g.disable_right_swipe,
                top: g.disable_top_swipe,
                bottom: g.disable_bottom_swipe,
            },
            press: g.press_scale.map(|scale| PressFeedback {
                scale,
                duration: Duration::from_millis(g.press_duration_ms),
                easing: g.press_easing,
            }),
            prerender_items: self.stack.prerender_items,
            looping: self.stack.loop_cards,
            initial_index,
            scale_step: self.stack.scale_step,
            stack_transition: Duration::from_millis(self.stack.transition_ms),
            stack_easing: self.stack.transition_easing,
            flip: FlipConfig {
                axis: self.flip.axis,
                duration: Duration::from_millis(self.flip.duration_ms),
                easing: self.flip.easing,
            },
        })
    }
}
