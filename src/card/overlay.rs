//! Directional overlay labels whose opacity follows the drag distance.

use glam::Vec2;

use crate::direction::{PerDirection, SwipeDirection};
use crate::options::OverlayRanges;
use crate::util::interpolate_or;

/// Opacity of one overlay label at drag `distance`. A degenerate range
/// leaves the label hidden.
#[inline]
#[must_use]
pub fn overlay_opacity(distance: f32, ranges: &OverlayRanges) -> f32 {
    interpolate_or(distance, &ranges.input, &ranges.output, 0.0)
}

/// Opacity of all four labels. Left and right follow X, top and bottom
/// follow Y. Labels never intercept input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayOpacities {
    /// Label for a left swipe.
    pub left: f32,
    /// Label for a right swipe.
    pub right: f32,
    /// Label for an upward swipe.
    pub top: f32,
    /// Label for a downward swipe.
    pub bottom: f32,
}

impl OverlayOpacities {
    /// Opacities for a card translated by `translation`.
    #[must_use]
    pub fn from_translation(
        translation: Vec2,
        overlays: &PerDirection<OverlayRanges>,
    ) -> Self {
        let at = |direction: SwipeDirection| {
            let distance = direction.axis().component(translation);
            overlay_opacity(distance, overlays.get(direction))
        };
        Self {
            left: at(SwipeDirection::Left),
            right: at(SwipeDirection::Right),
            top: at(SwipeDirection::Top),
            bottom: at(SwipeDirection::Bottom),
        }
    }

    /// Opacity for `direction`.
    #[must_use]
    pub const fn get(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
            SwipeDirection::Top => self.top,
            SwipeDirection::Bottom => self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DeckOptions;

    #[test]
    fn labels_track_their_own_axis() {
        let mut opts = DeckOptions::default();
        opts.viewport.width = 300.0;
        opts.viewport.height = 600.0;
        let cfg = opts.resolve(2).unwrap();

        let o = OverlayOpacities::from_translation(Vec2::new(50.0, -400.0), &cfg.overlays);
        assert!((o.right - 0.5).abs() < 1e-6);
        assert_eq!(o.left, 0.0);
        assert_eq!(o.top, 1.0);
        assert_eq!(o.bottom, 0.0);
        assert_eq!(o.get(SwipeDirection::Top), 1.0);
    }

    #[test]
    fn degenerate_range_hides_label() {
        let ranges = OverlayRanges {
            input: Vec::new(),
            output: vec![0.0, 1.0],
        };
        assert_eq!(overlay_opacity(120.0, &ranges), 0.0);
    }

    #[test]
    fn custom_output_range() {
        let ranges = OverlayRanges {
            input: vec![0.0, 100.0],
            output: vec![0.2, 0.8],
        };
        assert!((overlay_opacity(50.0, &ranges) - 0.5).abs() < 1e-6);
        assert_eq!(overlay_opacity(-10.0, &ranges), 0.2);
    }
}
