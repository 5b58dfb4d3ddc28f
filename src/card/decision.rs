//! Snap classification during a drag and the commit/reset decision on
//! release. Pure functions over the resolved configuration.

use glam::Vec2;

use crate::direction::{Axis, SwipeDirection};
use crate::options::DeckConfig;
use crate::util::snap::VELOCITY_PROJECTION;
use crate::util::{interpolate_clamped, snap_point};

/// Where an in-progress drag would land if released now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Axis whose translation was classified.
    pub axis: Axis,
    /// Provisional next index: `current` inside the rest zone, up to
    /// `current + 1` at the edge of the commit range.
    pub provisional: f32,
}

impl Classification {
    /// Classification of a card at rest.
    #[must_use]
    pub fn at_rest(current: usize) -> Self {
        Self {
            axis: Axis::Horizontal,
            provisional: current as f32,
        }
    }

    /// Whether the provisional index rounds to `current + 1`.
    #[must_use]
    pub fn advances(&self, current: usize) -> bool {
        (self.provisional - current as f32).round() >= 1.0
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Leave the stack towards the direction.
    Commit(SwipeDirection),
    /// Spring back to rest.
    Reset,
}

/// Which axis a drag at `translation` is judged on: vertical once it
/// passes a third of the viewport height.
#[must_use]
pub fn classification_axis(translation: Vec2, config: &DeckConfig) -> Axis {
    if translation.y.abs() > config.viewport.y / 3.0 {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Map a drag translation onto `{current + 1, current, current + 1}`
/// through the commit range of its axis.
///
/// An unusable range classifies as "still current".
#[must_use]
pub fn classify(translation: Vec2, current: usize, config: &DeckConfig) -> Classification {
    let axis = classification_axis(translation, config);
    let c = current as f32;
    let provisional = interpolate_clamped(
        axis.component(translation),
        config.translate_range(axis),
        &[c + 1.0, c, c + 1.0],
    )
    .unwrap_or(c);
    Classification { axis, provisional }
}

/// Decide what a release does.
///
/// 1. A configured velocity threshold exceeded on either axis picks the
///    direction from the dominant-axis velocity.
/// 2. Otherwise a drag classified into the commit zone picks the direction
///    from the sign of its translation on the classified axis.
/// 3. Anything else resets.
///
/// A direction that is disabled always resets.
#[must_use]
pub fn decide(
    translation: Vec2,
    velocity: Vec2,
    classification: Classification,
    current: usize,
    config: &DeckConfig,
) -> Release {
    let allow = |direction: Option<SwipeDirection>| match direction {
        Some(d) if !config.is_disabled(d) => Release::Commit(d),
        _ => Release::Reset,
    };

    if let Some(threshold) = config.velocity_threshold {
        if velocity.x.abs() > threshold || velocity.y.abs() > threshold {
            let axis = if velocity.y.abs() > velocity.x.abs() {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
            return allow(SwipeDirection::from_signed(axis, axis.component(velocity)));
        }
    }

    if config.project_release_velocity {
        return allow(projected_direction(translation, velocity, config));
    }

    if classification.advances(current) {
        let axis = classification.axis;
        return allow(SwipeDirection::from_signed(axis, axis.component(translation)));
    }

    Release::Reset
}

/// Direction a release lands in after projecting its velocity, or `None`
/// if the nearest point of the commit range is the rest point.
fn projected_direction(
    translation: Vec2,
    velocity: Vec2,
    config: &DeckConfig,
) -> Option<SwipeDirection> {
    let projected = translation + velocity * VELOCITY_PROJECTION;
    let axis = classification_axis(projected, config);
    let point = snap_point(
        axis.component(translation),
        axis.component(velocity),
        config.translate_range(axis),
    )?;
    SwipeDirection::from_signed(axis, point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DeckOptions;

    fn config() -> DeckConfig {
        let mut opts = DeckOptions::default();
        opts.viewport.width = 300.0;
        opts.viewport.height = 600.0;
        opts.resolve(5).unwrap()
    }

    fn release(config: &DeckConfig, translation: Vec2, velocity: Vec2) -> Release {
        let classification = classify(translation, 0, config);
        decide(translation, velocity, classification, 0, config)
    }

    #[test]
    fn classification_is_v_shaped() {
        let cfg = config();
        assert_eq!(classify(Vec2::ZERO, 2, &cfg).provisional, 2.0);
        assert_eq!(classify(Vec2::new(50.0, 0.0), 2, &cfg).provisional, 2.5);
        assert_eq!(classify(Vec2::new(-200.0, 0.0), 2, &cfg).provisional, 3.0);
        let vertical = classify(Vec2::new(10.0, -250.0), 2, &cfg);
        assert_eq!(vertical.axis, Axis::Vertical);
        assert!((vertical.provisional - 3.0).abs() < 1e-5);
    }

    #[test]
    fn sixty_percent_of_range_commits_right() {
        let cfg = config();
        // Range max is 100.
        assert_eq!(
            release(&cfg, Vec2::new(60.0, 0.0), Vec2::ZERO),
            Release::Commit(SwipeDirection::Right)
        );
        assert_eq!(
            release(&cfg, Vec2::new(-60.0, 5.0), Vec2::ZERO),
            Release::Commit(SwipeDirection::Left)
        );
    }

    #[test]
    fn short_drag_resets() {
        let cfg = config();
        assert_eq!(release(&cfg, Vec2::new(40.0, 30.0), Vec2::ZERO), Release::Reset);
    }

    #[test]
    fn vertical_drag_commits_on_y_axis() {
        let cfg = config();
        assert_eq!(
            release(&cfg, Vec2::new(80.0, -230.0), Vec2::ZERO),
            Release::Commit(SwipeDirection::Top)
        );
        assert_eq!(
            release(&cfg, Vec2::new(0.0, 260.0), Vec2::ZERO),
            Release::Commit(SwipeDirection::Bottom)
        );
    }

    #[test]
    fn velocity_threshold_overrides_small_displacement() {
        let mut opts = DeckOptions::default();
        opts.gesture.velocity_threshold = Some(500.0);
        let cfg = opts.resolve(3).unwrap();
        assert_eq!(
            release(&cfg, Vec2::new(5.0, 0.0), Vec2::new(800.0, 0.0)),
            Release::Commit(SwipeDirection::Right)
        );
        // Dominant axis wins.
        assert_eq!(
            release(&cfg, Vec2::new(5.0, 0.0), Vec2::new(600.0, -900.0)),
            Release::Commit(SwipeDirection::Top)
        );
        // Below threshold falls through to classification.
        assert_eq!(
            release(&cfg, Vec2::new(5.0, 0.0), Vec2::new(400.0, 0.0)),
            Release::Reset
        );
    }

    #[test]
    fn disabled_directions_always_reset() {
        let mut opts = DeckOptions::default();
        opts.viewport.width = 300.0;
        opts.viewport.height = 600.0;
        opts.gesture.velocity_threshold = Some(500.0);
        opts.gesture.disable_right_swipe = true;
        opts.gesture.disable_top_swipe = true;
        let cfg = opts.resolve(3).unwrap();

        let shapes = [
            (Vec2::new(60.0, 0.0), Vec2::ZERO),
            (Vec2::new(400.0, 0.0), Vec2::ZERO),
            (Vec2::new(5.0, 0.0), Vec2::new(2000.0, 0.0)),
            (Vec2::new(-40.0, 0.0), Vec2::new(800.0, 100.0)),
            (Vec2::new(0.0, -300.0), Vec2::ZERO),
            (Vec2::new(250.0, -250.0), Vec2::ZERO),
            (Vec2::new(0.0, 0.0), Vec2::new(0.0, -700.0)),
        ];
        for (t, v) in shapes {
            assert_eq!(release(&cfg, t, v), Release::Reset, "{t:?} {v:?}");
        }
        // The enabled directions still work.
        assert_eq!(
            release(&cfg, Vec2::new(-60.0, 0.0), Vec2::ZERO),
            Release::Commit(SwipeDirection::Left)
        );
    }

    #[test]
    fn projected_release_uses_snap_points() {
        let mut opts = DeckOptions::default();
        opts.viewport.width = 300.0;
        opts.gesture.project_release_velocity = true;
        let cfg = opts.resolve(3).unwrap();
        // 20 + 0.2 * 300 = 80 -> nearest point 100.
        assert_eq!(
            release(&cfg, Vec2::new(20.0, 0.0), Vec2::new(300.0, 0.0)),
            Release::Commit(SwipeDirection::Right)
        );
        // 60 - 0.2 * 200 = 20 -> nearest point 0.
        assert_eq!(
            release(&cfg, Vec2::new(60.0, 0.0), Vec2::new(-200.0, 0.0)),
            Release::Reset
        );
    }

    #[test]
    fn empty_range_never_advances() {
        let mut opts = DeckOptions::default();
        opts.gesture.translate_x_range = Some(Vec::new());
        let cfg = opts.resolve(3).unwrap();
        assert_eq!(classify(Vec2::new(500.0, 0.0), 1, &cfg).provisional, 1.0);
        assert_eq!(
            release(&cfg, Vec2::new(500.0, 0.0), Vec2::ZERO),
            Release::Reset
        );
    }
}
