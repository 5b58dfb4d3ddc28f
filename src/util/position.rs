//! Position helpers shared by drag release and programmatic commands.

use glam::Vec2;

use crate::animation::AnimatedValue;
use crate::direction::{Axis, SwipeDirection};
use crate::options::{DeckConfig, SpringConfig};

/// Spring both axes back to the resting position, keeping their current
/// velocities.
pub fn reset_position(
    x: &mut AnimatedValue,
    y: &mut AnimatedValue,
    spring: &SpringConfig,
) {
    let (vx, vy) = (x.velocity(), y.velocity());
    x.spring_to(0.0, vx, spring);
    y.spring_to(0.0, vy, spring);
}

/// Fling the axis of `direction` off-screen with the direction's spring.
///
/// The release `velocity` along that axis seeds the spring so the card
/// keeps its momentum. The other axis is left where it is.
pub fn update_position(
    x: &mut AnimatedValue,
    y: &mut AnimatedValue,
    direction: SwipeDirection,
    velocity: Vec2,
    config: &DeckConfig,
) {
    let axis = direction.axis();
    let value = match axis {
        Axis::Horizontal => x,
        Axis::Vertical => y,
    };
    value.spring_to(
        config.fling_target(direction),
        axis.component(velocity),
        config.springs.for_direction(direction),
    );
}
