//! Swipe directions and the axis each one travels along.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the four directions a card can leave the stack in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Towards negative X.
    Left,
    /// Towards positive X.
    Right,
    /// Towards negative Y (screen up).
    Top,
    /// Towards positive Y (screen down).
    Bottom,
}

/// Screen axis a translation or classification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    Horizontal,
    /// Y axis.
    Vertical,
}

impl SwipeDirection {
    /// All directions, in callback declaration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// `-1.0` for left/top, `+1.0` for right/bottom.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left | Self::Top => -1.0,
            Self::Right | Self::Bottom => 1.0,
        }
    }

    /// Direction from a signed displacement on `axis`; `None` at zero.
    #[must_use]
    pub fn from_signed(axis: Axis, value: f32) -> Option<Self> {
        if value == 0.0 || value.is_nan() {
            return None;
        }
        Some(match (axis, value > 0.0) {
            (Axis::Horizontal, true) => Self::Right,
            (Axis::Horizontal, false) => Self::Left,
            (Axis::Vertical, true) => Self::Bottom,
            (Axis::Vertical, false) => Self::Top,
        })
    }

    /// Short lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl Axis {
    /// Component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// A value stored once per swipe direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
pub struct PerDirection<T> {
    /// Value for [`SwipeDirection::Left`].
    pub left: T,
    /// Value for [`SwipeDirection::Right`].
    pub right: T,
    /// Value for [`SwipeDirection::Top`].
    pub top: T,
    /// Value for [`SwipeDirection::Bottom`].
    pub bottom: T,
}

impl<T> PerDirection<T> {
    /// Build from a function of the direction.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(SwipeDirection) -> T) -> Self {
        Self {
            left: f(SwipeDirection::Left),
            right: f(SwipeDirection::Right),
            top: f(SwipeDirection::Top),
            bottom: f(SwipeDirection::Bottom),
        }
    }

    /// Value for `direction`.
    #[must_use]
    pub const fn get(&self, direction: SwipeDirection) -> &T {
        match direction {
            SwipeDirection::Left => &self.left,
            SwipeDirection::Right => &self.right,
            SwipeDirection::Top => &self.top,
            SwipeDirection::Bottom => &self.bottom,
        }
    }
}
