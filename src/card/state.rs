use glam::Vec2;

use super::decision::Classification;
use crate::direction::SwipeDirection;

/// Gesture state of one card.
///
/// `Idle -> Dragging -> {Committing | Resetting} -> Idle`. The animated
/// states return to `Idle` once the position animation settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardState {
    /// At rest, or left behind by the stack.
    Idle,
    /// Tracking a pan 1:1.
    Dragging(DragState),
    /// Flying off-screen towards the direction.
    Committing(SwipeDirection),
    /// Springing back to rest.
    Resetting,
}

impl CardState {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Committing(_) => "committing",
            Self::Resetting => "resetting",
        }
    }
}

/// Transient state of a drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Card position when the pan began. Non-zero if the pan interrupted
    /// an animation.
    pub origin: Vec2,
    /// Current card position (`origin` plus the pan translation).
    pub translation: Vec2,
    /// Snap classification of `translation`.
    pub classification: Classification,
    /// Active index the drag started under.
    pub index: usize,
}
