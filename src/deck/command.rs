//! The deck's imperative vocabulary.
//!
//! Every programmatic operation, whether issued on the animation context
//! or posted from the host through a [`DeckHandle`](super::DeckHandle),
//! is a `DeckCommand` passed to [`Deck::execute`](super::Deck::execute).

use crate::direction::SwipeDirection;

/// One imperative command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    /// Commit the active card towards a direction, as if dragged there.
    Swipe(SwipeDirection),
    /// Bring the previous card back on top.
    SwipeBack,
    /// Toggle the active card's face.
    Flip,
}

impl DeckCommand {
    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swipe(direction) => direction.as_str(),
            Self::SwipeBack => "back",
            Self::Flip => "flip",
        }
    }
}
