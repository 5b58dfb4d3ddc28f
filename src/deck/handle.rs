use std::sync::mpsc;

use super::command::DeckCommand;
use crate::controls::{ActiveIndex, IndexSnapshot};
use crate::direction::SwipeDirection;

/// Host-side handle to a [`Deck`](super::Deck).
///
/// Cheap to clone and `Send`. Commands are queued and run on the
/// animation context at the next [`Deck::pump`](super::Deck::pump); the
/// active index is read as an atomic snapshot.
#[derive(Debug, Clone)]
pub struct DeckHandle {
    sender: mpsc::Sender<DeckCommand>,
    index: ActiveIndex,
}

impl DeckHandle {
    pub(crate) fn new(sender: mpsc::Sender<DeckCommand>, index: ActiveIndex) -> Self {
        Self { sender, index }
    }

    /// Queue `command`. Returns `false` if the deck is gone.
    #[must_use]
    pub fn send(&self, command: DeckCommand) -> bool {
        self.sender.send(command).is_ok()
    }

    /// Queue a left swipe.
    #[must_use]
    pub fn swipe_left(&self) -> bool {
        self.send(DeckCommand::Swipe(SwipeDirection::Left))
    }

    /// Queue a right swipe.
    #[must_use]
    pub fn swipe_right(&self) -> bool {
        self.send(DeckCommand::Swipe(SwipeDirection::Right))
    }

    /// Queue an upward swipe.
    #[must_use]
    pub fn swipe_top(&self) -> bool {
        self.send(DeckCommand::Swipe(SwipeDirection::Top))
    }

    /// Queue a downward swipe.
    #[must_use]
    pub fn swipe_bottom(&self) -> bool {
        self.send(DeckCommand::Swipe(SwipeDirection::Bottom))
    }

    /// Queue a swipe back.
    #[must_use]
    pub fn swipe_back(&self) -> bool {
        self.send(DeckCommand::SwipeBack)
    }

    /// Queue a flip of the active card.
    #[must_use]
    pub fn flip_card(&self) -> bool {
        self.send(DeckCommand::Flip)
    }

    /// Snapshot of the active index. May lag the animation context.
    #[must_use]
    pub fn active_index(&self) -> IndexSnapshot {
        self.index.snapshot()
    }
}
