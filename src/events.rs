//! Notifications delivered from the animation context to the host.
//!
//! The deck never calls host code directly. Every notification is a
//! [`DeckEvent`] handed to a [`HostScheduler`], which either runs the
//! matching [`SwipeCallbacks`] entry in place ([`InlineScheduler`]) or
//! posts the event over a channel for the host thread to drain
//! ([`queued`]). Events are dispatched in the order they happen, so a
//! host always sees `Swiped` before the `IndexChanged` it caused.

use std::sync::mpsc;

use crate::direction::SwipeDirection;

/// Something the host may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// A card was committed towards `direction`.
    Swiped {
        /// Direction it left in.
        direction: SwipeDirection,
        /// Absolute data index of the card.
        index: usize,
    },
    /// The floored active index changed.
    IndexChanged(usize),
    /// The active index reached the end of the data (not looping).
    SwipedAll,
    /// A pan began on the active card.
    SwipeStart,
    /// The active card moved under a pan.
    SwipeActive,
    /// A pan on the active card ended.
    SwipeEnd,
    /// The active card was tapped.
    Press,
}

/// Delivers [`DeckEvent`]s to the host context.
///
/// Required at construction: a deck with nowhere to send its
/// notifications is a configuration error.
pub trait HostScheduler: Send {
    /// Hand one event to the host. Must not call back into the deck.
    fn dispatch(&mut self, event: DeckEvent);
}

type IndexCallback = Box<dyn FnMut(usize) + Send>;
type Callback = Box<dyn FnMut() + Send>;

/// Optional host callbacks. Absent callbacks are simply not invoked.
#[derive(Default)]
pub struct SwipeCallbacks {
    on_swipe_left: Option<IndexCallback>,
    on_swipe_right: Option<IndexCallback>,
    on_swipe_top: Option<IndexCallback>,
    on_swipe_bottom: Option<IndexCallback>,
    on_index_change: Option<IndexCallback>,
    on_swiped_all: Option<Callback>,
    on_swipe_start: Option<Callback>,
    on_swipe_active: Option<Callback>,
    on_swipe_end: Option<Callback>,
    on_press: Option<Callback>,
}

impl std::fmt::Debug for SwipeCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeCallbacks")
            .field("on_swipe_left", &self.on_swipe_left.is_some())
            .field("on_swipe_right", &self.on_swipe_right.is_some())
            .field("on_swipe_top", &self.on_swipe_top.is_some())
            .field("on_swipe_bottom", &self.on_swipe_bottom.is_some())
            .field("on_index_change", &self.on_index_change.is_some())
            .field("on_swiped_all", &self.on_swiped_all.is_some())
            .field("on_press", &self.on_press.is_some())
            .finish_non_exhaustive()
    }
}

impl SwipeCallbacks {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the card index after a left commit.
    #[must_use]
    pub fn on_swipe_left(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(f));
        self
    }

    /// Called with the card index after a right commit.
    #[must_use]
    pub fn on_swipe_right(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(f));
        self
    }

    /// Called with the card index after an upward commit.
    #[must_use]
    pub fn on_swipe_top(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_swipe_top = Some(Box::new(f));
        self
    }

    /// Called with the card index after a downward commit.
    #[must_use]
    pub fn on_swipe_bottom(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_swipe_bottom = Some(Box::new(f));
        self
    }

    /// Called with the new floored index whenever it changes.
    #[must_use]
    pub fn on_index_change(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_index_change = Some(Box::new(f));
        self
    }

    /// Called once each time the deck runs out of cards.
    #[must_use]
    pub fn on_swiped_all(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_swiped_all = Some(Box::new(f));
        self
    }

    /// Called when a pan begins on the active card.
    #[must_use]
    pub fn on_swipe_start(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_start = Some(Box::new(f));
        self
    }

    /// Called on every pan update of the active card.
    #[must_use]
    pub fn on_swipe_active(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_active = Some(Box::new(f));
        self
    }

    /// Called when a pan on the active card ends.
    #[must_use]
    pub fn on_swipe_end(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_end = Some(Box::new(f));
        self
    }

    /// Called when the active card is tapped.
    #[must_use]
    pub fn on_press(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Run the callback matching `event`, if one is set.
    pub fn deliver(&mut self, event: DeckEvent) {
        match event {
            DeckEvent::Swiped { direction, index } => {
                let slot = match direction {
                    SwipeDirection::Left => &mut self.on_swipe_left,
                    SwipeDirection::Right => &mut self.on_swipe_right,
                    SwipeDirection::Top => &mut self.on_swipe_top,
                    SwipeDirection::Bottom => &mut self.on_swipe_bottom,
                };
                if let Some(f) = slot {
                    f(index);
                }
            }
            DeckEvent::IndexChanged(index) => {
                if let Some(f) = &mut self.on_index_change {
                    f(index);
                }
            }
            DeckEvent::SwipedAll => call(&mut self.on_swiped_all),
            DeckEvent::SwipeStart => call(&mut self.on_swipe_start),
            DeckEvent::SwipeActive => call(&mut self.on_swipe_active),
            DeckEvent::SwipeEnd => call(&mut self.on_swipe_end),
            DeckEvent::Press => call(&mut self.on_press),
        }
    }
}

fn call(slot: &mut Option<Callback>) {
    if let Some(f) = slot {
        f();
    }
}

/// Runs callbacks immediately on the animation context.
#[derive(Debug, Default)]
pub struct InlineScheduler {
    callbacks: SwipeCallbacks,
}

impl InlineScheduler {
    /// Scheduler running `callbacks` in place.
    #[must_use]
    pub fn new(callbacks: SwipeCallbacks) -> Self {
        Self { callbacks }
    }
}

impl HostScheduler for InlineScheduler {
    fn dispatch(&mut self, event: DeckEvent) {
        self.callbacks.deliver(event);
    }
}

/// Sending half of a [`queued`] scheduler.
#[derive(Debug, Clone)]
pub struct QueuedScheduler {
    sender: mpsc::Sender<DeckEvent>,
}

impl HostScheduler for QueuedScheduler {
    fn dispatch(&mut self, event: DeckEvent) {
        if self.sender.send(event).is_err() {
            log::debug!("event queue closed, dropping {event:?}");
        }
    }
}

/// Receiving half of a [`queued`] scheduler, owned by the host context.
#[derive(Debug)]
pub struct EventQueue {
    receiver: mpsc::Receiver<DeckEvent>,
}

impl EventQueue {
    /// Pending events in dispatch order, without blocking.
    pub fn try_iter(&self) -> impl Iterator<Item = DeckEvent> + '_ {
        self.receiver.try_iter()
    }

    /// Collect every pending event.
    #[must_use]
    pub fn drain(&self) -> Vec<DeckEvent> {
        self.try_iter().collect()
    }

    /// Run `callbacks` for every pending event; returns how many ran.
    pub fn deliver(&self, callbacks: &mut SwipeCallbacks) -> usize {
        let mut count = 0;
        for event in self.try_iter() {
            callbacks.deliver(event);
            count += 1;
        }
        count
    }
}

/// A scheduler that posts events to a channel, and the queue the host
/// drains them from.
#[must_use]
pub fn queued() -> (QueuedScheduler, EventQueue) {
    let (sender, receiver) = mpsc::channel();
    (QueuedScheduler { sender }, EventQueue { receiver })
}
