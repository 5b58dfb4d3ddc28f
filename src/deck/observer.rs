//! Derived index notifications.

use crate::events::{DeckEvent, HostScheduler};

/// Watches the floored active index and emits `IndexChanged` and
/// `SwipedAll` exactly when they apply.
///
/// `SwipedAll` is latched: it fires once when the index reaches the data
/// length and re-arms only after the index drops back below it (swipe
/// back, or the list grows).
#[derive(Debug, Clone)]
pub struct IndexObserver {
    last_floor: usize,
    exhausted: bool,
}

impl IndexObserver {
    /// Observer starting from `floor`, already latched if that is past the
    /// end of a non-empty list.
    #[must_use]
    pub fn new(floor: usize, len: usize, looping: bool) -> Self {
        Self {
            last_floor: floor,
            exhausted: is_exhausted(floor, len, looping),
        }
    }

    /// Last floored index reported.
    #[must_use]
    pub fn last_floor(&self) -> usize {
        self.last_floor
    }

    /// Compare against the current index and dispatch what changed.
    pub fn observe(
        &mut self,
        floor: usize,
        len: usize,
        looping: bool,
        events: &mut dyn HostScheduler,
    ) {
        if floor != self.last_floor {
            log::debug!("index {} -> {floor}", self.last_floor);
            self.last_floor = floor;
            events.dispatch(DeckEvent::IndexChanged(floor));
        }
        let exhausted = is_exhausted(floor, len, looping);
        if exhausted && !self.exhausted {
            log::debug!("all {len} cards swiped");
            events.dispatch(DeckEvent::SwipedAll);
        }
        self.exhausted = exhausted;
    }
}

fn is_exhausted(floor: usize, len: usize, looping: bool) -> bool {
    !looping && len > 0 && floor >= len
}
