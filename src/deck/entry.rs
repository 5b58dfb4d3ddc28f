//! Mounted cards keyed by data index.

use rustc_hash::FxHashMap;

use crate::card::{CardVisual, SwipeCard};
use crate::controls::ControlRegistry;

/// One mounted card: its key, rendered content and state machine.
#[derive(Debug)]
pub struct CardEntry<R> {
    /// Stable key from the key extractor (or the index).
    pub key: String,
    /// Absolute data index.
    pub index: usize,
    /// Front content from the renderer.
    pub content: R,
    /// Back content, if flipped content is configured.
    pub back: Option<R>,
    /// Gesture state machine and animations.
    pub card: SwipeCard,
}

/// What the host draws for one card this frame.
#[derive(Debug)]
pub struct CardFrame<'a, R> {
    /// Stable key.
    pub key: &'a str,
    /// Absolute data index.
    pub index: usize,
    /// Front content.
    pub content: &'a R,
    /// Back content.
    pub back: Option<&'a R>,
    /// Transform, opacity and overlays.
    pub visual: CardVisual,
}

/// The cards currently instantiated by a deck.
#[derive(Debug)]
pub struct MountedCards<R> {
    entries: FxHashMap<usize, CardEntry<R>>,
}

impl<R> Default for MountedCards<R> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<R> MountedCards<R> {
    /// Number of mounted cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the card at `index` is mounted.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardEntry<R>> {
        self.entries.get(&index)
    }

    /// Mutable entry at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CardEntry<R>> {
        self.entries.get_mut(&index)
    }

    /// Mount `entry`, replacing any card at the same index.
    pub fn insert(&mut self, entry: CardEntry<R>) {
        if let Some(old) = self.entries.insert(entry.index, entry) {
            log::debug!("replaced mounted card {}", old.index);
        }
    }

    /// Unmount every card for which `keep` is false.
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        self.entries.retain(|&index, _| keep(index));
    }

    /// Mounted indices, highest first (render order).
    #[must_use]
    pub fn indices_back_to_front(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.entries.keys().copied().collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices
    }

    /// All entries, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardEntry<R>> {
        self.entries.values_mut()
    }
}

impl<R> ControlRegistry for MountedCards<R> {
    type Handle = SwipeCard;

    fn handle_mut(&mut self, index: usize) -> Option<&mut SwipeCard> {
        self.entries.get_mut(&index).map(|entry| &mut entry.card)
    }

    fn for_each_handle(&mut self, f: &mut dyn FnMut(&mut SwipeCard)) {
        for entry in self.entries.values_mut() {
            f(&mut entry.card);
        }
    }
}
