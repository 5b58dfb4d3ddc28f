//! The shared active-index counter.

use crate::animation::SharedValue;

/// Which card is on top, shared by the coordinator, every mounted card and
/// any host handle.
///
/// Stored as an atomic `f32`: integral at rest, written only from the
/// animation context. Host reads are snapshots. Indices are exact up to
/// [`MAX_EXACT_INDEX`]; past it `advance` can no longer step by one.
#[derive(Debug, Clone, Default)]
pub struct ActiveIndex {
    value: SharedValue,
}

/// Largest index an `f32` counter still steps through one at a time
/// (2^24).
pub const MAX_EXACT_INDEX: usize = 1 << 24;

/// A versioned read of the [`ActiveIndex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexSnapshot {
    /// Raw counter value.
    pub value: f32,
    /// Number of writes observed.
    pub version: u64,
}

impl IndexSnapshot {
    /// Floored card index.
    #[must_use]
    pub fn floor(&self) -> usize {
        floor_index(self.value)
    }
}

fn floor_index(value: f32) -> usize {
    if value.is_finite() && value > 0.0 {
        value.floor() as usize
    } else {
        0
    }
}

impl ActiveIndex {
    /// Counter starting at `initial`.
    #[must_use]
    pub fn new(initial: usize) -> Self {
        Self {
            value: SharedValue::new(initial as f32),
        }
    }

    /// Raw counter value.
    #[must_use]
    pub fn get(&self) -> f32 {
        self.value.get()
    }

    /// Index of the card currently on top.
    #[must_use]
    pub fn floor(&self) -> usize {
        floor_index(self.value.get())
    }

    /// Whether the card at `index` is the one accepting input.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.floor() == index
    }

    /// Increment by exactly one while below [`MAX_EXACT_INDEX`]; returns
    /// the new value.
    #[must_use]
    pub fn advance(&self) -> f32 {
        self.value.update(|v| v + 1.0)
    }

    /// Jump to `index`.
    pub fn set(&self, index: usize) {
        self.value.set(index as f32);
    }

    /// Versioned read for host-side change detection.
    #[must_use]
    pub fn snapshot(&self) -> IndexSnapshot {
        let version = self.value.version();
        IndexSnapshot {
            value: self.value.get(),
            version,
        }
    }
}
