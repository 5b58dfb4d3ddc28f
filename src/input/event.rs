//! Gesture vocabulary: raw pointer samples and the pan/tap events derived
//! from them.

use glam::Vec2;
use web_time::Duration;

/// One sample of a continuous pan gesture, in the coordinate space of the
/// card's parent. Translations are cumulative from where the pan began.
///
/// # Example
///
/// ```ignore
/// deck.handle_top_pan(PanEvent::Begin);
/// deck.handle_top_pan(PanEvent::Update { translation: Vec2::new(40.0, 0.0) });
/// deck.handle_top_pan(PanEvent::End {
///     translation: Vec2::new(160.0, 0.0),
///     velocity: Vec2::new(900.0, 0.0),
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    /// The pan started receiving touches.
    Begin,
    /// The pointer moved.
    Update {
        /// Offset from the start of the pan.
        translation: Vec2,
    },
    /// The pan ended (released, cancelled or failed).
    End {
        /// Offset from the start of the pan at release.
        translation: Vec2,
        /// Release velocity in px/s.
        velocity: Vec2,
    },
}

/// Outcome of a tap gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapEvent {
    /// Whether the tap was recognized (released without dragging).
    pub success: bool,
}

/// Raw platform pointer input, for hosts without their own pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down {
        /// Position in parent coordinates.
        position: Vec2,
        /// Monotonic timestamp.
        time: Duration,
    },
    /// Pointer moved while pressed.
    Move {
        /// Position in parent coordinates.
        position: Vec2,
        /// Monotonic timestamp.
        time: Duration,
    },
    /// Pointer released.
    Up {
        /// Position in parent coordinates.
        position: Vec2,
        /// Monotonic timestamp.
        time: Duration,
    },
    /// The platform took the pointer away.
    Cancel,
}

/// A recognized gesture produced by
/// [`GestureProcessor`](super::GestureProcessor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pan lifecycle sample.
    Pan(PanEvent),
    /// Tap outcome.
    Tap(TapEvent),
}
