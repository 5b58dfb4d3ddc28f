//! Input handling: pan/tap gesture types and the processor that turns raw
//! pointer events into them.

/// Pan, tap and pointer event types.
pub mod event;
/// Converts raw pointer events into gestures.
pub mod processor;

pub use event::{GestureEvent, PanEvent, PointerEvent, TapEvent};
pub use processor::{GestureProcessor, DEFAULT_SLOP};
