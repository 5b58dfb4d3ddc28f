//! Shared helpers: easing curves, clamped interpolation, snap points,
//! position reset/fling helpers and a wall-clock frame stepper.

pub mod easing;
pub mod frame_timing;
pub mod interpolate;
pub mod position;
pub mod snap;

pub use easing::Easing;
pub use frame_timing::FrameClock;
pub use interpolate::{interpolate_clamped, interpolate_or};
pub use position::{reset_position, update_position};
pub use snap::snap_point;
