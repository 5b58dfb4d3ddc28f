//! Frame-stepped animation of shared scalars.
//!
//! Card translation, press feedback, flip spin and the stacked
//! scale/opacity all live in [`AnimatedValue`]s: a spring or timing driver
//! owned by the animation context, publishing into an atomic
//! [`SharedValue`] any thread may read.

pub mod spring;
pub mod timing;
pub mod value;

pub use spring::{SpringAnimation, SpringStep};
pub use timing::TimingAnimation;
pub use value::{AnimatedValue, SharedValue};
