//! Foundation elements for pulldock: pointer input and gesture support.
//!
//! This crate carries the pieces a host embeds to feed a panel with input:
//! the pointer event model, a 1D velocity tracker for release-velocity
//! classification, and the gesture thresholds that decide when a release
//! counts as a fling.

pub mod gesture_config;
pub mod pointer;
pub mod velocity;

pub use gesture_config::{GestureConfig, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
pub use pointer::{Point, PointerEvent, PointerEventKind};
pub use velocity::VelocityTracker;

pub mod prelude {
    pub use crate::gesture_config::GestureConfig;
    pub use crate::pointer::{Point, PointerEvent, PointerEventKind};
    pub use crate::velocity::VelocityTracker;
}
