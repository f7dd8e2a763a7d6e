//! Slide animation for pulldock.
//!
//! A slide is an immutable pair of heights plus a timing spec, sampled as a
//! pure function of progress. The host's animation scheduler owns the clock:
//! it hands frame timestamps to a [`FrameTicker`], which converts them into
//! the normalized progress the slide is sampled at. Nothing in this crate
//! reads a clock or mutates animation state in place.

pub mod slide;
pub mod tween;

pub use slide::{FrameTicker, SlideAnimation};
pub use tween::{Easing, Lerp, SlideSpec};
