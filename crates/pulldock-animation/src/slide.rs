//! The slide animation value and the ticker that drives it.

use crate::tween::SlideSpec;

/// An in-flight slide between two heights.
///
/// Both endpoints are captured at construction and never re-evaluated; the
/// animation itself is immutable and sampled by [`height_at`]. The integer
/// heights are layout units; the sampled height truncates the scaled delta
/// toward zero, so both endpoints reproduce exactly at progress 0 and 1.
///
/// [`height_at`]: SlideAnimation::height_at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    source: i32,
    target: i32,
    spec: SlideSpec,
}

impl SlideAnimation {
    pub fn new(source: i32, target: i32, spec: SlideSpec) -> Self {
        Self {
            source,
            target,
            spec,
        }
    }

    pub fn source(&self) -> i32 {
        self.source
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn spec(&self) -> SlideSpec {
        self.spec
    }

    /// Sample the height at a progress fraction.
    ///
    /// Progress is clamped to [0, 1] before easing, so overshooting frame
    /// timestamps cannot push the height past the target.
    pub fn height_at(&self, progress: f32) -> i32 {
        let eased = self.spec.easing.transform(progress.clamp(0.0, 1.0));
        let delta = (self.target - self.source) as f32 * eased;
        self.source + delta as i32
    }
}

/// Converts host frame timestamps into slide progress.
///
/// The first timestamp handed to [`progress`] latches as the start of the
/// slide; later timestamps yield elapsed-over-duration, clamped to [0, 1].
/// One ticker serves one slide; start the next slide with a fresh ticker.
///
/// [`progress`]: FrameTicker::progress
#[derive(Debug, Clone)]
pub struct FrameTicker {
    duration_millis: u64,
    start_ms: Option<u64>,
}

impl FrameTicker {
    pub fn new(duration_millis: u64) -> Self {
        Self {
            duration_millis,
            start_ms: None,
        }
    }

    /// Normalized progress at the given frame timestamp (milliseconds).
    pub fn progress(&mut self, now_ms: u64) -> f32 {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let duration = self.duration_millis.max(1);
        (elapsed as f32 / duration as f32).clamp(0.0, 1.0)
    }

    pub fn has_started(&self) -> bool {
        self.start_ms.is_some()
    }
}

#[cfg(test)]
#[path = "tests/slide_tests.rs"]
mod tests;
