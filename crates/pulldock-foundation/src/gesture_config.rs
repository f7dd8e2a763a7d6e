//! Gesture thresholds for fling recognition.
//!
//! Values are in logical pixels per second. The defaults follow common
//! mobile platform conventions (Android's ViewConfiguration uses 50 for the
//! minimum and 8000 for the maximum fling velocity at baseline density);
//! hosts on unusual displays can scale them before handing the config to a
//! panel.

/// Minimum release velocity for a gesture to count as a fling.
///
/// Releases below this are plain lifts, however far the pointer travelled.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Upper bound applied to tracked release velocities.
///
/// Input stacks occasionally report absurd spikes on release; clamping
/// keeps classification stable.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fling recognition thresholds, injectable per panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

impl GestureConfig {
    /// Whether a release velocity exceeds the fling threshold (either
    /// direction; callers check the sign for direction).
    pub fn is_fling(&self, velocity: f32) -> bool {
        velocity.abs() > self.min_fling_velocity
    }
}
