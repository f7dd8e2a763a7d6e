//! Release-velocity tracking for fling classification.
//!
//! Implements the impulse strategy Android uses for touch velocity: the
//! velocity estimate is derived from the kinetic energy the sampled motion
//! would have imparted, which is robust against the uneven event spacing
//! real input streams have.

/// Ring buffer capacity for position samples.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest one) are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between successive samples means the pointer stopped
/// moving before release; everything before the gap is discarded.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks one axis of pointer motion and estimates the release velocity.
///
/// Feed it timestamped positions while a gesture is active, then ask for
/// the velocity in units/second when the pointer lifts. Position samples
/// are absolute window-space coordinates.
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records a position sample at the given time (milliseconds).
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Estimates the current velocity in units/second.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when the pointer
    /// had already stopped moving before the newest sample.
    pub fn velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut index = self.index;
        let mut newer_time = newest.time_ms;

        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = newer_time - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            newer_time = sample.time_ms;

            positions[count] = sample.position;
            times[count] = -(age as f32);

            index = if index == 0 { HISTORY_SIZE - 1 } else { index - 1 };
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// Estimates the velocity, clamped to `[-max_velocity, max_velocity]`.
    pub fn velocity_clamped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Discards all samples; call at the end of a gesture.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Impulse-strategy velocity over samples ordered newest-first.
///
/// `times` are non-positive milliseconds relative to the newest sample.
/// Returns units/millisecond.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    if positions.len() < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let oldest = positions.len() - 1;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let distance = positions[i] - positions[i - 1];
        let v_curr = distance / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Inverts E = 0.5 * m * v^2 with unit mass, keeping the sign of the energy.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
