//! Interpolation, easing curves, and the slide timing spec.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing curves applicable to slide progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing; progress maps straight through.
    Linear,
    /// Ease in using a cubic curve.
    EaseIn,
    /// Ease out using a cubic curve.
    EaseOut,
    /// Ease in and out using a cubic curve.
    EaseInOut,
    /// Fast out, slow in (the material design standard curve).
    FastOutSlowIn,
    /// Linear out, slow in (material design incoming curve).
    LinearOutSlowIn,
    /// Fast out, linear in (material design outgoing curve).
    FastOutLinear,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinear => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve evaluation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric value `t` matching the x fraction,
    // clamped to [0, 1] to keep the solution within bounds.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Fall back to binary subdivision if Newton-Raphson did not converge.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Timing specification for a slide: duration plus easing.
///
/// The default is a one-second linear slide, the classic bottom-sheet snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing applied to the linear progress fraction.
    pub easing: Easing,
}

impl SlideSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for SlideSpec {
    fn default() -> Self {
        Self::linear(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_interpolates_endpoints_exactly() {
        assert_eq!(0.0f32.lerp(&10.0, 0.0), 0.0);
        assert_eq!(0.0f32.lerp(&10.0, 1.0), 10.0);
        assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
        assert_eq!(100.0f64.lerp(&0.0, 0.25), 75.0);
    }

    #[test]
    fn linear_easing_is_identity() {
        for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(Easing::Linear.transform(fraction), fraction);
        }
    }

    #[test]
    fn every_easing_pins_its_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
            Easing::FastOutLinear,
        ];
        for easing in curves {
            assert_eq!(easing.transform(0.0), 0.0, "{:?} at 0", easing);
            assert_eq!(easing.transform(1.0), 1.0, "{:?} at 1", easing);
        }
    }

    #[test]
    fn ease_in_starts_slower_than_linear() {
        let eased = Easing::EaseIn.transform(0.25);
        assert!(eased < 0.25, "expected < 0.25, got {}", eased);
    }

    #[test]
    fn ease_out_starts_faster_than_linear() {
        let eased = Easing::EaseOut.transform(0.25);
        assert!(eased > 0.25, "expected > 0.25, got {}", eased);
    }

    #[test]
    fn default_spec_is_the_one_second_linear_snap() {
        let spec = SlideSpec::default();
        assert_eq!(spec.duration_millis, 1000);
        assert_eq!(spec.easing, Easing::Linear);
    }
}
