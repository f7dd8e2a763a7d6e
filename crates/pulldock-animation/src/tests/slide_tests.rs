use super::*;
use crate::tween::{Easing, SlideSpec};

#[test]
fn endpoints_reproduce_exactly() {
    let slide = SlideAnimation::new(55, 500, SlideSpec::default());
    assert_eq!(slide.height_at(0.0), 55);
    assert_eq!(slide.height_at(1.0), 500);
}

#[test]
fn midpoint_truncates_toward_zero_when_growing() {
    // 55 + (500 - 55) * 0.5 = 277.5, truncated to 277.
    let slide = SlideAnimation::new(55, 500, SlideSpec::default());
    assert_eq!(slide.height_at(0.5), 277);
}

#[test]
fn midpoint_truncates_toward_zero_when_shrinking() {
    // 500 + (55 - 500) * 0.5 = 500 - 222.5; the delta truncates to -222.
    let slide = SlideAnimation::new(500, 55, SlideSpec::default());
    assert_eq!(slide.height_at(0.5), 278);
}

#[test]
fn progress_is_clamped_before_sampling() {
    let slide = SlideAnimation::new(100, 200, SlideSpec::default());
    assert_eq!(slide.height_at(-0.5), 100);
    assert_eq!(slide.height_at(1.5), 200);
}

#[test]
fn eased_slide_still_pins_endpoints() {
    let slide = SlideAnimation::new(55, 500, SlideSpec::tween(300, Easing::FastOutSlowIn));
    assert_eq!(slide.height_at(0.0), 55);
    assert_eq!(slide.height_at(1.0), 500);
}

#[test]
fn zero_length_slide_holds_its_height() {
    let slide = SlideAnimation::new(240, 240, SlideSpec::default());
    assert_eq!(slide.height_at(0.3), 240);
    assert_eq!(slide.height_at(1.0), 240);
}

#[test]
fn ticker_latches_the_first_frame_timestamp() {
    let mut ticker = FrameTicker::new(1000);
    assert!(!ticker.has_started());

    // The absolute value of the first timestamp is irrelevant.
    assert_eq!(ticker.progress(5_000), 0.0);
    assert!(ticker.has_started());
    assert_eq!(ticker.progress(5_500), 0.5);
    assert_eq!(ticker.progress(6_000), 1.0);
}

#[test]
fn ticker_clamps_past_the_duration() {
    let mut ticker = FrameTicker::new(1000);
    ticker.progress(0);
    assert_eq!(ticker.progress(10_000), 1.0);
}

#[test]
fn ticker_tolerates_a_backwards_timestamp() {
    let mut ticker = FrameTicker::new(1000);
    ticker.progress(500);
    // Saturating elapsed keeps progress at zero rather than wrapping.
    assert_eq!(ticker.progress(400), 0.0);
}

#[test]
fn zero_duration_completes_on_the_second_frame() {
    let mut ticker = FrameTicker::new(0);
    assert_eq!(ticker.progress(100), 0.0);
    assert_eq!(ticker.progress(101), 1.0);
}
