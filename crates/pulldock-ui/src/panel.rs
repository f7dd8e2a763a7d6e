//! The panel: gesture interpretation, slide driving, and height requests.

use log::{debug, trace, warn};
use pulldock_animation::{FrameTicker, SlideAnimation, SlideSpec};
use pulldock_foundation::{GestureConfig, PointerEvent, PointerEventKind, VelocityTracker};

use crate::error::DockError;
use crate::metrics::{DockMetrics, ParentExtent};

/// Which end state a slide is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTarget {
    Docked,
    Expanded,
}

/// A pending re-layout request: the height the host should lay the panel
/// out with. Drained via [`DockablePanel::take_height_request`]; only the
/// most recent request is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightRequest {
    pub height: i32,
}

enum PanelState {
    Idle,
    Animating {
        animation: SlideAnimation,
        ticker: FrameTicker,
    },
}

/// A container panel that drags between a docked strip and an expanded
/// sheet.
///
/// Pointer events resize the panel live while it is idle. Releasing the
/// pointer snaps it open; an upward fling snaps it to the docked size.
/// While a slide runs, pointer input is ignored until the slide finishes —
/// manual dragging and the snap animation are mutually exclusive states.
///
/// The host drives the panel: route pointer events to
/// [`handle_pointer_event`], report the parent's size with
/// [`set_parent_extent`], call [`on_frame`] once per frame, and drain
/// [`take_height_request`] to perform layout.
///
/// [`handle_pointer_event`]: DockablePanel::handle_pointer_event
/// [`set_parent_extent`]: DockablePanel::set_parent_extent
/// [`on_frame`]: DockablePanel::on_frame
/// [`take_height_request`]: DockablePanel::take_height_request
pub struct DockablePanel {
    metrics: Box<dyn DockMetrics>,
    gesture_config: GestureConfig,
    slide_spec: SlideSpec,
    state: PanelState,
    // Owned height; f32 so drag deltas accumulate without truncation.
    height: f32,
    parent: Option<ParentExtent>,
    anchor_y: Option<f32>,
    tracker: VelocityTracker,
    pending: Option<HeightRequest>,
}

impl DockablePanel {
    /// Create a panel starting at the docked size.
    pub fn new(metrics: impl DockMetrics + 'static) -> Self {
        let height = metrics.docked_size() as f32;
        Self {
            metrics: Box::new(metrics),
            gesture_config: GestureConfig::default(),
            slide_spec: SlideSpec::default(),
            state: PanelState::Idle,
            height,
            parent: None,
            anchor_y: None,
            tracker: VelocityTracker::new(),
            pending: None,
        }
    }

    pub fn with_gesture_config(mut self, config: GestureConfig) -> Self {
        self.gesture_config = config;
        self
    }

    pub fn with_slide_spec(mut self, spec: SlideSpec) -> Self {
        self.slide_spec = spec;
        self
    }

    /// Record the parent container's current size.
    ///
    /// Required before a slide to the expanded height can be constructed;
    /// the expanded height is resolved from the extent on record at slide
    /// construction, not continuously.
    pub fn set_parent_extent(&mut self, extent: ParentExtent) {
        self.parent = Some(extent);
    }

    /// The current applied height in layout units (truncated toward zero).
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, PanelState::Animating { .. })
    }

    /// Drain the pending re-layout request, if any.
    pub fn take_height_request(&mut self) -> Option<HeightRequest> {
        self.pending.take()
    }

    /// Feed one pointer event to the panel.
    ///
    /// Returns `Ok(true)` when the event was acted on and `Ok(false)` when
    /// it was ignored because a slide is running. The only error is
    /// [`DockError::ParentUnavailable`], from the release path when the
    /// expanded height cannot be resolved yet.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        if self.is_animating() {
            return Ok(false);
        }

        match event.kind {
            PointerEventKind::Down => {
                self.tracker.reset();
                self.tracker.add_sample(event.time_ms, event.position.y);
                self.anchor_y = Some(event.position.y);
                trace!("gesture started at y={}", event.position.y);
                Ok(true)
            }
            PointerEventKind::Move => {
                let y = event.position.y;
                match self.anchor_y {
                    Some(anchor) => {
                        // Upward motion is a positive delta: the panel grows
                        // as the finger pulls up. Advancing the anchor keeps
                        // deltas position-relative across events.
                        let delta = anchor - y;
                        self.height += delta;
                        self.anchor_y = Some(y);
                        self.post_height();
                    }
                    None => {
                        // A move with no preceding down primes the anchor
                        // without applying a delta.
                        self.anchor_y = Some(y);
                    }
                }
                self.tracker.add_sample(event.time_ms, y);
                Ok(true)
            }
            PointerEventKind::Up => {
                let velocity = self
                    .tracker
                    .velocity_clamped(self.gesture_config.max_fling_velocity);
                self.reset_gesture();
                // Negative y velocity is upward. A qualifying upward fling
                // collapses the panel; any other release snaps it open,
                // regardless of which way the drag went.
                if velocity < 0.0 && self.gesture_config.is_fling(velocity) {
                    debug!("upward fling at {velocity} units/s");
                    self.slide(SlideTarget::Docked)?;
                } else {
                    self.slide(SlideTarget::Expanded)?;
                }
                Ok(true)
            }
            PointerEventKind::Cancel => {
                self.reset_gesture();
                trace!("gesture cancelled");
                Ok(true)
            }
        }
    }

    /// Start a slide toward the given end state.
    ///
    /// Both endpoints are resolved now and captured in the animation; the
    /// panel enters the animating state immediately.
    pub fn slide(&mut self, target: SlideTarget) -> Result<(), DockError> {
        let target_height = match target {
            SlideTarget::Docked => self.metrics.docked_size(),
            SlideTarget::Expanded => {
                let parent = self.parent.as_ref().ok_or_else(|| {
                    warn!("expand requested before the parent extent was reported");
                    DockError::ParentUnavailable
                })?;
                self.metrics.expanded_height(parent)
            }
        };

        let source = self.height();
        debug!(
            "slide {:?}: {} -> {} over {} ms",
            target, source, target_height, self.slide_spec.duration_millis
        );
        self.state = PanelState::Animating {
            animation: SlideAnimation::new(source, target_height, self.slide_spec),
            ticker: FrameTicker::new(self.slide_spec.duration_millis),
        };
        trace!("state: idle -> animating");
        Ok(())
    }

    /// Advance an active slide to the given frame timestamp (milliseconds).
    ///
    /// Posts a height request every frame while a slide runs; the slide
    /// changes layout bounds, so the host must re-layout each frame even
    /// when the integer height repeats. Idle frames do nothing.
    pub fn on_frame(&mut self, now_ms: u64) {
        let (height, finished) = match &mut self.state {
            PanelState::Idle => return,
            PanelState::Animating { animation, ticker } => {
                let progress = ticker.progress(now_ms);
                (animation.height_at(progress), progress >= 1.0)
            }
        };

        self.height = height as f32;
        self.post_height();

        if finished {
            self.state = PanelState::Idle;
            trace!("state: animating -> idle");
        }
    }

    fn post_height(&mut self) {
        self.pending = Some(HeightRequest {
            height: self.height(),
        });
    }

    fn reset_gesture(&mut self) {
        self.anchor_y = None;
        self.tracker.reset();
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
