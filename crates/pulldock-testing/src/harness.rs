//! Scripted host harness for driving a panel in tests.

use pulldock_foundation::{Point, PointerEvent};
use pulldock_ui::{DockError, DockablePanel};

/// Nominal frame period, ~60 fps.
const FRAME_STEP_MS: u64 = 16;

/// Pointer-clock step between scripted drag samples.
const DRAG_STEP_MS: i64 = 8;

/// Drives a [`DockablePanel`] the way a host framework would.
///
/// The harness keeps two clocks, matching a real host: a pointer clock that
/// advances as gestures are scripted, and a frame clock that advances 16 ms
/// per frame. Every height request the panel posts is collected into
/// [`heights`] for assertions.
///
/// Gestures are scripted robot-style: [`press`], then [`drag_to`] or
/// [`swipe_to`], then [`release`]. A drag moves in unhurried steps; a swipe
/// covers the same ground fast enough to register as a fling.
///
/// [`heights`]: PanelHarness::heights
/// [`press`]: PanelHarness::press
/// [`drag_to`]: PanelHarness::drag_to
/// [`swipe_to`]: PanelHarness::swipe_to
/// [`release`]: PanelHarness::release
pub struct PanelHarness {
    panel: DockablePanel,
    cursor: Point,
    time_ms: i64,
    frame_ms: u64,
    heights: Vec<i32>,
}

impl PanelHarness {
    pub fn new(panel: DockablePanel) -> Self {
        Self {
            panel,
            cursor: Point::ZERO,
            time_ms: 0,
            frame_ms: 0,
            heights: Vec::new(),
        }
    }

    pub fn panel(&self) -> &DockablePanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut DockablePanel {
        &mut self.panel
    }

    /// The panel's current applied height.
    pub fn height(&self) -> i32 {
        self.panel.height()
    }

    /// Every height the panel has requested layout with, in order.
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Touch down at the given position.
    pub fn press(&mut self, x: f32, y: f32) -> Result<bool, DockError> {
        self.cursor = Point::new(x, y);
        self.time_ms += DRAG_STEP_MS;
        let event = PointerEvent::down(self.cursor, self.time_ms);
        self.dispatch(&event)
    }

    /// Drag from the current position to the target in unhurried steps.
    ///
    /// Ten intermediate moves spaced 80 ms apart: a hesitant drag whose
    /// release never counts as a fling.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Result<(), DockError> {
        self.move_in_steps(x, y, 10, DRAG_STEP_MS * 10)
    }

    /// Swipe from the current position to the target fast.
    ///
    /// Five moves over 40 ms; a full-height swipe produces a release
    /// velocity far past any sensible fling threshold.
    pub fn swipe_to(&mut self, x: f32, y: f32) -> Result<(), DockError> {
        self.move_in_steps(x, y, 5, DRAG_STEP_MS)
    }

    /// Lift the pointer at the current position.
    pub fn release(&mut self) -> Result<bool, DockError> {
        self.time_ms += DRAG_STEP_MS;
        let event = PointerEvent::up(self.cursor, self.time_ms);
        self.dispatch(&event)
    }

    /// Cancel the pointer sequence at the current position.
    pub fn cancel(&mut self) -> Result<bool, DockError> {
        self.time_ms += DRAG_STEP_MS;
        let event = PointerEvent::cancel(self.cursor, self.time_ms);
        self.dispatch(&event)
    }

    /// Advance the frame clock by one nominal frame.
    pub fn advance_frame(&mut self) {
        self.advance_frame_by(FRAME_STEP_MS);
    }

    /// Advance the frame clock by an arbitrary amount.
    pub fn advance_frame_by(&mut self, delta_ms: u64) {
        self.frame_ms += delta_ms;
        self.panel.on_frame(self.frame_ms);
        self.collect();
    }

    /// Run frames until the panel goes idle.
    ///
    /// Panics if the panel is still animating after `max_frames`, which in
    /// practice means a slide failed to terminate.
    pub fn run_to_idle(&mut self, max_frames: usize) {
        for _ in 0..max_frames {
            if !self.panel.is_animating() {
                return;
            }
            self.advance_frame();
        }
        assert!(
            !self.panel.is_animating(),
            "panel still animating after {} frames",
            max_frames
        );
    }

    fn move_in_steps(&mut self, x: f32, y: f32, steps: i64, step_ms: i64) -> Result<(), DockError> {
        let from = self.cursor;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.cursor = Point::new(from.x + (x - from.x) * t, from.y + (y - from.y) * t);
            self.time_ms += step_ms;
            let event = PointerEvent::moved(self.cursor, self.time_ms);
            self.dispatch(&event)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        let handled = self.panel.handle_pointer_event(event)?;
        self.collect();
        Ok(handled)
    }

    fn collect(&mut self) {
        if let Some(request) = self.panel.take_height_request() {
            self.heights.push(request.height);
        }
    }
}

#[cfg(test)]
#[path = "tests/scenario_tests.rs"]
mod tests;
