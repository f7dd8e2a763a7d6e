//! Pointer event types delivered by the host framework.
//!
//! The host routes its native touch/mouse stream into [`PointerEvent`]
//! values. Positions are in window space: the panel computes drag deltas
//! between successive positions, and a moving widget origin must not shift
//! the reference frame mid-gesture.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event with a window-space position and a host timestamp.
///
/// Timestamps are milliseconds on whatever monotonic clock the host uses for
/// input; only differences between them matter (velocity tracking).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, position, time_ms)
    }
}
