//! Sizing policy for the panel: docked size and expanded height.

/// Docked (collapsed) height used when no other policy is supplied.
pub const DEFAULT_DOCKED_SIZE: i32 = 55;

/// The parent container's current size, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParentExtent {
    pub width: f32,
    pub height: f32,
}

impl ParentExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Strategy supplying the panel's two end-state heights.
///
/// Injected at construction; the provided defaults give the stock behavior
/// (docked at [`DEFAULT_DOCKED_SIZE`], expanded to fill the parent). Hosts
/// with other policies implement the trait and override either method.
pub trait DockMetrics {
    /// Height of the docked (collapsed) panel, in layout units.
    fn docked_size(&self) -> i32 {
        DEFAULT_DOCKED_SIZE
    }

    /// Height of the expanded panel, given the parent's current extent.
    fn expanded_height(&self, parent: &ParentExtent) -> i32 {
        parent.height as i32
    }
}

/// The stock policy: both trait defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMetrics;

impl DockMetrics for DefaultMetrics {}

/// Fixed end states, independent of the parent extent.
///
/// Useful for hosts with a design-specified sheet height, and for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub docked: i32,
    pub expanded: i32,
}

impl DockMetrics for FixedMetrics {
    fn docked_size(&self) -> i32 {
        self.docked
    }

    fn expanded_height(&self, _parent: &ParentExtent) -> i32 {
        self.expanded
    }
}
