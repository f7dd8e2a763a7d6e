//! The dockable pull-up panel.
//!
//! [`DockablePanel`] is a bottom-sheet style widget: the user drags it to
//! resize it live, flings it upward to collapse it to a docked strip, or
//! lifts the pointer to snap it open. The host framework routes pointer
//! events in, advances the panel once per frame while a slide is running,
//! and drains [`HeightRequest`] values to lay the panel out.
//!
//! The panel owns its height outright; it never touches the host's layout
//! objects. Sizing policy (docked size, expanded height) is injected through
//! the [`DockMetrics`] strategy.

pub mod error;
pub mod metrics;
pub mod panel;

pub use error::DockError;
pub use metrics::{DefaultMetrics, DockMetrics, FixedMetrics, ParentExtent, DEFAULT_DOCKED_SIZE};
pub use panel::{DockablePanel, HeightRequest, SlideTarget};
