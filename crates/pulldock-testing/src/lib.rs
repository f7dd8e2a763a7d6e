//! Testing utilities for pulldock.
//!
//! [`PanelHarness`] plays the role of the host framework in tests: it owns a
//! panel, scripts timestamped pointer sequences against it, advances frames
//! at a nominal 60 fps, and records every height request the panel posts.

pub mod harness;

pub use harness::PanelHarness;
