//! Panel error type.

/// Errors surfaced to the host instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockError {
    /// The expanded height was requested before the host reported the
    /// parent container's extent.
    ParentUnavailable,
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DockError::ParentUnavailable => {
                write!(f, "parent extent not reported; expanded height unknown")
            }
        }
    }
}

impl std::error::Error for DockError {}
