//! Error types for grid construction.

use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Ring text inconsistent with the hexagon geometry
    #[error("ring {ring} holds {found} cells, expected {expected}")]
    RingSize {
        /// Ring index of the offending line
        ring: usize,
        /// Cell count the geometry requires
        expected: usize,
        /// Cell count the line actually holds
        found: usize,
    },
}
