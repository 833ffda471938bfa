//! Error types for the command-line front end.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the run with a non-zero exit.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file missing or unreadable
    #[error("{path}: {source}")]
    Io {
        /// Path of the offending file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// First line of the grid file is not a line count
    #[error("invalid line-count header: {value:?}")]
    Header {
        /// The header line as read
        value: String,
    },

    /// Grid text inconsistent with the hexagon geometry
    #[error(transparent)]
    Grid(#[from] honeycomb_grid::GridError),
}
