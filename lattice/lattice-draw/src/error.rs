//! Error types for schematic drawing.

use thiserror::Error;

/// Result type for drawing operations.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Errors that can occur while drawing a schematic.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The projection axis selector was not `"x"` or `"y"`.
    ///
    /// Never defaulted: both the centerline and the per-patch paths
    /// reject an unrecognised axis outright.
    #[error("unrecognised projection axis {axis:?} (expected \"x\" or \"y\")")]
    UnknownProjection {
        /// The offending selector value.
        axis: String,
    },

    /// A figure violated the subplot contract.
    #[error("figure layout error: {message}")]
    Layout {
        /// What went wrong.
        message: String,
    },
}

impl DrawError {
    /// Create an `UnknownProjection` error.
    #[must_use]
    pub fn unknown_projection(axis: impl Into<String>) -> Self {
        Self::UnknownProjection { axis: axis.into() }
    }

    /// Create a `Layout` error.
    #[must_use]
    pub fn layout(message: impl Into<String>) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }
}
