//! Error types for JSD export.

use std::path::PathBuf;
use thiserror::Error;

use jsd_convert::ConvertError;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting a scene to a JSD file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination path could not be opened for writing.
    ///
    /// Raised before any bytes are written; a failed export leaves no file
    /// behind.
    #[error("cannot write to '{}': {source}", .path.display())]
    UnwritableDestination {
        /// The requested destination.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Scene conversion failed; no document was serialized.
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing the document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
