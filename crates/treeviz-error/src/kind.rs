//! Error kinds for treeviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to react, e.g. suggesting a
/// Graphviz install on `RasterizerUnavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to function
    InvalidArgument,

    /// Invalid configuration (naming file, command-line options)
    ConfigInvalid,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// The tree structure could not be decoded
    DeserializationFailed,

    /// The tree structure could not be encoded
    SerializationFailed,

    /// Input is in an unknown or unsupported format
    InvalidFormat,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Rasterization errors
    // =========================================================================
    /// The external graph-layout tool is not installed or not on PATH
    RasterizerUnavailable,

    /// The external graph-layout tool ran but did not produce an image
    RasterizeFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}
