//! Error status for retry logic

use std::fmt;

/// Whether an error can be retried.
///
/// - `Permanent`: won't resolve without external changes
/// - `Temporary`: might resolve on its own
/// - `Persistent`: was temporary but persisted after retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Don't retry without external changes (bad JSON, missing Graphviz).
    #[default]
    Permanent,

    /// Retry may succeed (transient IO).
    Temporary,

    /// Was temporary but persisted after retries.
    Persistent,
}

impl ErrorStatus {
    /// Check if retry is recommended
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    /// Mark as persistent after failed retries
    pub fn persist(self) -> Self {
        match self {
            ErrorStatus::Temporary => ErrorStatus::Persistent,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
            ErrorStatus::Persistent => "persistent",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
