//! Error types for quickentry.
//!
//! The parser itself never fails; these errors come from the surfaces around
//! it (configuration, argument handling, output formatting).

use thiserror::Error;

/// Errors raised outside the pure parsing core.
#[derive(Debug, Error)]
pub enum QuickEntryError {
    /// Configuration could not be located, read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A `--now` value that is neither a date nor a datetime.
    #[error("Invalid reference time '{0}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)")]
    InvalidReferenceTime(String),

    /// A lookup that found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
