//! Result type definition and logging combinator.
//!
//! Lets callers fall back from a failed ambient operation without
//! unwrap/expect while still leaving a trace of what went wrong.

use crate::error::Error;

/// The standard Result type for Kindred ambient operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logged fallbacks for Results.
pub trait ResultExt<T> {
    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}
