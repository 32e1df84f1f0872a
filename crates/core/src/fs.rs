//! Filesystem helpers that report failures as [`Error`] values.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read a whole text file.
///
/// # Errors
///
/// Returns [`Error::FileReadFailed`] if the file cannot be opened or is not UTF-8.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|e| Error::file_read_failed(path, e.to_string()))
}

/// Read a text file if it exists.
///
/// # Errors
///
/// Returns [`Error::FileReadFailed`] for any failure other than the file being absent.
pub fn read_optional(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::file_read_failed(path, e.to_string())),
    }
}

/// Write `contents` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::FileWriteFailed`] if the file cannot be created or written.
pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {}", path.display());
    std::fs::write(path, contents).map_err(|e| Error::file_write_failed(path, e.to_string()))
}
