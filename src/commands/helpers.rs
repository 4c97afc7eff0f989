//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, TokhookError};

/// Resolve a directory argument to an absolute path
///
/// If a path is provided, use it (canonicalized when it exists, so log
/// lines show clean absolute paths). Otherwise resolve to the current
/// directory.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(dunce::canonicalize(&path).unwrap_or(path)),
        None => std::env::current_dir().map_err(|e| TokhookError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
