//! Error types and handling for tokhook
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tokhook operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokhookError {
    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(tokhook::manifest::not_found),
        help("Run from the Cordova project root or pass --project-root")
    )]
    ManifestNotFound { path: String },

    #[error("No widget id found in manifest: {path}")]
    #[diagnostic(
        code(tokhook::manifest::unparsable),
        help("config.xml must declare <widget id=\"...\"> as its root element")
    )]
    ManifestUnparsable { path: String },

    // Rewrite errors
    #[error("Source file not found: {path}")]
    #[diagnostic(
        code(tokhook::rewrite::source_not_found),
        help("Run after the Android platform has been added and prepared")
    )]
    SourceFileNotFound { path: String },

    // SDK errors
    #[error("Failed to download SDK archive from {url}")]
    #[diagnostic(
        code(tokhook::sdk::download_failed),
        help("Check network connectivity and that the SDK version exists upstream")
    )]
    DownloadFailed { url: String, reason: String },

    #[error("SDK archive not found: {path}")]
    #[diagnostic(
        code(tokhook::sdk::archive_not_found),
        help("Pass --archive an existing .tar.bz2 file")
    )]
    ArchiveNotFound { path: String },

    #[error("Failed to extract SDK archive: {path}")]
    #[diagnostic(code(tokhook::sdk::extract_failed))]
    ExtractFailed { path: String, reason: String },

    #[error("Framework '{name}' not found in extracted SDK at {path}")]
    #[diagnostic(
        code(tokhook::sdk::framework_missing),
        help("The archive layout may have changed; check sdk.frameworks in tokhook.yaml")
    )]
    FrameworkMissing { name: String, path: String },

    #[error("Failed to move '{from}' to '{to}'")]
    #[diagnostic(code(tokhook::sdk::move_failed))]
    MoveFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to remove '{path}'")]
    #[diagnostic(code(tokhook::sdk::cleanup_failed))]
    CleanupFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(tokhook::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(tokhook::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(tokhook::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(tokhook::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tokhook::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for TokhookError {
    fn from(err: std::io::Error) -> Self {
        TokhookError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for TokhookError {
    fn from(err: serde_yaml::Error) -> Self {
        TokhookError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for TokhookError {
    fn from(err: reqwest::Error) -> Self {
        TokhookError::DownloadFailed {
            url: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TokhookError>;
