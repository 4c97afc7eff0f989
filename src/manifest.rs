//! Application manifest (config.xml) parsing
//!
//! The manifest is not parsed as XML; the bundle identifier is extracted
//! with the same single-pattern match the upstream hook used, which keeps
//! the tool agnostic of whatever else the build host writes into the file.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, TokhookError};

/// Application descriptor file name, relative to the project root
pub const MANIFEST_FILE: &str = "config.xml";

#[allow(clippy::expect_used)]
fn widget_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"<widget id="([^"]+)""#).expect("pattern is valid"))
}

/// Extract the widget/bundle identifier from manifest text
///
/// Returns the first capture of `<widget id="..."`, or `None` when the
/// manifest declares no such attribute.
pub fn extract_widget_id(data: &str) -> Option<String> {
    widget_id_pattern()
        .captures(data)
        .map(|captures| captures[1].to_string())
}

/// Read the manifest at `path` and extract the bundle identifier
///
/// The file must exist; callers decide what a missing manifest means.
/// A manifest without a widget id is an error under every policy.
pub fn bundle_id_from_manifest(path: &Path) -> Result<String> {
    let data = fs::read_to_string(path).map_err(|e| TokhookError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    extract_widget_id(&data).ok_or_else(|| TokhookError::ManifestUnparsable {
        path: path.display().to_string(),
    })
}
