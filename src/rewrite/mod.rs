//! Android resource import rewriting
//!
//! Cordova generates the plugin's Java sources with the upstream app's
//! package baked into their `R` imports. This component reads the consuming
//! app's bundle identifier from `config.xml` and rewrites every occurrence
//! of `import <placeholder>.R;` in the configured source files to
//! `import <bundleId>.R;`, in place.

use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};

use crate::config::AndroidConfig;
use crate::error::{Result, TokhookError};
use crate::manifest;
use crate::policy::ErrorPolicy;
use crate::ui;

/// Outcome of one rewrite run
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// Identifier extracted from the manifest; `None` when the manifest
    /// was absent and the run was skipped under the lenient policy
    pub bundle_id: Option<String>,
    /// Files read and written back
    pub files_patched: usize,
    /// Files skipped because they do not exist
    pub files_skipped: usize,
    /// Total import lines replaced across all files
    pub replacements: usize,
}

/// Rewrites generated Android sources to the app's bundle identifier
pub struct ImportRewriter {
    config: AndroidConfig,
    policy: ErrorPolicy,
}

impl ImportRewriter {
    pub fn new(config: AndroidConfig, policy: ErrorPolicy) -> Self {
        Self { config, policy }
    }

    /// Run the rewrite against a project root
    ///
    /// The rewrite is in place: no backup is kept, and a run that finds
    /// nothing to replace still writes the file back unchanged, so a
    /// second run with the same identifier is content-idempotent.
    pub fn run(&self, project_root: &Path) -> Result<RewriteReport> {
        let manifest_path = project_root.join(manifest::MANIFEST_FILE);

        if !manifest_path.exists() {
            if self.policy.is_strict() {
                return Err(TokhookError::ManifestNotFound {
                    path: manifest_path.display().to_string(),
                });
            }
            ui::warn(format!(
                "config file not found at {}",
                manifest_path.display()
            ));
            ui::warn("skipping rewrite of resource imports (failed to extract bundle id)");
            return Ok(RewriteReport::default());
        }

        let bundle_id = manifest::bundle_id_from_manifest(&manifest_path)?;
        ui::info(format!("extracted app bundle id: {bundle_id}"));

        let source_dir = self.config.source_dir_path(project_root);
        let pattern = placeholder_pattern(&self.config.placeholder_import())?;
        let replacement = format!("import {bundle_id}.R;");

        let mut report = RewriteReport {
            bundle_id: Some(bundle_id),
            ..RewriteReport::default()
        };

        for file_name in &self.config.source_files {
            ui::info(format!(
                "rewriting resource imports for {} in directory {}",
                file_name,
                source_dir.display()
            ));
            let path = source_dir.join(file_name);

            if !path.exists() {
                if self.policy.is_strict() {
                    return Err(TokhookError::SourceFileNotFound {
                        path: path.display().to_string(),
                    });
                }
                ui::warn(format!("source file not found at {}", path.display()));
                report.files_skipped += 1;
                continue;
            }

            report.replacements += rewrite_file(&path, &pattern, &replacement)?;
            report.files_patched += 1;
        }

        Ok(report)
    }
}

/// Compile the placeholder import line into an exact-literal pattern
fn placeholder_pattern(placeholder_import: &str) -> Result<Regex> {
    Regex::new(&regex::escape(placeholder_import)).map_err(|e| TokhookError::IoError {
        message: format!("invalid placeholder pattern: {e}"),
    })
}

/// Replace every occurrence of the placeholder import in one file
///
/// Returns the number of occurrences replaced.
fn rewrite_file(path: &Path, pattern: &Regex, replacement: &str) -> Result<usize> {
    let input = fs::read_to_string(path).map_err(|e| TokhookError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let count = pattern.find_iter(&input).count();
    // NoExpand keeps `$` sequences in a bundle id literal
    let output = pattern.replace_all(&input, NoExpand(replacement));

    fs::write(path, output.as_bytes()).map_err(|e| TokhookError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(count)
}
