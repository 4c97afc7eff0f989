//! fix-imports command implementation
//!
//! Runs after the Android platform is prepared: extracts the app's bundle
//! identifier from the project manifest and rewrites the plugin's
//! generated Java sources to reference it.

use std::path::PathBuf;

use crate::cli::FixImportsArgs;
use crate::config::HookConfig;
use crate::error::Result;
use crate::policy::ErrorPolicy;
use crate::rewrite::ImportRewriter;
use crate::ui;

pub fn run(project_root: Option<PathBuf>, args: FixImportsArgs, verbose: bool) -> Result<()> {
    let root = super::helpers::resolve_dir(project_root)?;
    let config = HookConfig::load(&root)?;
    let policy = ErrorPolicy::from_strict_flag(args.strict);

    let report = ImportRewriter::new(config.android, policy).run(&root)?;

    if let Some(bundle_id) = &report.bundle_id {
        ui::success(format!(
            "rewrote resource imports to {} ({} file(s), {} replacement(s))",
            bundle_id, report.files_patched, report.replacements
        ));
        if verbose && report.files_skipped > 0 {
            ui::info(format!("{} file(s) skipped", report.files_skipped));
        }
    }

    Ok(())
}
