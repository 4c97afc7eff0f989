//! fetch-sdk command implementation
//!
//! Runs at plugin install time: obtains the versioned iOS SDK archive,
//! extracts it in the current directory, and moves the framework
//! directories into the plugin's `src/ios/`.

use std::path::PathBuf;

use crate::cli::FetchSdkArgs;
use crate::config::HookConfig;
use crate::error::Result;
use crate::policy::ErrorPolicy;
use crate::sdk::{InstallOptions, SdkInstaller};
use crate::ui;

pub fn run(project_root: Option<PathBuf>, args: FetchSdkArgs, verbose: bool) -> Result<()> {
    let root = super::helpers::resolve_dir(project_root)?;
    let plugin_dir = super::helpers::resolve_dir(args.plugin_dir)?;
    // the archive lands and is extracted where the host invoked us
    let work_dir = super::helpers::resolve_dir(None)?;

    let mut config = HookConfig::load(&root)?;
    if let Some(version) = args.sdk_version {
        config.sdk.version = version;
    }
    let policy = ErrorPolicy::from_strict_flag(args.strict);

    let options = InstallOptions {
        archive: args.archive,
        keep_archive: args.keep_archive,
    };

    let report = SdkInstaller::new(config.sdk, policy).run(&plugin_dir, &work_dir, &options)?;

    ui::success(format!(
        "installed {} framework(s) into {}",
        report.installed.len(),
        plugin_dir.join("src").join("ios").display()
    ));
    if verbose {
        for framework in &report.installed {
            ui::info(format!("installed {framework}"));
        }
        for framework in &report.skipped {
            ui::info(format!("skipped {framework}"));
        }
    }

    Ok(())
}
