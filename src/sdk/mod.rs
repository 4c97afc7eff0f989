//! iOS SDK installation
//!
//! Replaces the upstream hook's nested shell-command chain with a linear
//! sequence of steps: obtain the archive, extract it, relocate the
//! framework directories into the plugin's `src/ios/`, then clean up.
//! Every step returns a `Result`; which failures abort the run is decided
//! per call site by the threaded [`ErrorPolicy`].

pub mod download;
pub mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use crate::common;
use crate::config::SdkConfig;
use crate::error::{Result, TokhookError};
use crate::policy::ErrorPolicy;
use crate::ui;

/// Per-invocation knobs for the installer
#[derive(Debug, Default)]
pub struct InstallOptions {
    /// Use an already-downloaded archive instead of fetching over the
    /// network. The file is left in place afterwards.
    pub archive: Option<PathBuf>,
    /// Skip the final deletion of a downloaded archive
    pub keep_archive: bool,
}

/// Outcome of one install run
#[derive(Debug, Default)]
pub struct SdkReport {
    /// Frameworks moved into the plugin source tree
    pub installed: Vec<String>,
    /// Frameworks skipped under the lenient policy
    pub skipped: Vec<String>,
}

/// Downloads and installs the iOS SDK frameworks into a plugin
pub struct SdkInstaller {
    config: SdkConfig,
    policy: ErrorPolicy,
}

impl SdkInstaller {
    pub fn new(config: SdkConfig, policy: ErrorPolicy) -> Self {
        Self { config, policy }
    }

    /// Run the full install sequence
    ///
    /// `work_dir` is where the archive lands and is extracted; the
    /// frameworks end up under `<plugin_dir>/src/ios/`. Download and
    /// extraction failures abort under both policies since every later
    /// step depends on them; relocation and cleanup failures are
    /// policy-governed.
    pub fn run(
        &self,
        plugin_dir: &Path,
        work_dir: &Path,
        options: &InstallOptions,
    ) -> Result<SdkReport> {
        let (archive_path, downloaded) = self.obtain_archive(work_dir, options)?;

        extract::unpack_tar_bz2(&archive_path, work_dir)?;
        ui::info("expanded");

        let report = self.relocate_frameworks(plugin_dir, work_dir)?;

        self.remove_artifact(&work_dir.join(&self.config.extracted_dir), true)?;
        if downloaded && !options.keep_archive {
            self.remove_artifact(&archive_path, false)?;
        }

        Ok(report)
    }

    fn obtain_archive(
        &self,
        work_dir: &Path,
        options: &InstallOptions,
    ) -> Result<(PathBuf, bool)> {
        match &options.archive {
            Some(path) => {
                if !path.exists() {
                    return Err(TokhookError::ArchiveNotFound {
                        path: path.display().to_string(),
                    });
                }
                ui::info(format!("using local SDK archive {}", path.display()));
                Ok((path.clone(), false))
            }
            None => {
                let url = self.config.download_url();
                let dest = work_dir.join(self.config.archive_name());
                ui::info(format!("downloading OpenTok iOS SDK {}", self.config.version));
                download::download_to(&url, &dest)?;
                ui::info("downloaded");
                Ok((dest, true))
            }
        }
    }

    fn relocate_frameworks(&self, plugin_dir: &Path, work_dir: &Path) -> Result<SdkReport> {
        let framework_dir = plugin_dir.join("src").join("ios");
        fs::create_dir_all(&framework_dir).map_err(|e| TokhookError::FileWriteFailed {
            path: framework_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let extracted = work_dir.join(&self.config.extracted_dir);
        let mut report = SdkReport::default();

        for framework in &self.config.frameworks {
            match self.relocate_one(&extracted, &framework_dir, framework) {
                Ok(()) => {
                    ui::info(format!(
                        "moved {} into {}",
                        framework,
                        framework_dir.display()
                    ));
                    report.installed.push(framework.clone());
                }
                Err(e) if !self.policy.is_strict() => {
                    ui::warn(e.to_string());
                    report.skipped.push(framework.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    fn relocate_one(&self, extracted: &Path, framework_dir: &Path, framework: &str) -> Result<()> {
        let src = extracted.join(framework);
        if !src.exists() {
            return Err(TokhookError::FrameworkMissing {
                name: framework.to_string(),
                path: extracted.display().to_string(),
            });
        }

        let dst = framework_dir.join(framework);
        common::fs::move_dir(&src, &dst).map_err(|e| TokhookError::MoveFailed {
            from: src.display().to_string(),
            to: dst.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn remove_artifact(&self, path: &Path, is_dir: bool) -> Result<()> {
        let removed = if is_dir {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match removed {
            Ok(()) => {
                ui::info(format!("removed {}", path.display()));
                Ok(())
            }
            Err(e) => {
                let err = TokhookError::CleanupFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                };
                if self.policy.is_strict() {
                    return Err(err);
                }
                ui::warn(err.to_string());
                Ok(())
            }
        }
    }
}
