//! Hook configuration (tokhook.yaml) data structures
//!
//! Every constant the upstream hook scripts hardcoded (SDK version,
//! download URL, Android source paths, the placeholder package) lives here
//! so a version bump is a config edit, not a code edit. A `tokhook.yaml`
//! at the project root overrides any subset of the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokhookError};

/// Optional override file, looked up at the project root
pub const CONFIG_FILE: &str = "tokhook.yaml";

/// Top-level hook configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HookConfig {
    pub android: AndroidConfig,
    pub sdk: SdkConfig,
}

/// Settings for the Android resource import rewrite
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Directory holding the plugin's generated Java sources, relative to
    /// the project root. Always forward-slash separated.
    pub source_dir: String,

    /// File names under `source_dir` to rewrite
    pub source_files: Vec<String>,

    /// Package baked into the generated sources by the upstream app
    pub placeholder_package: String,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            source_dir: "platforms/android/app/src/main/java/com/tokbox/cordova".to_string(),
            source_files: vec!["VonageActivity.java".to_string()],
            placeholder_package: "com.hrs.patient".to_string(),
        }
    }
}

impl AndroidConfig {
    /// Resolve `source_dir` under the project root, splitting on the
    /// forward slashes the config value uses regardless of platform
    pub fn source_dir_path(&self, project_root: &Path) -> PathBuf {
        self.source_dir
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(project_root.to_path_buf(), |path, part| path.join(part))
    }

    /// The exact import line to replace
    pub fn placeholder_import(&self) -> String {
        format!("import {}.R;", self.placeholder_package)
    }
}

/// Settings for the iOS SDK download
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Versioned archive stem, e.g. `OpenTok-iOS-2.26.0`
    pub version: String,

    /// Top-level directory name inside the archive
    pub extracted_dir: String,

    /// Release artifact location, without a trailing slash
    pub base_url: String,

    /// Framework directories to relocate into the plugin's `src/ios/`
    pub frameworks: Vec<String>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            version: "OpenTok-iOS-2.26.0".to_string(),
            extracted_dir: "OpenTok-iOS".to_string(),
            base_url: "https://s3.amazonaws.com/artifact.tokbox.com/rel/ios-sdk".to_string(),
            frameworks: vec![
                "OpenTok.framework".to_string(),
                "VonageWebRTC.framework".to_string(),
            ],
        }
    }
}

impl SdkConfig {
    /// File name the archive is downloaded to
    pub fn archive_name(&self) -> String {
        format!("{}.tar.bz2", self.version)
    }

    /// Full download URL for the configured version
    pub fn download_url(&self) -> String {
        format!(
            "{}/{}.tar.bz2",
            self.base_url.trim_end_matches('/'),
            self.version
        )
    }
}

impl HookConfig {
    /// Load configuration for a project
    ///
    /// A missing `tokhook.yaml` is the common case and yields the defaults;
    /// a present but malformed file is an error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(&path).map_err(|e| TokhookError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&data).map_err(|e| TokhookError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
