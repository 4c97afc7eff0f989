//! Common test utilities for tokhook integration tests

use std::fs::File;
use std::path::{Path, PathBuf};

use bzip2::Compression;
use bzip2::write::BzEncoder;
use tempfile::TempDir;

/// Directory the plugin's generated Android sources live in
#[allow(dead_code)]
pub const ANDROID_SOURCE_DIR: &str = "platforms/android/app/src/main/java/com/tokbox/cordova";

/// A Cordova project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a well-formed config.xml declaring the given bundle id
    pub fn write_manifest(&self, bundle_id: &str) {
        let content = format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <widget id=\"{bundle_id}\" version=\"1.0.0\" xmlns=\"http://www.w3.org/ns/widgets\">\n\
             \x20   <name>Test App</name>\n\
             </widget>\n"
        );
        self.write_file("config.xml", &content);
    }

    /// Write arbitrary manifest content
    pub fn write_manifest_raw(&self, content: &str) {
        self.write_file("config.xml", content);
    }

    /// Write a generated Android source file under the plugin source dir
    pub fn write_android_source(&self, file_name: &str, content: &str) -> PathBuf {
        let rel = format!("{ANDROID_SOURCE_DIR}/{file_name}");
        self.write_file(&rel, content);
        self.path.join(&rel)
    }

    /// Read an Android source file back
    pub fn read_android_source(&self, file_name: &str) -> String {
        self.read_file(&format!("{ANDROID_SOURCE_DIR}/{file_name}"))
    }

    /// Create a plugin directory in the project
    pub fn create_plugin_dir(&self, name: &str) -> PathBuf {
        let plugin_path = self.path.join("plugins").join(name);
        std::fs::create_dir_all(&plugin_path).expect("Failed to create plugin directory");
        plugin_path
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Build a .tar.bz2 SDK archive containing the given framework
    /// directories under `extracted_dir`, each with an Info.plist
    pub fn write_sdk_archive(
        &self,
        archive_name: &str,
        extracted_dir: &str,
        frameworks: &[&str],
    ) -> PathBuf {
        let staging = TempDir::new().expect("Failed to create staging directory");
        for framework in frameworks {
            let tree = staging.path().join(extracted_dir).join(framework);
            std::fs::create_dir_all(&tree).expect("Failed to create framework tree");
            std::fs::write(tree.join("Info.plist"), framework)
                .expect("Failed to write framework file");
        }

        let archive_path = self.path.join(archive_name);
        write_tar_bz2(&archive_path, extracted_dir, &staging.path().join(extracted_dir));
        archive_path
    }
}

#[allow(dead_code)]
fn write_tar_bz2(archive_path: &Path, entry_name: &str, tree: &Path) {
    let encoder = BzEncoder::new(
        File::create(archive_path).expect("Failed to create archive file"),
        Compression::best(),
    );
    let mut builder = tar::Builder::new(encoder);
    builder
        .append_dir_all(entry_name, tree)
        .expect("Failed to append archive entries");
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish bzip2 stream");
}
