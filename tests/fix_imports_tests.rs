//! Integration tests for the fix-imports hook

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

const SOURCE: &str = "package com.tokbox.cordova;\n\nimport com.hrs.patient.R;\nimport android.app.Activity;\n\npublic class VonageActivity extends Activity {}\n";

#[allow(deprecated)]
fn tokhook_cmd() -> Command {
    Command::cargo_bin("tokhook").unwrap()
}

#[test]
fn test_rewrites_import_to_extracted_bundle_id() {
    let project = TestProject::new();
    project.write_manifest("com.example.app");
    project.write_android_source("VonageActivity.java", SOURCE);

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "extracted app bundle id: com.example.app",
        ));

    let content = project.read_android_source("VonageActivity.java");
    assert!(content.contains("import com.example.app.R;"));
    assert!(!content.contains("import com.hrs.patient.R;"));
}

#[test]
fn test_rewrites_all_occurrences() {
    let project = TestProject::new();
    project.write_manifest("org.example.video");
    project.write_android_source(
        "VonageActivity.java",
        "import com.hrs.patient.R;\nimport com.hrs.patient.R;\nimport com.hrs.patient.R;\n",
    );

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 replacement(s)"));

    let content = project.read_android_source("VonageActivity.java");
    assert_eq!(content.matches("import org.example.video.R;").count(), 3);
    assert_eq!(content.matches("com.hrs.patient").count(), 0);
}

#[test]
fn test_missing_manifest_exits_zero_without_writes() {
    let project = TestProject::new();
    project.write_android_source("VonageActivity.java", SOURCE);

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("config file not found"));

    assert_eq!(project.read_android_source("VonageActivity.java"), SOURCE);
}

#[test]
fn test_missing_manifest_strict_fails() {
    let project = TestProject::new();
    project.write_android_source("VonageActivity.java", SOURCE);

    tokhook_cmd()
        .args(["fix-imports", "--strict", "-p"])
        .arg(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_unparsable_manifest_fails_before_any_write() {
    let project = TestProject::new();
    project.write_manifest_raw("<widget version=\"1.0.0\">\n</widget>\n");
    project.write_android_source("VonageActivity.java", SOURCE);

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No widget id found"));

    assert_eq!(project.read_android_source("VonageActivity.java"), SOURCE);
}

#[test]
fn test_missing_source_file_is_skipped() {
    let project = TestProject::new();
    project.write_manifest("com.example.app");

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("source file not found"));
}

#[test]
fn test_missing_source_file_strict_fails() {
    let project = TestProject::new();
    project.write_manifest("com.example.app");

    tokhook_cmd()
        .args(["fix-imports", "--strict", "-p"])
        .arg(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source file not found"));
}

#[test]
fn test_double_run_is_idempotent() {
    let project = TestProject::new();
    project.write_manifest("com.example.app");
    project.write_android_source("VonageActivity.java", SOURCE);

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success();
    let first = project.read_android_source("VonageActivity.java");

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 replacement(s)"));

    assert_eq!(project.read_android_source("VonageActivity.java"), first);
}

#[test]
fn test_config_file_overrides_source_set() {
    let project = TestProject::new();
    project.write_manifest("com.example.app");
    project.write_file(
        "tokhook.yaml",
        "android:\n  source_files:\n    - VonageActivity.java\n    - OpenTokConfig.java\n",
    );
    project.write_android_source("VonageActivity.java", SOURCE);
    project.write_android_source("OpenTokConfig.java", "import com.hrs.patient.R;\n");

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s)"));

    assert!(
        project
            .read_android_source("OpenTokConfig.java")
            .contains("import com.example.app.R;")
    );
}

#[test]
fn test_malformed_config_file_fails() {
    let project = TestProject::new();
    project.write_manifest("com.example.app");
    project.write_file("tokhook.yaml", "android: [not, a, mapping]\n");

    tokhook_cmd()
        .args(["fix-imports", "-p"])
        .arg(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse configuration"));
}
