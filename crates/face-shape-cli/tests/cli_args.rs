//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use assert_cmd::Command;
use predicates::prelude::*;

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    // No path argument at all - error goes to stderr
    cmd.current_dir(temp_dir.path());
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No paths specified"));
}

#[test]
fn test_missing_model_suggests_fetch() {
    let models_dir = tempfile::tempdir().unwrap();
    let photos_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    cmd.current_dir(photos_dir.path())
        .arg("analyze")
        .arg(photos_dir.path())
        .arg("--models-dir")
        .arg(models_dir.path());

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("models fetch"));
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    cmd.arg("--format").arg("xml").arg("photo.jpg");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("json").or(predicate::str::contains("jsonl")));
}

// === Help and Version ===

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--styles"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("face-shape"));
}

// === Models Subcommand ===

#[test]
fn test_models_path_prints_directory() {
    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    cmd.arg("models").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_models_list() {
    let mut cmd = Command::cargo_bin("face-shape").unwrap();
    cmd.arg("models").arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Models directory"))
        .stdout(predicate::str::contains("facemesh"));
}

// === Verbosity Levels ===

#[test]
fn test_verbosity_flags_accepted() {
    let models_dir = tempfile::tempdir().unwrap();
    let photos_dir = tempfile::tempdir().unwrap();

    for flag in ["-v", "-vv", "-vvv"] {
        let mut cmd = Command::cargo_bin("face-shape").unwrap();
        cmd.current_dir(photos_dir.path())
            .arg(flag)
            .arg(photos_dir.path())
            .arg("--models-dir")
            .arg(models_dir.path());

        // Model is absent so the run fails, but the flag itself parses
        cmd.assert().code(2);
    }
}
