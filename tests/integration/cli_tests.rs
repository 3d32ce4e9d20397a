//! Integration tests for the StyleSweep CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn stylesweep() -> Command {
    Command::cargo_bin("stylesweep").expect("binary builds")
}

#[test]
fn test_reports_unused_style_in_terminal_format() {
    stylesweep()
        .arg(fixtures_path().join("unused_style.ast.json"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Style 'unused' is defined but never used.",
        ));
}

#[test]
fn test_clean_file_reports_nothing() {
    stylesweep()
        .arg(fixtures_path().join("array_usage.ast.json"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused styles found!"));
}

#[test]
fn test_scans_directories_recursively() {
    stylesweep()
        .arg(fixtures_path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused_style.ast.json"));
}

#[test]
fn test_json_format_output() {
    let output = stylesweep()
        .arg(fixtures_path().join("unused_style.ast.json"))
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_findings"], 1);
    assert_eq!(report["files"][0]["findings"][0]["name"], "unused");
    assert_eq!(report["files"][0]["findings"][0]["line"], 11);
}

#[test]
fn test_json_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    stylesweep()
        .arg(fixtures_path().join("unused_style.ast.json"))
        .args(["--format", "json", "--quiet"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["total_findings"], 1);
}

#[test]
fn test_parallel_mode_matches_sequential() {
    let sequential = stylesweep()
        .arg(fixtures_path())
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();
    let parallel = stylesweep()
        .arg(fixtures_path())
        .args(["--format", "json", "--quiet", "--parallel"])
        .output()
        .unwrap();

    let seq: serde_json::Value = serde_json::from_slice(&sequential.stdout).unwrap();
    let par: serde_json::Value = serde_json::from_slice(&parallel.stdout).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_empty_directory_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    stylesweep()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No .ast.json documents found."));
}

#[test]
fn test_malformed_document_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.ast.json"), "{ not json").unwrap();

    stylesweep()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused styles found!"));
}
