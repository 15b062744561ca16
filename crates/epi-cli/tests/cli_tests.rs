//! Integration tests for epi-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use epi_core::test_utils::EpiBuilder;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn epi_cmd() -> Command {
    cargo_bin_cmd!("epi")
}

/// Writes a container to disk and returns its path.
fn write_container(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("failed to write fixture");
    path
}

fn valid_container() -> Vec<u8> {
    EpiBuilder::new()
        .workflow_id("wf-cli")
        .payload("data.txt", b"hello world")
        .signature("ed25519:default:deadbeef")
        .viewer("<html><body>embedded</body></html>")
        .build()
}

#[test]
fn test_version_flag() {
    epi_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epi"));
}

#[test]
fn test_help_flag() {
    epi_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line viewer and verifier"));
}

#[test]
fn test_verify_valid_container() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());

    epi_cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"))
        .stdout(predicate::str::contains("1 file(s) checked"))
        .stdout(predicate::str::contains("SIGNED"));
}

#[test]
fn test_verify_surfaces_format_only_caveat() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());

    epi_cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT cryptographically verified"));
}

#[test]
fn test_verify_unsigned_container_passes() {
    let temp = TempDir::new().unwrap();
    let bytes = EpiBuilder::new().payload("data.txt", b"hello").build();
    let path = write_container(&temp, "unsigned.epi", &bytes);

    epi_cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("UNSIGNED"));
}

#[test]
fn test_verify_tampered_container_fails_with_mismatches() {
    let temp = TempDir::new().unwrap();
    let bytes = EpiBuilder::new()
        .payload("data.txt", b"original")
        .tamper("data.txt", b"tampered")
        .build();
    let path = write_container(&temp, "tampered.epi", &bytes);

    epi_cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("integrity_check_failed"))
        .stdout(predicate::str::contains("data.txt: hash mismatch"));
}

#[test]
fn test_verify_garbage_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "garbage.epi", b"not a zip at all");

    epi_cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("malformed_archive"));
}

#[test]
fn test_verify_missing_file_reports_read_error() {
    epi_cmd()
        .arg("verify")
        .arg("/nonexistent/evidence.epi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_verify_json_output_success() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());

    let output = epi_cmd()
        .arg("verify")
        .arg("--json")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["files_checked"], 1);
    assert_eq!(json["data"]["signature"]["level"], "SIGNED");
    assert_eq!(json["data"]["signature"]["key_name"], "default");
    assert_eq!(json["data"]["signature_format_only"], true);
    assert_eq!(json["data"]["viewer_embedded"], true);
}

#[test]
fn test_verify_json_output_failure_carries_code_and_details() {
    let temp = TempDir::new().unwrap();
    let bytes = EpiBuilder::new()
        .omit_payload("gone.txt", b"was here")
        .build();
    let path = write_container(&temp, "broken.epi", &bytes);

    let output = epi_cmd()
        .arg("verify")
        .arg("--json")
        .arg(&path)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "integrity_check_failed");
    assert_eq!(json["data"]["mismatches"][0]["path"], "gone.txt");
    assert_eq!(json["data"]["mismatches"][0]["error"], "missing");
}

#[test]
fn test_facts_table() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());

    epi_cmd()
        .arg("facts")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("wf-cli"))
        .stdout(predicate::str::contains("Signature Present"));
}

#[test]
fn test_facts_on_invalid_container_shows_hint() {
    let temp = TempDir::new().unwrap();
    let bytes = EpiBuilder::new().mimetype("text/plain").build();
    let path = write_container(&temp, "wrong.epi", &bytes);

    epi_cmd()
        .arg("facts")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong mimetype"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_report_contains_caveat_and_manifest() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());

    epi_cmd()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CRYPTOGRAPHIC VERIFICATION REPORT"))
        .stdout(predicate::str::contains("NOT cryptographically verified"))
        .stdout(predicate::str::contains("data.txt"));
}

#[test]
fn test_report_writes_to_file() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());
    let out = temp.path().join("report.txt");

    epi_cmd()
        .arg("report")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Files Verified: 1"));
}

#[test]
fn test_viewer_extraction() {
    let temp = TempDir::new().unwrap();
    let path = write_container(&temp, "good.epi", &valid_container());
    let out = temp.path().join("viewer.html");

    epi_cmd()
        .arg("viewer")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html, "<html><body>embedded</body></html>");
}

#[test]
fn test_viewer_absence_is_warning_not_error() {
    let temp = TempDir::new().unwrap();
    let bytes = EpiBuilder::new().payload("data.txt", b"hello").build();
    let path = write_container(&temp, "noviewer.epi", &bytes);

    epi_cmd()
        .arg("viewer")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no embedded viewer found"));
}

#[test]
fn test_completion_generation() {
    epi_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("epi"));
}
