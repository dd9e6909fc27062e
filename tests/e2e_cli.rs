/// End-to-end tests for the `find-heavy-dirs` binary.
///
/// Each test builds a small tree in a temp dir, runs the real binary and
/// checks stdout/stderr and the exit status. They live in the root package
/// because that is where the `find-heavy-dirs` binary target is declared.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    fs::write(path, vec![0u8; n]).unwrap();
}

/// root/a/a.txt (100 bytes), root/b/c/c.bin (50 bytes).
fn scenario() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("a")).unwrap();
    fs::create_dir_all(tmp.path().join("b/c")).unwrap();
    write_bytes(&tmp.path().join("a/a.txt"), 100);
    write_bytes(&tmp.path().join("b/c/c.bin"), 50);
    tmp
}

fn bin() -> Command {
    Command::cargo_bin("find-heavy-dirs").unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn prints_both_tables() {
    let tmp = scenario();
    bin()
        .arg("--path")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--- Top 20 Largest Subdirectories by Size ---",
        ))
        .stdout(predicate::str::contains(
            "--- Top 20 Subdirectories by File Count ---",
        ))
        .stdout(predicate::str::contains("150 B"))
        .stdout(predicate::str::contains("2 Files"));
}

#[test]
fn json_report_has_rolled_up_totals() {
    let tmp = scenario();
    let root = tmp.path().canonicalize().unwrap();
    let output = bin()
        .arg(tmp.path())
        .args(["--format", "json", "--top", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_files"], 2);
    assert_eq!(report["total_size"], 150);
    let by_size = report["by_size"].as_array().unwrap();
    assert_eq!(by_size.len(), 3);
    assert_eq!(by_size[0]["path"], root.to_str().unwrap());
    assert_eq!(by_size[0]["size"], 150);
    assert_eq!(by_size[1]["size"], 100);
}

#[test]
fn maxdepth_zero_counts_root_files_only() {
    let tmp = scenario();
    write_bytes(&tmp.path().join("top.bin"), 9);
    let output = bin()
        .arg(tmp.path())
        .args(["--maxdepth", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_files"], 1);
    assert_eq!(report["by_size"].as_array().unwrap().len(), 1);
    assert_eq!(report["by_size"][0]["size"], 9);
}

#[test]
fn exclude_skips_subtree() {
    let tmp = scenario();
    let output = bin()
        .arg(tmp.path())
        .arg("--exclude")
        .arg(tmp.path().join("b"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_size"], 100);
}

#[test]
fn top_zero_csv_is_header_only() {
    let tmp = scenario();
    bin()
        .arg(tmp.path())
        .args(["--top", "0", "--format", "csv"])
        .assert()
        .success()
        .stdout("view,rank,path,size,files\n");
}

#[test]
fn missing_root_is_a_warning_not_a_failure() {
    let tmp = scenario();
    bin()
        .arg(tmp.path().join("nope"))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not resolve path"));
}

#[test]
fn warnings_are_silent_without_verbose() {
    let tmp = scenario();
    bin()
        .arg(tmp.path().join("nope"))
        .assert()
        .success()
        .stderr(predicate::str::contains("could not resolve path").not());
}

#[test]
fn display_runtime_goes_to_stderr_for_csv() {
    let tmp = scenario();
    bin()
        .arg(tmp.path())
        .args(["--format", "csv", "--display-runtime"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("view,rank,path,size,files"))
        .stderr(predicate::str::contains("Processed in"));
}

#[test]
fn invalid_number_is_rejected_before_scanning() {
    bin()
        .args(["--top", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn version_flag_prints_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("find-heavy-dirs"));
}
