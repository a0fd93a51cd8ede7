// Integration tests for the gptgauge CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the gptgauge binary.
fn gptgauge() -> Command {
    Command::cargo_bin("gptgauge").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    gptgauge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gptgauge"));
}

#[test]
fn cli_help_flag() {
    gptgauge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("likelihood"));
}

#[test]
fn score_requires_input() {
    gptgauge()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn sentences_requires_input() {
    gptgauge()
        .arg("sentences")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn batch_requires_input() {
    gptgauge()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn init_requires_path() {
    gptgauge()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_missing_file_exits_runtime_failure() {
    gptgauge()
        .args(["score", "/definitely/not/a/real/file.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_reads_stdin_with_dash() {
    gptgauge()
        .args(["score", "-"])
        .write_stdin("저는 최선을 다했습니다.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gauge Report"))
        .stdout(predicate::str::contains("AI-likelihood: 0.0% (low)"));
}

#[test]
fn score_json_format_carries_probability() {
    gptgauge()
        .args(["score", "-", "--format", "json"])
        .write_stdin("저는 최선을 다했습니다.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"probability\""))
        .stdout(predicate::str::contains("\"band\""));
}

#[test]
fn quiet_conflicts_with_verbose() {
    gptgauge()
        .args(["--quiet", "--verbose", "score", "-"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
