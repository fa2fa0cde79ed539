//! Smoke tests for the workscan CLI.
//!
//! These tests verify basic CLI functionality:
//! - `wscan --version` outputs version info
//! - `wscan --help` outputs help text
//! - an unreadable workspace root fails with exit code 1

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the wscan binary.
fn wscan() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wscan"))
}

#[test]
fn test_version_flag() {
    wscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wscan"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    wscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--overrides"));
}

#[test]
fn test_help_flag_short() {
    wscan().arg("-h").assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_root_is_fatal() {
    wscan()
        .args(["--root", "/nonexistent/workspace"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unknown_flag_fails() {
    wscan()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
