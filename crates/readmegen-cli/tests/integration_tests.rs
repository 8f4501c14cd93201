//! Integration tests for the readmegen binary.
//!
//! Only non-interactive surfaces are exercised here: the questionnaire
//! itself needs a TTY and is covered end-to-end in the adapters crate
//! via the scripted prompt source.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_flag_describes_the_tool() {
    Command::cargo_bin("readmegen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readmegen"))
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn version_flag_matches_cargo() {
    // Version is a successful display: stdout, exit 0, nothing on stderr.
    Command::cargo_bin("readmegen")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn help_goes_to_stdout_not_stderr() {
    Command::cargo_bin("readmegen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn quiet_and_verbose_conflict_is_a_usage_error() {
    Command::cargo_bin("readmegen")
        .unwrap()
        .args(["--quiet", "--verbose"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::cargo_bin("readmegen")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_explicit_config_exits_with_config_code() {
    Command::cargo_bin("readmegen")
        .unwrap()
        .args(["--config", "/no/such/file.toml"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn malformed_explicit_config_exits_with_config_code() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "this is [[[ not toml").unwrap();

    Command::cargo_bin("readmegen")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .code(4);
}
