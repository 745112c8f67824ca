//! Tests for error handling and suggestions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bazkit(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bazkit").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("BAZKIT_TOOLS__GIT", "/nonexistent/git")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_error_with_suggestions_unknown_kind() {
    let temp = TempDir::new().unwrap();
    bazkit(&temp)
        .args(["skeleton", "create", "python", "svc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown skeleton kind 'python'"))
        .stderr(predicate::str::contains("jvm"))
        .stderr(predicate::str::contains("infra"))
        .stderr(predicate::str::contains("mobile"));
}

#[test]
fn test_error_with_suggestions_variant_mismatch() {
    let temp = TempDir::new().unwrap();
    bazkit(&temp)
        .args(["skeleton", "create", "jvm", "svc", "expo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not available for jvm"))
        .stderr(predicate::str::contains("kotlin"))
        .stderr(predicate::str::contains("java"));
}

#[test]
fn test_error_invalid_project_name() {
    let temp = TempDir::new().unwrap();
    bazkit(&temp)
        .args(["skeleton", "create", "jvm", ".hidden"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_error_invalid_dependency() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("WORKSPACE"), "workspace(name = \"w\")\n").unwrap();
    fs::write(temp.path().join("CONFIG"), "ORG=acme\n").unwrap();

    bazkit(&temp)
        .args(["workspace", "add", "-p", "a/b/c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid dependency identifier"))
        .stderr(predicate::str::contains("<owner>/<repo>"));
}

#[test]
fn test_error_bare_name_without_organization() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("WORKSPACE"), "workspace(name = \"w\")\n").unwrap();

    bazkit(&temp)
        .args(["workspace", "add", "-p", "billing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no organization recorded in CONFIG"));
}

#[test]
fn test_error_malformed_config_record() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("WORKSPACE"), "workspace(name = \"w\")\n").unwrap();
    fs::write(temp.path().join("CONFIG"), "garbage\n").unwrap();

    bazkit(&temp)
        .args(["workspace", "add", "-p", "acme/x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed config record"));
}

#[test]
fn test_error_missing_config_file() {
    let temp = TempDir::new().unwrap();
    bazkit(&temp)
        .args(["--config", "does-not-exist.toml", "config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_verbose_shows_no_hint() {
    let temp = TempDir::new().unwrap();
    bazkit(&temp)
        .args(["-v", "workspace", "add", "-p", "acme/x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No WORKSPACE file"))
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
