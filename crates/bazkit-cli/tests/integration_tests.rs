//! Integration tests for bazkit-cli.
//!
//! External tools are pointed at harmless stand-ins through `BAZKIT_TOOLS__*`:
//! Bazel is `sh` (found on PATH, fails on any Bazel subcommand) and git/npx do
//! not exist, so any unexpected clone or generator run makes a command fail.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bazkit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bazkit").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("BAZKIT_TOOLS__BAZEL", "sh")
        .env("BAZKIT_TOOLS__GIT", "/nonexistent/git")
        .env("BAZKIT_TOOLS__NPX", "/nonexistent/npx")
        .env("BAZKIT_INSTALL__AUTO_INSTALL", "false")
        .env_remove("BAZKIT_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// A temp dir holding a workspace `mono` created with `--org acme`.
fn workspace() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .args(["workspace", "create", "mono", "--org", "acme"])
        .assert()
        .success();
    let root = temp.path().join("mono");
    (temp, root)
}

// ── usage ─────────────────────────────────────────────────────────────────────

#[test]
fn help_goes_to_stdout_and_succeeds() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace"))
        .stdout(predicate::str::contains("skeleton"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn verb_without_noun_exits_one() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path()).arg("workspace").assert().code(1);
    bazkit(temp.path()).arg("skeleton").assert().code(1);
}

#[test]
fn unknown_noun_exits_one() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .args(["workspace", "destroy"])
        .assert()
        .code(1);
}

// ── workspace create ──────────────────────────────────────────────────────────

#[test]
fn create_writes_markers() {
    let (_temp, root) = workspace();
    assert_eq!(
        fs::read_to_string(root.join("WORKSPACE")).unwrap(),
        "workspace(name = \"mono\")\n"
    );
    assert_eq!(fs::read_to_string(root.join("CONFIG")).unwrap(), "ORG=acme\n");
    assert!(root.join("BUILD.bazel").exists());
}

#[test]
fn create_twice_skips_existing_files() {
    let (temp, root) = workspace();
    fs::write(root.join("WORKSPACE"), "workspace(name = \"kept\")\n").unwrap();

    bazkit(temp.path())
        .args(["--output-format", "plain", "workspace", "create", "mono"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped  WORKSPACE"));

    assert_eq!(
        fs::read_to_string(root.join("WORKSPACE")).unwrap(),
        "workspace(name = \"kept\")\n"
    );
}

#[test]
fn create_uses_configured_organization() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .env("BAZKIT_DEFAULTS__ORGANIZATION", "globex")
        .args(["workspace", "create", "mono"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("mono/CONFIG")).unwrap(),
        "ORG=globex\n"
    );
}

#[test]
fn create_fails_when_bazel_missing_and_install_disabled() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .env("BAZKIT_TOOLS__BAZEL", "definitely-not-bazel-xyz")
        .args(["workspace", "create", "mono"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("definitely-not-bazel-xyz"));
    assert!(!temp.path().join("mono").exists());
}

#[test]
fn create_json_report() {
    let temp = TempDir::new().unwrap();
    let out = bazkit(temp.path())
        .args(["--output-format", "json", "workspace", "create", "mono"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let files = report["files"].as_array().unwrap();
    assert!(files.iter().all(|f| f["outcome"] == "created"));
    assert_eq!(report["tool"]["tool"], "sh");
}

#[test]
fn quiet_create_prints_nothing() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .args(["-q", "workspace", "create", "mono"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── workspace add ─────────────────────────────────────────────────────────────

#[test]
fn add_existing_directory_never_clones() {
    let (_temp, root) = workspace();
    fs::create_dir(root.join("payments")).unwrap();
    fs::write(root.join("payments/package.json"), "{}\n").unwrap();

    // git points nowhere: a clone attempt would fail the command.
    bazkit(&root)
        .args(["workspace", "add", "-p", "acme/payments"])
        .assert()
        .success();

    let manifest = fs::read_to_string(root.join("WORKSPACE")).unwrap();
    assert!(manifest.contains("name = \"payments\""));
    assert!(manifest.contains("path = \"payments\""));
    assert!(root.join("payments/BUILD.bazel").exists());
}

#[test]
fn add_appends_in_argument_order() {
    let (_temp, root) = workspace();
    fs::create_dir(root.join("repo1")).unwrap();
    fs::create_dir(root.join("repo2")).unwrap();

    bazkit(&root)
        .args(["workspace", "add", "-p", "orgA/repo1", "-p", "orgA/repo2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no recognised build system"));

    let manifest = fs::read_to_string(root.join("WORKSPACE")).unwrap();
    let first = manifest.find("\"repo1\"").unwrap();
    let second = manifest.find("\"repo2\"").unwrap();
    assert!(first < second);
}

#[test]
fn add_outside_workspace_fails() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .args(["workspace", "add", "-p", "acme/payments"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No WORKSPACE file"));
}

#[test]
fn failed_clone_is_fatal() {
    let (_temp, root) = workspace();
    bazkit(&root)
        .args(["workspace", "add", "-p", "acme/missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git"));
    let manifest = fs::read_to_string(root.join("WORKSPACE")).unwrap();
    assert!(!manifest.contains("local_repository"));
}

// ── workspace build ───────────────────────────────────────────────────────────

#[test]
fn build_without_descriptor_fails_before_bazel() {
    let (_temp, root) = workspace();
    fs::create_dir(root.join("empty")).unwrap();

    bazkit(&root.join("empty"))
        .args(["workspace", "build"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No build descriptor"));
}

#[test]
fn single_dash_all_is_accepted() {
    let temp = TempDir::new().unwrap();
    // Parsed as --all; the stand-in Bazel then rejects `info workspace`.
    bazkit(temp.path())
        .args(["workspace", "build", "-all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not inside a Bazel workspace"));
}

#[test]
fn all_with_targets_conflicts() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .args(["workspace", "build", "--all", "server"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot combine"));
}

// ── skeleton create ───────────────────────────────────────────────────────────

#[test]
fn jvm_skeleton_without_git_still_succeeds() {
    let (_temp, root) = workspace();

    bazkit(&root)
        .args(["skeleton", "create", "jvm", "billing"])
        .assert()
        .success()
        .stderr(predicate::str::contains("git"));

    let project = root.join("billing");
    assert!(
        fs::read_to_string(project.join("build.gradle.kts"))
            .unwrap()
            .contains("group = \"com.acme.billing\"")
    );
    assert!(
        fs::read_to_string(project.join("BUILD.bazel"))
            .unwrap()
            .contains("kt_jvm_binary(")
    );
    assert!(project.join("src/main/kotlin/Main.kt").exists());
}

#[test]
fn infra_variant_as_flag() {
    let (_temp, root) = workspace();
    bazkit(&root)
        .args(["skeleton", "create", "cdk", "shared", "-construct"])
        .assert()
        .success();
    assert!(root.join("shared/lib/index.ts").exists());
    assert!(!root.join("shared/bin").exists());
}

#[test]
fn skeleton_onto_existing_directory_is_refused() {
    let (_temp, root) = workspace();
    fs::create_dir(root.join("billing")).unwrap();
    fs::write(root.join("billing/notes.txt"), "keep").unwrap();

    bazkit(&root)
        .args(["skeleton", "create", "jvm", "billing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let entries: Vec<_> = fs::read_dir(root.join("billing")).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn mobile_generator_failure_is_fatal() {
    let (_temp, root) = workspace();
    bazkit(&root)
        .args(["skeleton", "create", "mobile", "shop"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("npx"));
}

#[test]
fn template_override_directory_is_used() {
    let (temp, root) = workspace();
    let templates = temp.path().join("templates/java");
    fs::create_dir_all(templates.join("src")).unwrap();
    fs::write(
        templates.join("template.toml"),
        "[template]\nkind = \"jvm\"\nvariant = \"java\"\n",
    )
    .unwrap();
    fs::write(templates.join("src/App.java"), "// __PROJECT_NAME__ for __ORG__\n").unwrap();

    bazkit(&root)
        .env("BAZKIT_TEMPLATES_DIR", temp.path().join("templates"))
        .args(["skeleton", "create", "jvm", "ledger", "java"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("ledger/src/App.java")).unwrap(),
        "// ledger for acme\n"
    );
    assert!(!root.join("ledger/settings.gradle.kts").exists());
}

// ── supplementary commands ────────────────────────────────────────────────────

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bazkit"));
}

#[test]
fn config_show_reflects_environment() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path())
        .env("BAZKIT_GIT__HOST", "https://git.example.com")
        .args(["--output-format", "plain", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[tools]"))
        .stdout(predicate::str::contains("https://git.example.com"));
}

#[test]
fn config_init_then_path() {
    let temp = TempDir::new().unwrap();
    bazkit(temp.path()).args(["config", "init"]).assert().success();

    let out = bazkit(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let path = String::from_utf8(out).unwrap();
    assert!(Path::new(path.trim()).exists());
}
