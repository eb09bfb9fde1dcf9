// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cclint binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn cclint() -> Command {
    let mut cmd = Command::cargo_bin("cclint").unwrap();
    cmd.env_remove("CCLINT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const SCENARIO_CONFIG: &str = r#"
[rules]
type-enum = [2, "always", ["feat", "fix"]]
scope-enum = [2, "always", ["cli", "api"]]
"#;

#[test]
fn lint_valid_message_with_default_preset() {
    cclint()
        .args(["lint", "feat(cli): add init command"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feat(cli): add init command"));
}

#[test]
fn lint_bad_type_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "cclint.toml", SCENARIO_CONFIG);

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["lint", "oops: bad type"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("type-enum"))
        .stdout(predicate::str::contains("'oops'"));
}

#[test]
fn lint_unknown_scope_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "cclint.toml", SCENARIO_CONFIG);

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["lint", "fix(unknown-scope): x"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("scope-enum"));
}

#[test]
fn lint_reads_stdin_and_strips_comments() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "cclint.toml", SCENARIO_CONFIG);

    cclint()
        .arg("--config")
        .arg(&config)
        .arg("lint")
        .write_stdin("# leading comment\nfeat(api): add endpoint\n\n# Please enter the commit message\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("feat(api): add endpoint"));
}

#[test]
fn lint_reads_message_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "cclint.toml", SCENARIO_CONFIG);
    let message = write_config(&dir, "COMMIT_EDITMSG", "random text\n");

    cclint()
        .arg("--config")
        .arg(&config)
        .arg("lint")
        .arg("--file")
        .arg(&message)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing type"));
}

#[test]
fn empty_enum_is_config_error() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "cclint.toml",
        "[rules]\ntype-enum = [2, \"always\", []]\n",
    );

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["lint", "feat: x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("type-enum"));
}

#[test]
fn unknown_rule_is_config_error() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "cclint.toml", "[rules]\nno-such-rule = [2]\n");

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["lint", "feat: x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule 'no-such-rule'"));
}

#[test]
fn warning_passes_unless_strict() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "cclint.toml",
        "[rules]\ntype-enum = [1, \"always\", [\"feat\", \"fix\"]]\n",
    );

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["lint", "oops: bad type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type-enum"));

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["--strict", "lint", "oops: bad type"])
        .assert()
        .code(1);
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "cclint.json",
        r#"{"rules": {"type-enum": [2, "always", ["feat", "fix"]]}}"#,
    );

    let output = cclint()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "lint", "oops: bad type"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["results"][0]["outcomes"][0]["rule"], "type-enum");
    assert_eq!(json["results"][0]["outcomes"][0]["passed"], false);
    assert_eq!(json["results"][0]["breaking"], false);
}

#[test]
fn lint_marks_breaking_change() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "cclint.toml", SCENARIO_CONFIG);

    cclint()
        .arg("--config")
        .arg(&config)
        .args(["lint", "feat(api)!: drop v1 endpoints"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[breaking]"));
}

#[test]
fn rules_lists_builtin_rules() {
    cclint()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("type-enum"))
        .stdout(predicate::str::contains("scope-enum"));
}

#[test]
fn init_writes_example_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cclint.toml");

    cclint()
        .arg("init")
        .arg("--path")
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    cclint()
        .arg("--config")
        .arg(&path)
        .args(["lint", "fix(runtime-go): handle nil env"])
        .assert()
        .success();

    cclint()
        .arg("init")
        .arg("--path")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

fn commit_all(repo: &git2::Repository, messages: &[&str]) {
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    for message in messages {
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }
}

fn init_repo(dir: &Path, messages: &[&str]) {
    let repo = git2::Repository::init(dir).unwrap();
    commit_all(&repo, messages);
}

#[test]
fn check_lints_git_range() {
    let dir = TempDir::new().unwrap();
    init_repo(
        dir.path(),
        &["chore: initial", "feat(cli): add init command", "oops: bad type"],
    );
    let config = write_config(&dir, "cclint.toml", SCENARIO_CONFIG);

    cclint()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["check", "HEAD~2..HEAD"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("feat(cli): add init command"))
        .stdout(predicate::str::contains("oops: bad type"))
        .stdout(predicate::str::contains("chore: initial").not());

    cclint()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["check", "HEAD~1"])
        .assert()
        .success();
}

#[test]
fn check_outside_repository_fails() {
    let dir = TempDir::new().unwrap();

    cclint()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
}
