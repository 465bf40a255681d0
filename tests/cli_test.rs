// file: tests/cli_test.rs
// version: 1.0.0
// guid: 25d9126e-0bc5-4bba-a5cf-d6a1be02de40

//! End-to-end CLI tests for the Devflow Agent binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn agent() -> Command {
    Command::cargo_bin("devflow-agent").unwrap()
}

#[test]
fn no_argument_prints_usage_and_exits_zero() {
    agent()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: devflow-agent"))
        .stdout(predicate::str::contains("-local"))
        .stdout(predicate::str::contains("-test-package"));
}

#[test]
fn unrecognized_argument_prints_usage_and_exits_zero() {
    agent()
        .arg("-bogus")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: devflow-agent"));
}

#[test]
fn version_flag_reports_package_version() {
    agent()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("devflow-agent"));
}

#[test]
fn dry_run_prints_the_plan_without_executing() {
    let temp_dir = TempDir::new().unwrap();
    agent()
        .current_dir(temp_dir.path())
        .args(["-test", "--dry-run", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workflow: test"))
        .stdout(predicate::str::contains(".venv/bin/python -m pytest"));
}

#[test]
fn dry_run_covers_every_workflow_literal() {
    let temp_dir = TempDir::new().unwrap();
    for literal in [
        "-local",
        "-test",
        "-docker",
        "-benchmark",
        "-run-server",
        "-setup",
        "-run-gui",
        "-test-package",
    ] {
        agent()
            .current_dir(temp_dir.path())
            .args([literal, "--dry-run", "--quiet"])
            .assert()
            .success()
            .stdout(predicate::str::contains("workflow:"));
    }
}

#[test]
fn strict_workflow_failure_exits_one_with_fixed_message() {
    let temp_dir = TempDir::new().unwrap();
    // An interpreter that always exits nonzero makes the first strict step fail.
    std::fs::write(
        temp_dir.path().join("devflow.yaml"),
        "python:\n  interpreter: \"false\"\n",
    )
    .unwrap();

    agent()
        .current_dir(temp_dir.path())
        .args(["-local", "--quiet"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Workflow failed. Aborting."));
}

#[test]
fn lenient_workflow_failure_still_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    // No venv exists here, so the GUI step cannot start; the branch is
    // lenient and must not change the exit code.
    agent()
        .current_dir(temp_dir.path())
        .args(["-run-gui", "--quiet"])
        .assert()
        .success();
}

#[test]
fn explicit_missing_config_is_a_failure() {
    agent()
        .args(["-test", "--config", "/nonexistent/devflow.yaml", "--quiet"])
        .assert()
        .failure()
        .code(1);
}
