//! CLI integration tests for the `flowmeta` binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout
//! and stderr. Commands run from the crate directory so fixture paths
//! are `tests/fixtures/...`.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn flowmeta() -> Command {
    let mut cmd = cargo_bin_cmd!("flowmeta");
    cmd.current_dir(Path::new(env!("CARGO_MANIFEST_DIR")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run flowmeta");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    flowmeta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Element instance metadata for process-instance views",
        ));
}

#[test]
fn version_exits_0() {
    flowmeta()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flowmeta"));
}

// ──────────────────────────────────────────────
// 2. build
// ──────────────────────────────────────────────

#[test]
fn build_keeps_falsy_job_values() {
    let out = stdout_json(flowmeta().args(["build", "tests/fixtures/service_task_job.json"]));
    assert_eq!(out["jobRetries"], serde_json::json!(0));
    assert_eq!(out["jobType"], serde_json::json!(""));
    assert_eq!(out["jobKey"], serde_json::json!("j1"));
    assert_eq!(out["calledProcessInstanceId"], Value::Null);
    assert_eq!(out["state"], serde_json::json!("ACTIVE"));
}

#[test]
fn build_call_activity() {
    let out = stdout_json(flowmeta().args(["build", "tests/fixtures/call_activity.json"]));
    assert_eq!(
        out["calledProcessInstanceId"],
        serde_json::json!("229843728748927482")
    );
    assert_eq!(
        out["calledProcessDefinitionName"],
        serde_json::json!("Called Process")
    );
    assert_eq!(out["elementName"], serde_json::json!("Call Activity"));
}

#[test]
fn build_user_task_overrides_state_and_normalizes_end_date() {
    let out = stdout_json(flowmeta().args(["build", "tests/fixtures/user_task.json"]));
    assert_eq!(out["state"], serde_json::json!("CREATED"));
    assert_eq!(out["assignee"], serde_json::json!("bob"));
    assert_eq!(out["candidateGroups"], serde_json::json!(["accounting"]));
    assert_eq!(out["endDate"], Value::Null);
}

#[test]
fn build_missing_element_instance_exits_1() {
    flowmeta()
        .args(["build", "tests/fixtures/missing_element.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("elementInstance"));
}

#[test]
fn build_nonexistent_file_exits_1() {
    flowmeta()
        .args(["build", "tests/fixtures/nonexistent_xyz.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn build_invalid_json_reports_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    flowmeta()
        .args(["--output", "json", "build"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"error\""))
        .stderr(predicate::str::contains("error parsing JSON"));
}

#[test]
fn quiet_text_errors_are_silent() {
    flowmeta()
        .args(["--quiet", "build", "tests/fixtures/missing_element.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 3. summary
// ──────────────────────────────────────────────

#[test]
fn summary_text_for_call_activity() {
    flowmeta()
        .args(["summary", "tests/fixtures/call_activity.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Element Instance Key"))
        .stdout(predicate::str::contains("Less than 1 second"))
        .stdout(predicate::str::contains(
            "Called Process - 229843728748927482",
        ));
}

#[test]
fn summary_json_for_running_service_task() {
    let out = stdout_json(flowmeta().args([
        "--output",
        "json",
        "summary",
        "tests/fixtures/service_task_job.json",
        "--now",
        "2024-01-01T00:00:21Z",
    ]));
    assert_eq!(
        out["executionDuration"],
        serde_json::json!("21 seconds (running)")
    );
    assert_eq!(out["calledProcessInstance"], Value::Null);
    assert_eq!(out["hasIncident"], serde_json::json!(false));
}

#[test]
fn summary_rejects_bad_now() {
    flowmeta()
        .args([
            "summary",
            "tests/fixtures/service_task_job.json",
            "--now",
            "soon",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid timestamp 'soon'"));
}

// ──────────────────────────────────────────────
// 4. resolve
// ──────────────────────────────────────────────

#[test]
fn resolve_business_rule_task_picks_decision_only() {
    let out = stdout_json(flowmeta().args(["resolve", "tests/fixtures/business_rule_pages.json"]));
    assert_eq!(
        out["calledDecisionInstanceId"],
        serde_json::json!("750893257230984")
    );
    assert_eq!(
        out["calledDecisionDefinitionName"],
        serde_json::json!("Take decision")
    );
    // Process instances are only linked for call activities.
    assert_eq!(out["calledProcessInstanceId"], Value::Null);
    assert_eq!(out["jobKey"], Value::Null);
    assert_eq!(out["hasIncident"], serde_json::json!(true));
}

// ──────────────────────────────────────────────
// 5. Config
// ──────────────────────────────────────────────

#[test]
fn config_sets_default_output_and_compact_json() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("flowmeta.toml");
    fs::write(
        &config,
        concat!(
            "[output]\nformat = \"json\"\npretty = false\n\n",
            "[summary]\nrunning_suffix = \" (active)\"\n",
        ),
    )
    .unwrap();

    let output = flowmeta()
        .args(["summary", "tests/fixtures/service_task_job.json"])
        .args(["--now", "2024-01-01T00:02:00Z", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let out: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(out["executionDuration"], serde_json::json!("2 minutes (active)"));
}

#[test]
fn config_file_in_working_directory_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flowmeta.toml"), "[output]\nformat = \"json\"\n").unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/call_activity.json");

    let mut cmd = cargo_bin_cmd!("flowmeta");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    let out = stdout_json(cmd.arg("summary").arg(&fixture));
    assert_eq!(
        out["calledProcessInstance"],
        serde_json::json!("Called Process - 229843728748927482")
    );
}

#[test]
fn malformed_config_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("flowmeta.toml");
    fs::write(&config, "[output\nformat = ").unwrap();

    flowmeta()
        .args(["build", "tests/fixtures/call_activity.json", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error parsing config"));
}
