//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::{Command, Output};

const TASKS: &str = "\
# Tasks

## Phase 1 — Setup
1. T-001 — Init repo
   - Description: Create skeleton
   - Priority: High
   - Acceptance Criteria: Repo exists
   - Tests pass

2. T-002 — Add CI
   - Estimate:

## Phase 2 — Build
3. T-003 — Gateway
   - Dependencies: T-001, T-002
";

fn run_tasksync(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_tasksync");
    Command::new(bin)
        .current_dir(dir)
        .args(args)
        // Keep the caller's environment from steering the run.
        .env_remove("TASKS_FILE")
        .env_remove("OUT_DIR")
        .env_remove("DRY_RUN")
        .env_remove("LABELS")
        .env_remove("PROJECT_NUMBER")
        .output()
        .expect("failed to run tasksync binary")
}

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("tasks.md"), TASKS).expect("write tasks.md");
    dir
}

#[test]
fn parse_prints_tasks_as_json() {
    let dir = workspace();
    let output = run_tasksync(dir.path(), &["parse"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let tasks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0]["id"], "T-001");
    assert_eq!(tasks[0]["phase"], "Phase 1 — Setup");
    assert_eq!(tasks[0]["acceptance"], serde_json::json!(["Repo exists", "Tests pass"]));
    assert_eq!(tasks[1]["estimate"], "");
    assert_eq!(tasks[2]["phase"], "Phase 2 — Build");
    assert_eq!(tasks[2]["dependencies"], "T-001, T-002");
}

#[test]
fn show_lists_tasks() {
    let dir = workspace();
    let output = run_tasksync(dir.path(), &["show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("T-003  Phase 2 — Build  Gateway"));
}

#[test]
fn show_unknown_task_fails() {
    let dir = workspace();
    let output = run_tasksync(dir.path(), &["show", "T-404"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Task not found: T-404"));
}

#[test]
fn sync_dry_run_writes_bodies_and_index() {
    let dir = workspace();
    let output = run_tasksync(dir.path(), &["sync", "--dry-run", "--out-dir", "out"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let index = std::fs::read_to_string(dir.path().join("out/index.json")).unwrap();
    assert_eq!(printed, serde_json::from_str::<serde_json::Value>(&index).unwrap());

    let first = &printed[0];
    assert_eq!(first["title"], "[T-001] Init repo");
    assert_eq!(first["url"], "(dry-run)");
    assert_eq!(first["created"], true);
    assert_eq!(first["project_added"], false);
    assert_eq!(first["labels"], serde_json::json!(["task", "priority:high", "phase:1"]));

    let body = std::fs::read_to_string(dir.path().join("out/T-001_init-repo.md")).unwrap();
    assert!(body.starts_with("# [T-001] Init repo (Phase 1 — Setup)"));
    assert!(body.contains("- [ ] Tests pass"));
    assert!(dir.path().join("out/T-003_gateway.md").exists());
}

#[test]
fn sync_reads_labels_from_config_file() {
    let dir = workspace();
    std::fs::write(dir.path().join("tasksync.yaml"), "labels: [roadmap]\nout_dir: issues\n")
        .unwrap();
    let output = run_tasksync(dir.path(), &["sync", "--dry-run"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed[1]["labels"], serde_json::json!(["roadmap", "phase:1"]));
    assert!(dir.path().join("issues/index.json").exists());
}

#[test]
fn missing_tasks_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tasksync(dir.path(), &["sync", "--dry-run"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("tasks file not found at tasks.md"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tasksync(dir.path(), &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn help_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tasksync(dir.path(), &["sync", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--dry-run"));
}
