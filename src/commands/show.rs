//! `tasksync show` command.

use std::fmt::Write;
use std::path::Path;

use crate::config::SyncConfig;
use crate::context::ServiceContext;
use crate::tasks::TaskRecord;

/// Execute the `show` command.
///
/// When `id` is provided, pretty-prints that task. When no `id` is given,
/// lists every task with its phase.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read or the task is
/// not in it.
pub fn run(config: &SyncConfig, path: &Path, id: Option<&str>) -> Result<(), String> {
    let ctx = ServiceContext::live(config);
    println!("{}", run_with_context(&ctx, path, id)?);
    Ok(())
}

/// Render the `show` output for the task list at `path`.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read or the task is
/// not in it.
pub fn run_with_context(
    ctx: &ServiceContext,
    path: &Path,
    id: Option<&str>,
) -> Result<String, String> {
    let tasks = super::load_tasks(ctx, path)?;

    if let Some(task_id) = id {
        let task = tasks
            .iter()
            .find(|task| task.id == task_id)
            .ok_or_else(|| format!("Task not found: {task_id}"))?;
        return Ok(format_task(task));
    }

    if tasks.is_empty() {
        return Ok(format!("No tasks found in {}.", path.display()));
    }
    Ok(format_table(&tasks))
}

fn format_table(tasks: &[TaskRecord]) -> String {
    let id_width = tasks.iter().map(|t| t.id.chars().count()).max().unwrap_or(2).max(2);
    let phase_width = tasks.iter().map(|t| t.phase.chars().count()).max().unwrap_or(5).max(5);

    let mut out = String::new();
    let _ = writeln!(out, "{:<id_width$}  {:<phase_width$}  TITLE", "ID", "PHASE");
    let _ = writeln!(out, "{:-<id_width$}  {:-<phase_width$}  -----", "", "");
    for task in tasks {
        let _ = writeln!(out, "{:<id_width$}  {:<phase_width$}  {}", task.id, task.phase, task.title);
    }
    out.pop();
    out
}

fn format_task(task: &TaskRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Task: {}", task.id);
    let _ = writeln!(out, "Title: {}", task.title);
    if !task.phase.is_empty() {
        let _ = writeln!(out, "Phase: {}", task.phase);
    }
    for (label, value) in [
        ("Description", &task.description),
        ("Related Requirements", &task.requirements),
        ("Dependencies", &task.dependencies),
        ("Estimate", &task.estimate),
        ("Priority", &task.priority),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    if !task.acceptance.is_empty() {
        out.push_str("Acceptance Criteria:\n");
        for criterion in &task.acceptance {
            let _ = writeln!(out, "  - {criterion}");
        }
    }
    out.pop();
    out
}
