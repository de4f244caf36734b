//! `tasksync parse` command.

use std::path::Path;

use crate::config::SyncConfig;
use crate::context::ServiceContext;

/// Execute the `parse` command: print the parsed tasks as pretty JSON.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read.
pub fn run(config: &SyncConfig, path: &Path) -> Result<(), String> {
    let ctx = ServiceContext::live(config);
    println!("{}", run_with_context(&ctx, path)?);
    Ok(())
}

/// Parse the task list at `path` and render it as JSON.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read.
pub fn run_with_context(ctx: &ServiceContext, path: &Path) -> Result<String, String> {
    let tasks = super::load_tasks(ctx, path)?;
    serde_json::to_string_pretty(&tasks).map_err(|e| format!("Failed to serialize tasks: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::{FakeTracker, MemFs};
    use crate::tasks::TaskRecord;

    #[test]
    fn renders_tasks_as_json_array() {
        let fs = MemFs::default().with_file(
            "/tasks.md",
            "## Phase 1 — Setup\n1. T-001 — Init repo\n   - Priority: High\n",
        );
        let ctx = ServiceContext::new(Box::new(fs), Box::new(FakeTracker::default()));

        let json = run_with_context(&ctx, Path::new("/tasks.md")).unwrap();
        let tasks: Vec<TaskRecord> = serde_json::from_str(&json).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].phase, "Phase 1 — Setup");
        assert_eq!(tasks[0].priority, "High");
        assert!(json.contains("\"acceptance\": []"));
    }

    #[test]
    fn empty_document_is_empty_array() {
        let fs = MemFs::default().with_file("/tasks.md", "# Nothing here\n");
        let ctx = ServiceContext::new(Box::new(fs), Box::new(FakeTracker::default()));
        assert_eq!(run_with_context(&ctx, Path::new("/tasks.md")).unwrap(), "[]");
    }
}
