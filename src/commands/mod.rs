//! Command dispatch and handlers.

pub mod parse;
pub mod show;
pub mod sync;

use std::path::Path;

use crate::cli::Command;
use crate::config::SyncConfig;
use crate::context::ServiceContext;
use crate::tasks::{parse_tasks, TaskRecord};

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, mut config: SyncConfig) -> Result<(), String> {
    match command {
        Command::Parse { file } => {
            parse::run(&config, file.as_deref().unwrap_or(&config.tasks_file))
        }
        Command::Show { id, file } => {
            show::run(&config, file.as_deref().unwrap_or(&config.tasks_file), id.as_deref())
        }
        Command::Sync(args) => {
            args.apply_to(&mut config);
            sync::run(&config)
        }
    }
}

/// Fails with a readable message when the task list is missing.
pub(crate) fn ensure_tasks_file(ctx: &ServiceContext, path: &Path) -> Result<(), String> {
    if ctx.fs.exists(path) {
        Ok(())
    } else {
        Err(format!("tasks file not found at {}", path.display()))
    }
}

/// Reads and parses the task list at `path`.
pub(crate) fn load_tasks(ctx: &ServiceContext, path: &Path) -> Result<Vec<TaskRecord>, String> {
    ensure_tasks_file(ctx, path)?;
    let text = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let tasks = parse_tasks(&text);
    tracing::info!(path = %path.display(), tasks = tasks.len(), "loaded task list");
    Ok(tasks)
}
