//! `tasksync sync` command.

use crate::config::SyncConfig;
use crate::context::ServiceContext;
use crate::sync::{
    execute_sync, lookup_existing, plan_sync, required_labels, write_bodies, write_index,
};

/// Execute the `sync` command and print the resulting index as JSON.
///
/// # Errors
///
/// Returns an error string if the task list is missing, the tracker is not
/// usable, or an issue cannot be looked up or created.
pub fn run(config: &SyncConfig) -> Result<(), String> {
    let ctx = ServiceContext::live(config);
    println!("{}", run_with_context(&ctx, config)?);
    Ok(())
}

/// Run the full sync pipeline against `ctx` and return the index JSON.
///
/// # Errors
///
/// Returns an error string if the task list is missing, the tracker is not
/// usable, or an issue cannot be looked up or created.
pub fn run_with_context(ctx: &ServiceContext, config: &SyncConfig) -> Result<String, String> {
    super::ensure_tasks_file(ctx, &config.tasks_file)?;
    if !config.dry_run && !ctx.issues.is_available() {
        return Err("GitHub CLI (gh) not available or not authenticated. \
                    Install gh and run `gh auth login`."
            .to_string());
    }

    let tasks = super::load_tasks(ctx, &config.tasks_file)?;

    if !config.dry_run {
        ensure_labels(ctx, &config.labels);
    }

    write_bodies(ctx, &config.out_dir, &tasks, &config.references)?;

    let existing = if config.dry_run { Vec::new() } else { lookup_existing(ctx, &tasks)? };
    let actions = plan_sync(&tasks, &existing);
    let outcomes = execute_sync(ctx, config, &tasks, &actions)?;

    let created = outcomes.iter().filter(|o| o.created).count();
    tracing::info!(
        tasks = outcomes.len(),
        created,
        dry_run = config.dry_run,
        out_dir = %config.out_dir.display(),
        "sync finished"
    );

    write_index(ctx, &config.out_dir, &outcomes)
}

fn ensure_labels(ctx: &ServiceContext, defaults: &[String]) {
    for label in required_labels(defaults) {
        if let Err(e) = ctx.issues.ensure_label(&label.name, &label.description) {
            tracing::warn!(label = %label.name, error = %e, "could not ensure label");
        }
    }
}
