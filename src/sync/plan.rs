//! Sync planning and execution.

use serde::{Deserialize, Serialize};

use super::body::{issue_body, issue_title};
use super::labels::task_labels;
use crate::config::SyncConfig;
use crate::context::ServiceContext;
use crate::ports::{Issue, NewIssue};
use crate::tasks::TaskRecord;

/// URL reported for issues a dry run would have created.
pub const DRY_RUN_URL: &str = "(dry-run)";

/// What the sync will do (or did) for a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// A new issue will be / was created.
    Create {
        /// The task ID.
        task_id: String,
        /// The issue title that will be created.
        title: String,
    },
    /// An issue for this task already exists and is left alone.
    Existing {
        /// The task ID.
        task_id: String,
        /// Number of the matching issue.
        issue_number: u64,
        /// URL of the matching issue.
        url: String,
    },
}

/// Result of syncing one task, as written to `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    /// The task ID.
    pub id: String,
    /// The issue title.
    pub title: String,
    /// Issue URL, or `(dry-run)`.
    pub url: String,
    /// Whether the issue was created by this run.
    pub created: bool,
    /// Whether the issue was added to the project board by this run.
    pub project_added: bool,
    /// Labels attached (or that would be attached) to the issue.
    pub labels: Vec<String>,
}

/// Finds an existing issue that matches the given task ID.
///
/// Matches when the issue title starts with the task ID, either bracketed
/// (`[T-001] ...`) or bare (`T-001: ...`). When several issues match, the
/// first wins and the rest are logged.
#[must_use]
pub fn find_matching_issue<'a>(task_id: &str, issues: &'a [Issue]) -> Option<&'a Issue> {
    let mut matches = issues.iter().filter(|issue| title_names_task(&issue.title, task_id));
    let first = matches.next()?;
    for extra in matches {
        tracing::warn!(
            task = task_id,
            kept = first.number,
            ignored = extra.number,
            "several issues match one task"
        );
    }
    Some(first)
}

fn title_names_task(title: &str, task_id: &str) -> bool {
    if let Some(bracketed) = title.strip_prefix('[') {
        return bracketed.strip_prefix(task_id).is_some_and(|rest| rest.starts_with(']'));
    }
    // A bare ID must end at a word boundary, so `T-0012` is not `T-001`.
    title
        .strip_prefix(task_id)
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '-'))
}

/// Plans one action per task, in task order, against known issues.
#[must_use]
pub fn plan_sync(tasks: &[TaskRecord], existing_issues: &[Issue]) -> Vec<SyncAction> {
    tasks
        .iter()
        .map(|task| match find_matching_issue(&task.id, existing_issues) {
            Some(existing) => SyncAction::Existing {
                task_id: task.id.clone(),
                issue_number: existing.number,
                url: existing.url.clone(),
            },
            None => SyncAction::Create { task_id: task.id.clone(), title: issue_title(task) },
        })
        .collect()
}

/// Searches the tracker once per distinct task ID and returns every hit.
///
/// # Errors
///
/// Returns an error if any search fails.
pub fn lookup_existing(ctx: &ServiceContext, tasks: &[TaskRecord]) -> Result<Vec<Issue>, String> {
    let mut seen = std::collections::HashSet::new();
    let mut found = Vec::new();
    for task in tasks.iter().filter(|task| seen.insert(task.id.as_str())) {
        let hits = ctx
            .issues
            .search_issues(&task.id)
            .map_err(|e| format!("Failed to look up existing issue for {}: {e}", task.id))?;
        found.extend(hits);
    }
    Ok(found)
}

/// Executes planned actions. `actions` must come from [`plan_sync`] over
/// the same `tasks`.
///
/// In dry-run mode nothing is created and project boards are untouched.
/// A failed project addition is logged and reported as `project_added:
/// false`.
///
/// # Errors
///
/// Returns an error if the actions do not line up with the tasks, or if an
/// issue cannot be created.
pub fn execute_sync(
    ctx: &ServiceContext,
    config: &SyncConfig,
    tasks: &[TaskRecord],
    actions: &[SyncAction],
) -> Result<Vec<SyncOutcome>, String> {
    if tasks.len() != actions.len() {
        return Err(format!(
            "Sync plan has {} actions for {} tasks",
            actions.len(),
            tasks.len()
        ));
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    for (task, action) in tasks.iter().zip(actions) {
        let title = issue_title(task);
        let labels = task_labels(&config.labels, task);

        let (url, created) = match action {
            SyncAction::Create { .. } if config.dry_run => (DRY_RUN_URL.to_string(), true),
            SyncAction::Create { .. } => {
                let body = issue_body(task, &config.references);
                let url = ctx
                    .issues
                    .create_issue(&NewIssue {
                        title: &title,
                        body: &body,
                        labels: &labels,
                        assignee: config.assignee.as_deref(),
                    })
                    .map_err(|e| format!("Failed to create issue for {}: {e}", task.id))?;
                tracing::info!(task = %task.id, %url, "created issue");
                (url, true)
            }
            SyncAction::Existing { issue_number, url, .. } => {
                tracing::info!(task = %task.id, issue = issue_number, "issue already exists");
                (url.clone(), false)
            }
        };

        let project_added =
            !config.dry_run && !url.is_empty() && add_to_project(ctx, &task.id, &url);
        outcomes.push(SyncOutcome {
            id: task.id.clone(),
            title,
            url,
            created,
            project_added,
            labels,
        });
    }
    Ok(outcomes)
}

fn add_to_project(ctx: &ServiceContext, task_id: &str, url: &str) -> bool {
    match ctx.issues.add_to_project(url) {
        Ok(added) => added,
        Err(e) => {
            tracing::warn!(task = task_id, %url, error = %e, "failed to add issue to project");
            false
        }
    }
}
