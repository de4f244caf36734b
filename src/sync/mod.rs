//! Sync parsed tasks to the issue tracker.
//!
//! Idempotent: re-running does not create duplicates. Issues are matched
//! to tasks by looking for the task ID prefix (`[T-###]`) in the title.

mod body;
mod labels;
mod plan;
mod report;

pub use body::{issue_body, issue_title};
pub use labels::{phase_label, priority_label, required_labels, task_labels, LabelSpec};
pub use plan::{
    execute_sync, find_matching_issue, lookup_existing, plan_sync, SyncAction, SyncOutcome,
    DRY_RUN_URL,
};
pub use report::{body_file_name, slugify, write_bodies, write_index, INDEX_FILE};
