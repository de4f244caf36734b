//! Issue title and body rendering.

use std::fmt::Write;

use crate::tasks::TaskRecord;

/// Builds the issue title for a task: `[<id>] <title>`.
#[must_use]
pub fn issue_title(task: &TaskRecord) -> String {
    format!("[{}] {}", task.id, task.title)
}

/// Builds the markdown issue body for a task.
///
/// Optional fields are only listed when non-empty; acceptance criteria are
/// rendered as an unchecked checklist; `references` are listed last.
#[must_use]
pub fn issue_body(task: &TaskRecord, references: &[String]) -> String {
    let mut body = String::new();

    let _ = writeln!(body, "# {} ({})", issue_title(task), task.phase);
    body.push('\n');
    let _ = writeln!(body, "- Summary: {}", task.description);
    for (label, value) in [
        ("Related Requirements", &task.requirements),
        ("Dependencies", &task.dependencies),
        ("Estimate", &task.estimate),
        ("Priority", &task.priority),
    ] {
        if !value.is_empty() {
            let _ = writeln!(body, "- {label}: {value}");
        }
    }
    body.push('\n');

    if !task.acceptance.is_empty() {
        body.push_str("## Acceptance Criteria\n");
        for criterion in &task.acceptance {
            let _ = writeln!(body, "- [ ] {criterion}");
        }
        body.push('\n');
    }

    if references.is_empty() {
        // Drop the trailing newline so the body never ends in a blank line.
        body.truncate(body.trim_end_matches('\n').len());
    } else {
        let listed: Vec<String> = references.iter().map(|r| format!("`{r}`")).collect();
        let _ = write!(body, "References: {}", listed.join(", "));
    }
    body
}
