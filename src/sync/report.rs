//! Rendered issue bodies and the sync index written to the output directory.

use std::path::{Path, PathBuf};

use super::body::issue_body;
use super::plan::SyncOutcome;
use crate::context::ServiceContext;
use crate::tasks::TaskRecord;

/// Name of the JSON summary written next to the bodies.
pub const INDEX_FILE: &str = "index.json";

/// Lowercases `text` and collapses every run of non-alphanumeric characters
/// into a single `-`, with no leading or trailing dash.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.truncate(slug.trim_end_matches('-').len());
    slug
}

/// `<id>_<slug>.md` for a task.
#[must_use]
pub fn body_file_name(task: &TaskRecord) -> String {
    format!("{}_{}.md", task.id, slugify(&task.title))
}

/// Writes every task's issue body to `out_dir`, returning the written paths.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_bodies(
    ctx: &ServiceContext,
    out_dir: &Path,
    tasks: &[TaskRecord],
    references: &[String],
) -> Result<Vec<PathBuf>, String> {
    tasks
        .iter()
        .map(|task| {
            let path = out_dir.join(body_file_name(task));
            ctx.fs
                .write(&path, &issue_body(task, references))
                .map_err(|e| format!("Failed to write issue body {}: {e}", path.display()))?;
            Ok(path)
        })
        .collect()
}

/// Serializes the outcomes as pretty JSON, writes them to
/// `<out_dir>/index.json` and returns the JSON text.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_index(
    ctx: &ServiceContext,
    out_dir: &Path,
    outcomes: &[SyncOutcome],
) -> Result<String, String> {
    let json = serde_json::to_string_pretty(outcomes)
        .map_err(|e| format!("Failed to serialize sync index: {e}"))?;
    let path = out_dir.join(INDEX_FILE);
    ctx.fs
        .write(&path, &json)
        .map_err(|e| format!("Failed to write sync index {}: {e}", path.display()))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::{FakeTracker, MemFs};

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Init repo"), "init-repo");
        assert_eq!(slugify("  Wire: gRPC -> HTTP/2!  "), "wire-grpc-http-2");
        assert_eq!(slugify("Ünïcode only"), "n-code-only");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn body_file_name_uses_id_and_slug() {
        let task = TaskRecord {
            id: "T-010".into(),
            title: "Add AOI metrics".into(),
            ..TaskRecord::default()
        };
        assert_eq!(body_file_name(&task), "T-010_add-aoi-metrics.md");
    }

    #[test]
    fn bodies_and_index_are_written_under_out_dir() {
        let fs = MemFs::default();
        let files = fs.files();
        let ctx = ServiceContext::new(Box::new(fs), Box::new(FakeTracker::default()));
        let task =
            TaskRecord { id: "T-001".into(), title: "Init repo".into(), ..TaskRecord::default() };
        let out = Path::new("/out");

        let paths = write_bodies(&ctx, out, std::slice::from_ref(&task), &[]).unwrap();
        let outcome = SyncOutcome {
            id: "T-001".into(),
            title: "[T-001] Init repo".into(),
            url: "(dry-run)".into(),
            created: true,
            project_added: false,
            labels: vec!["task".into()],
        };
        let json = write_index(&ctx, out, &[outcome.clone()]).unwrap();

        assert_eq!(paths, vec![PathBuf::from("/out/T-001_init-repo.md")]);
        let files = files.lock().unwrap();
        assert!(files[&paths[0]].starts_with("# [T-001] Init repo ()"));
        assert_eq!(files[Path::new("/out/index.json")], json);
        let parsed: Vec<SyncOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![outcome]);
    }
}
