//! Single forward scan that assembles task records.

use super::classify::{classify, LineKind};
use super::fields::extract_fields;
use super::record::TaskRecord;

/// Parses a task document into records, in document order.
///
/// Each task inherits the nearest preceding phase heading. A task block runs
/// from the line after its header up to, not including, the next header of
/// either kind. Duplicate ids are emitted as-is.
#[must_use]
pub fn parse_tasks(document: &str) -> Vec<TaskRecord> {
    let mut lines = document.lines().map(|line| (line, classify(line))).peekable();
    let mut phase = "";
    let mut tasks = Vec::new();

    while let Some((_, kind)) = lines.next() {
        match kind {
            LineKind::PhaseHeader(text) => phase = text,
            LineKind::TaskHeader { id, title } => {
                let mut block = Vec::new();
                while let Some((line, _)) = lines.next_if(|(_, next)| !next.is_header()) {
                    block.push(line);
                }
                tasks.push(TaskRecord::new(id, title, phase, extract_fields(&block)));
            }
            LineKind::Other => {}
        }
    }

    tracing::debug!(count = tasks.len(), "parsed task document");
    tasks
}
