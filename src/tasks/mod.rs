//! Markdown task list parsing.
//!
//! Turns a loosely formatted task document (phase headings, numbered task
//! headers, indented `- Label: value` bullets) into [`TaskRecord`]s. The
//! parser is permissive: lines it does not recognize are skipped and missing
//! fields degrade to empty values.

mod assemble;
mod classify;
mod fields;
mod record;

pub use assemble::parse_tasks;
pub use classify::{classify, LineKind};
pub use fields::{extract_fields, TaskFields};
pub use record::TaskRecord;
