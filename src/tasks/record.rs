//! Parsed task record.

use serde::{Deserialize, Serialize};

use super::fields::TaskFields;

/// One task parsed from the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier of the form `T-###`.
    pub id: String,
    /// Header title, trimmed and non-empty.
    pub title: String,
    /// Text of the nearest preceding phase heading, or empty.
    pub phase: String,
    /// Value of the `Description` bullet.
    pub description: String,
    /// Value of the `Related Requirements` bullet.
    pub requirements: String,
    /// Value of the `Dependencies` bullet.
    pub dependencies: String,
    /// Value of the `Estimate` bullet.
    pub estimate: String,
    /// Value of the `Priority` bullet.
    pub priority: String,
    /// Acceptance criteria in source order.
    pub acceptance: Vec<String>,
}

impl TaskRecord {
    /// Builds a record from a task header, its phase, and the fields
    /// extracted from the block below the header.
    #[must_use]
    pub fn new(id: &str, title: &str, phase: &str, fields: TaskFields) -> Self {
        let TaskFields { description, requirements, dependencies, estimate, priority, acceptance } =
            fields;
        Self {
            id: id.to_string(),
            title: title.to_string(),
            phase: phase.to_string(),
            description,
            requirements,
            dependencies,
            estimate,
            priority,
            acceptance,
        }
    }
}
