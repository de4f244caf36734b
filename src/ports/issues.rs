//! Issue tracker port for managing work items.

use serde::{Deserialize, Serialize};

use super::PortError;

/// An issue that already exists in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker-assigned issue number.
    pub number: u64,
    /// The issue title.
    pub title: String,
    /// Web URL of the issue.
    #[serde(default)]
    pub url: String,
}

/// An issue to be created.
#[derive(Debug, Clone, Copy)]
pub struct NewIssue<'a> {
    /// The issue title.
    pub title: &'a str,
    /// The markdown body.
    pub body: &'a str,
    /// Labels to attach.
    pub labels: &'a [String],
    /// Optional assignee login.
    pub assignee: Option<&'a str>,
}

/// Manages issues in an external tracker.
pub trait IssueTracker: Send + Sync {
    /// Returns `true` when the tracker can be reached and is authenticated.
    fn is_available(&self) -> bool;

    /// Searches issues in every state for the given query.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails or its output cannot be read.
    fn search_issues(&self, query: &str) -> Result<Vec<Issue>, PortError>;

    /// Creates an issue and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue cannot be created.
    fn create_issue(&self, issue: &NewIssue<'_>) -> Result<String, PortError>;

    /// Makes sure a label exists, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is missing and cannot be created.
    fn ensure_label(&self, name: &str, description: &str) -> Result<(), PortError>;

    /// Adds an issue to the configured project board.
    ///
    /// Returns `false` when no project is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the project rejects the item.
    fn add_to_project(&self, url: &str) -> Result<bool, PortError>;
}
