//! Service context bundling all port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::github::GhIssueTracker;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::config::SyncConfig;
use crate::ports::{FileSystem, IssueTracker};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary.
pub struct ServiceContext {
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Issue tracker for looking up and creating issues.
    pub issues: Box<dyn IssueTracker>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, issues: Box<dyn IssueTracker>) -> Self {
        Self { fs, issues }
    }

    /// Creates a live context: real disk and GitHub through `gh`.
    #[must_use]
    pub fn live(config: &SyncConfig) -> Self {
        Self::new(
            Box::new(LiveFileSystem),
            Box::new(GhIssueTracker::new(Box::new(LiveShellExecutor), config)),
        )
    }
}
