//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the sync pipeline and an
//! external system (filesystem, processes, the issue tracker).
//! Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod issues;
pub mod shell;

pub use filesystem::FileSystem;
pub use issues::{Issue, IssueTracker, NewIssue};
pub use shell::{ShellExecutor, ShellOutput};

/// Boxed error returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
