//! GitHub adapter for the `IssueTracker` port, driven through the `gh` CLI.

use thiserror::Error;

use crate::config::SyncConfig;
use crate::ports::{Issue, IssueTracker, NewIssue, PortError, ShellExecutor};

/// Color given to labels this tool creates.
const LABEL_COLOR: &str = "8b949e";

/// Failures talking to `gh`.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// `gh` ran but exited unsuccessfully.
    #[error("`{command}` exited with status {exit_code}: {stderr}")]
    CommandFailed {
        /// The `gh` subcommand that failed, e.g. `gh issue create`.
        command: String,
        /// Process exit code.
        exit_code: i32,
        /// Trimmed standard error.
        stderr: String,
    },
    /// `gh` printed JSON we could not read.
    #[error("unexpected output from `{command}`: {source}")]
    Parse {
        /// The `gh` subcommand.
        command: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// `gh issue create` succeeded without printing the new issue's URL.
    #[error("`{command}` did not print an issue URL")]
    MissingUrl {
        /// The `gh` subcommand.
        command: String,
    },
}

/// Issue tracker backed by GitHub through the `gh` command-line client.
pub struct GhIssueTracker {
    shell: Box<dyn ShellExecutor>,
    repo: Option<String>,
    project: Option<(String, u32)>,
}

impl GhIssueTracker {
    /// Creates a tracker that runs `gh` through `shell`, targeting the
    /// repository and project named in `config`.
    #[must_use]
    pub fn new(shell: Box<dyn ShellExecutor>, config: &SyncConfig) -> Self {
        Self {
            shell,
            repo: config.repo.clone(),
            project: config.project().map(|(owner, number)| (owner.to_string(), number)),
        }
    }

    /// Runs `gh` and returns its trimmed stdout, failing on a non-zero exit.
    fn gh(&self, args: &[&str]) -> Result<String, PortError> {
        let output = self.shell.run("gh", args)?;
        if output.success() {
            Ok(output.stdout.trim().to_string())
        } else {
            Err(Box::new(TrackerError::CommandFailed {
                command: command_name(args),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            }))
        }
    }

    fn push_repo<'a>(&'a self, args: &mut Vec<&'a str>) {
        if let Some(repo) = &self.repo {
            args.extend(["--repo", repo.as_str()]);
        }
    }
}

impl IssueTracker for GhIssueTracker {
    fn is_available(&self) -> bool {
        self.gh(&["--version"]).is_ok() && self.gh(&["auth", "status", "-h", "github.com"]).is_ok()
    }

    fn search_issues(&self, query: &str) -> Result<Vec<Issue>, PortError> {
        let mut args =
            vec!["issue", "list", "--state", "all", "--search", query, "--json", "number,title,url"];
        self.push_repo(&mut args);

        let stdout = self.gh(&args)?;
        if stdout.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&stdout).map_err(|source| {
            Box::new(TrackerError::Parse { command: command_name(&args), source }) as PortError
        })
    }

    fn create_issue(&self, issue: &NewIssue<'_>) -> Result<String, PortError> {
        let mut args = vec!["issue", "create", "--title", issue.title, "--body", issue.body];
        self.push_repo(&mut args);
        for label in issue.labels {
            args.extend(["--label", label.as_str()]);
        }
        if let Some(assignee) = issue.assignee.filter(|a| !a.is_empty()) {
            args.extend(["--assignee", assignee]);
        }

        let stdout = self.gh(&args)?;
        let url = stdout.lines().map(str::trim).filter(|line| !line.is_empty()).last();
        url.map(String::from).ok_or_else(|| {
            Box::new(TrackerError::MissingUrl { command: command_name(&args) }) as PortError
        })
    }

    fn ensure_label(&self, name: &str, description: &str) -> Result<(), PortError> {
        let mut view = vec!["label", "view", name];
        self.push_repo(&mut view);
        if self.gh(&view).is_ok() {
            return Ok(());
        }

        tracing::info!(label = name, "creating missing label");
        let mut create =
            vec!["label", "create", name, "--color", LABEL_COLOR, "--description", description];
        self.push_repo(&mut create);
        self.gh(&create).map(|_| ())
    }

    fn add_to_project(&self, url: &str) -> Result<bool, PortError> {
        let Some((owner, number)) = &self.project else {
            return Ok(false);
        };
        let number = number.to_string();
        self.gh(&[
            "project",
            "item-add",
            "--owner",
            owner.as_str(),
            "--number",
            number.as_str(),
            "--url",
            url,
        ])?;
        Ok(true)
    }
}

/// `gh` plus its first two arguments, enough to name the subcommand.
fn command_name(args: &[&str]) -> String {
    std::iter::once("gh").chain(args.iter().copied().take(2)).collect::<Vec<_>>().join(" ")
}
