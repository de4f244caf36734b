//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::SyncConfig;

/// Top-level CLI parser for `tasksync`.
#[derive(Debug, Parser)]
#[command(name = "tasksync", version, about = "Turn a markdown task list into tracker issues")]
pub struct Cli {
    /// YAML config file; `tasksync.yaml` is used when present and this is omitted.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the parsed tasks as JSON.
    Parse {
        /// Task list to read instead of the configured one.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// List the parsed tasks, or show one task in detail.
    Show {
        /// Task ID to show (e.g. T-001).
        id: Option<String>,
        /// Task list to read instead of the configured one.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Create tracker issues for tasks that do not have one yet.
    Sync(SyncArgs),
}

/// Flags for `tasksync sync`. Each one overrides the loaded configuration.
#[derive(Debug, Default, Args)]
pub struct SyncArgs {
    /// Task list to read.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Directory for rendered bodies and `index.json`.
    #[arg(long, value_name = "PATH")]
    pub out_dir: Option<PathBuf>,
    /// Target repository as `owner/name`.
    #[arg(long)]
    pub repo: Option<String>,
    /// Login to assign new issues to.
    #[arg(long)]
    pub assignee: Option<String>,
    /// Default label; repeat for several. Replaces configured labels.
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,
    /// Render and report without touching the tracker.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut SyncConfig) {
        if let Some(file) = &self.file {
            config.tasks_file.clone_from(file);
        }
        if let Some(out_dir) = &self.out_dir {
            config.out_dir.clone_from(out_dir);
        }
        if self.repo.is_some() {
            config.repo.clone_from(&self.repo);
        }
        if self.assignee.is_some() {
            config.assignee.clone_from(&self.assignee);
        }
        if !self.labels.is_empty() {
            config.labels.clone_from(&self.labels);
        }
        if self.dry_run {
            config.dry_run = true;
        }
    }
}
