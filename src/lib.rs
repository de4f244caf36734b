//! Core library entry for the `tasksync` CLI.
//!
//! `tasksync` reads a markdown task list, turns each numbered `T-###` task
//! into a [`tasks::TaskRecord`], and creates one tracker issue per task,
//! skipping tasks that already have an issue.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod sync;
pub mod tasks;

use clap::Parser;

use crate::config::SyncConfig;

/// Run the CLI with the provided arguments.
///
/// Configuration is loaded from the optional YAML file and the process
/// environment before dispatching.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration loading, or
/// command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = SyncConfig::load(cli.config.as_deref(), |key| std::env::var(key).ok())
        .map_err(|e| e.to_string())?;
    commands::dispatch(&cli.command, config)
}
