//! Sync configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables, then command-line flags. The result is passed
//! explicitly to the commands; nothing below this module reads the
//! environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tasksync.yaml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid YAML for [`SyncConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// An environment variable holds a value of the wrong shape.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Everything the sync pipeline needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// `owner/name` of the target repository; `gh` infers it when unset.
    pub repo: Option<String>,
    /// Owner of the project board issues are added to.
    pub project_owner: Option<String>,
    /// Number of the project board issues are added to.
    pub project_number: Option<u32>,
    /// Login assigned to newly created issues.
    pub assignee: Option<String>,
    /// Labels attached to every issue.
    pub labels: Vec<String>,
    /// Render and report without touching the tracker.
    pub dry_run: bool,
    /// Markdown task list to read.
    pub tasks_file: PathBuf,
    /// Directory receiving rendered bodies and `index.json`.
    pub out_dir: PathBuf,
    /// Documents listed at the end of every issue body.
    pub references: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            repo: None,
            project_owner: None,
            project_number: None,
            assignee: None,
            labels: vec!["task".to_string()],
            dry_run: false,
            tasks_file: PathBuf::from("tasks.md"),
            out_dir: PathBuf::from(".agent_work/issues"),
            references: ["requirements.md", "design.md", "tasks.md"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SyncConfig {
    /// Loads configuration from an explicit YAML file, or from
    /// [`DEFAULT_CONFIG_FILE`] when it exists, then applies the environment
    /// through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// environment value is malformed.
    pub fn load<F>(explicit: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit {
            Some(path) => Self::from_yaml_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_yaml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Reads a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.labels = clean_labels(config.labels.iter().map(String::as_str));
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Overrides fields from environment variables.
    ///
    /// Recognized: `REPO`, `PROJECT_OWNER`, `PROJECT_NUMBER`, `ASSIGNEE`,
    /// `LABELS` (comma separated), `DRY_RUN`, `TASKS_FILE`, `OUT_DIR`.
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `PROJECT_NUMBER` is not a number.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(repo) = get("REPO") {
            self.repo = Some(repo);
        }
        if let Some(owner) = get("PROJECT_OWNER") {
            self.project_owner = Some(owner);
        }
        if let Some(number) = get("PROJECT_NUMBER") {
            let parsed = number
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PROJECT_NUMBER", value: number })?;
            self.project_number = Some(parsed);
        }
        if let Some(assignee) = get("ASSIGNEE") {
            self.assignee = Some(assignee);
        }
        if let Some(labels) = get("LABELS") {
            self.labels = clean_labels(labels.split(','));
        }
        if let Some(flag) = get("DRY_RUN") {
            self.dry_run = is_truthy(&flag);
        }
        if let Some(path) = get("TASKS_FILE") {
            self.tasks_file = PathBuf::from(path);
        }
        if let Some(path) = get("OUT_DIR") {
            self.out_dir = PathBuf::from(path);
        }
        Ok(())
    }

    /// Returns the project board coordinates when both parts are configured.
    #[must_use]
    pub fn project(&self) -> Option<(&str, u32)> {
        self.project_owner.as_deref().zip(self.project_number)
    }
}

fn clean_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels.map(str::trim).filter(|label| !label.is_empty()).map(String::from).collect()
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
