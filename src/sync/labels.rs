//! Label derivation for synced issues.

use std::collections::BTreeMap;

use crate::tasks::TaskRecord;

/// Highest phase number that gets a pre-created `phase:<n>` label.
const MAX_PHASE_LABEL: u32 = 9;

/// A label the tracker must know about before issues reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpec {
    /// Label name.
    pub name: String,
    /// Human-readable description, possibly empty.
    pub description: String,
}

/// Maps a priority value to `priority:high|medium|low` by its prefix.
#[must_use]
pub fn priority_label(priority: &str) -> Option<&'static str> {
    let priority = priority.trim_start().to_lowercase();
    [("high", "priority:high"), ("medium", "priority:medium"), ("low", "priority:low")]
        .into_iter()
        .find_map(|(prefix, label)| priority.starts_with(prefix).then_some(label))
}

/// Maps `Phase <n> ...` to `phase:<n>`.
#[must_use]
pub fn phase_label(phase: &str) -> Option<String> {
    let rest = phase.strip_prefix("Phase")?.trim_start();
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    (!digits.is_empty()).then(|| format!("phase:{digits}"))
}

/// Labels for one task: the defaults followed by its priority and phase labels.
#[must_use]
pub fn task_labels(defaults: &[String], task: &TaskRecord) -> Vec<String> {
    let mut labels = defaults.to_vec();
    labels.extend(priority_label(&task.priority).map(String::from));
    labels.extend(phase_label(&task.phase));
    labels
}

/// Every label a sync run may attach, sorted by name.
///
/// Covers the defaults, the three priority labels and `phase:1` through
/// `phase:9`.
#[must_use]
pub fn required_labels(defaults: &[String]) -> Vec<LabelSpec> {
    let mut labels: BTreeMap<String, String> =
        defaults.iter().map(|name| (name.clone(), String::new())).collect();
    for (level, text) in [("high", "High"), ("medium", "Medium"), ("low", "Low")] {
        labels.insert(format!("priority:{level}"), format!("{text} priority"));
    }
    for n in 1..=MAX_PHASE_LABEL {
        labels.insert(format!("phase:{n}"), format!("Phase {n} tasks"));
    }
    labels.into_iter().map(|(name, description)| LabelSpec { name, description }).collect()
}
