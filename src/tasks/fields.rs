//! Field extraction for the block of lines below a task header.

use serde::{Deserialize, Serialize};

const ACCEPTANCE_LABEL: &str = "- Acceptance Criteria:";

/// Single-line field labels, in the order of [`TaskFields`]' string fields.
const FIELD_LABELS: [&str; 5] = [
    "- Description:",
    "- Related Requirements:",
    "- Dependencies:",
    "- Estimate:",
    "- Priority:",
];

/// Fields extracted from one task block. Absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// `- Description:` value.
    pub description: String,
    /// `- Related Requirements:` value.
    pub requirements: String,
    /// `- Dependencies:` value.
    pub dependencies: String,
    /// `- Estimate:` value.
    pub estimate: String,
    /// `- Priority:` value.
    pub priority: String,
    /// Acceptance criteria, in source order.
    pub acceptance: Vec<String>,
}

/// Extracts the labeled fields and acceptance criteria from a task block.
///
/// The first occurrence of each label wins. Criteria are the inline value of
/// the first `- Acceptance Criteria:` bullet plus every bullet line directly
/// after it; a repeated `- Acceptance Criteria:` line in that run adds its
/// value. A blank or non-bullet line ends the run. Never fails: anything
/// unrecognized is ignored.
#[must_use]
pub fn extract_fields<S: AsRef<str>>(block: &[S]) -> TaskFields {
    let lines: Vec<&str> = block.iter().map(|line| line.as_ref().trim()).collect();

    let mut values: [Option<String>; 5] = Default::default();
    for line in &lines {
        let found = FIELD_LABELS.iter().position(|label| line.starts_with(label));
        if let Some(slot) = found.and_then(|idx| values.get_mut(idx)) {
            if slot.is_none() {
                *slot = Some(value_after_colon(line).to_string());
            }
        }
    }

    let [description, requirements, dependencies, estimate, priority] =
        values.map(Option::unwrap_or_default);

    TaskFields {
        description,
        requirements,
        dependencies,
        estimate,
        priority,
        acceptance: acceptance_criteria(&lines),
    }
}

fn acceptance_criteria(lines: &[&str]) -> Vec<String> {
    let Some(start) = lines.iter().position(|line| line.starts_with(ACCEPTANCE_LABEL)) else {
        return Vec::new();
    };

    let inline = lines.get(start).map(|line| value_after_colon(line));
    let continuation = lines
        .iter()
        .skip(start + 1)
        .map_while(|line| {
            if line.starts_with(ACCEPTANCE_LABEL) {
                Some(value_after_colon(line))
            } else {
                line.strip_prefix('-').map(str::trim)
            }
        });

    inline
        .into_iter()
        .chain(continuation)
        .map(|criterion| criterion.trim_matches(|c| c == '-' || c == ' '))
        .filter(|criterion| !criterion.is_empty())
        .map(String::from)
        .collect()
}

/// Everything after the first colon, trimmed.
fn value_after_colon(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, value)| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_single_line_fields() {
        let block = [
            "   - Description: Create skeleton",
            "   - Related Requirements: R1, R2",
            "   - Dependencies: T-000",
            "   - Estimate: 2d",
            "   - Priority: High",
        ];
        let fields = extract_fields(&block);
        assert_eq!(fields.description, "Create skeleton");
        assert_eq!(fields.requirements, "R1, R2");
        assert_eq!(fields.dependencies, "T-000");
        assert_eq!(fields.estimate, "2d");
        assert_eq!(fields.priority, "High");
        assert!(fields.acceptance.is_empty());
    }

    #[test]
    fn value_keeps_text_after_first_colon_only() {
        let fields = extract_fields(&["- Description: Ratio is 3:1 at peak"]);
        assert_eq!(fields.description, "Ratio is 3:1 at peak");
    }

    #[test]
    fn empty_block_yields_defaults() {
        let empty: [&str; 0] = [];
        assert_eq!(extract_fields(&empty), TaskFields::default());
    }

    #[test]
    fn label_without_value_is_empty_string() {
        let fields = extract_fields(&["   - Estimate:", "   - Priority: Low"]);
        assert_eq!(fields.estimate, "");
        assert_eq!(fields.priority, "Low");
    }

    #[test]
    fn first_occurrence_of_a_label_wins() {
        let fields = extract_fields(&["- Priority: High", "- Priority: Low"]);
        assert_eq!(fields.priority, "High");
    }

    #[test]
    fn acceptance_inline_value_and_following_bullets() {
        let block = [
            "   - Acceptance Criteria: Repo exists",
            "     - Tests pass",
            "     - CI is green",
        ];
        assert_eq!(
            extract_fields(&block).acceptance,
            vec!["Repo exists", "Tests pass", "CI is green"]
        );
    }

    #[test]
    fn repeated_acceptance_label_contributes_only_its_value() {
        let block = [
            "- Acceptance Criteria: A",
            "- B",
            "- Acceptance Criteria: C",
            "- D",
        ];
        assert_eq!(extract_fields(&block).acceptance, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn acceptance_without_inline_value() {
        let block = ["- Acceptance Criteria:", "  - One", "  - Two"];
        assert_eq!(extract_fields(&block).acceptance, vec!["One", "Two"]);
    }

    #[test]
    fn acceptance_run_stops_at_blank_line() {
        let block = ["- Acceptance Criteria: First", "- Second", "", "- Not a criterion"];
        assert_eq!(extract_fields(&block).acceptance, vec!["First", "Second"]);
    }

    #[test]
    fn acceptance_run_stops_at_non_bullet_line() {
        let block = ["- Acceptance Criteria:", "- One", "Notes follow here", "- Two"];
        assert_eq!(extract_fields(&block).acceptance, vec!["One"]);
    }

    #[test]
    fn bullets_before_acceptance_label_are_not_criteria() {
        let block = ["- Description: d", "- Something else", "- Acceptance Criteria: Only"];
        let fields = extract_fields(&block);
        assert_eq!(fields.acceptance, vec!["Only"]);
        assert_eq!(fields.description, "d");
    }

    #[test]
    fn dash_only_criteria_are_dropped_and_others_trimmed() {
        let block = ["- Acceptance Criteria: -", "- ", "-- Nested dash", "- Ends with dash -"];
        assert_eq!(extract_fields(&block).acceptance, vec!["Nested dash", "Ends with dash"]);
    }

    #[test]
    fn field_bullets_after_acceptance_count_as_criteria_and_fields() {
        let block = ["- Acceptance Criteria: Works", "- Priority: Medium"];
        let fields = extract_fields(&block);
        assert_eq!(fields.acceptance, vec!["Works", "Priority: Medium"]);
        assert_eq!(fields.priority, "Medium");
    }
}
