//! Line classification for task documents.

use std::sync::OnceLock;

use regex::Regex;

static PHASE_HEADER: OnceLock<Regex> = OnceLock::new();
static TASK_HEADER: OnceLock<Regex> = OnceLock::new();

/// `## Phase <n> <dash> <title>`; the capture runs to the end of the line.
fn phase_header() -> &'static Regex {
    PHASE_HEADER.get_or_init(|| {
        Regex::new(r"^##\s*(Phase\s+\d+\s*[-–—]\s*.+)").expect("phase header pattern is valid")
    })
}

/// `<n>. T-<3 digits> <dash> <title>`.
fn task_header() -> &'static Regex {
    TASK_HEADER.get_or_init(|| {
        Regex::new(r"^\s*\d+\.\s*(T-\d{3})\s*[-–—]\s*(\S.*?)\s*$")
            .expect("task header pattern is valid")
    })
}

/// The kind of a single line in a task document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A phase heading; holds the full `Phase N — Title` text.
    PhaseHeader(&'a str),
    /// A numbered task header.
    TaskHeader {
        /// The `T-###` identifier.
        id: &'a str,
        /// The trimmed title after the separator.
        title: &'a str,
    },
    /// Anything else, blank lines included.
    Other,
}

impl LineKind<'_> {
    /// Returns `true` for phase and task headers, which end a task block.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::PhaseHeader(_) | Self::TaskHeader { .. })
    }
}

/// Classifies one line.
///
/// Near misses such as `T-12` or a header with no title are [`LineKind::Other`].
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(text) = phase_header().captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::PhaseHeader(text.as_str().trim_end());
    }
    if let Some(caps) = task_header().captures(line) {
        if let (Some(id), Some(title)) = (caps.get(1), caps.get(2)) {
            return LineKind::TaskHeader { id: id.as_str(), title: title.as_str() };
        }
    }
    LineKind::Other
}
