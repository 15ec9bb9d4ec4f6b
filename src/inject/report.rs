//! Outcome of an injection run.

use serde::{Deserialize, Serialize};

/// Which chapters were written and which were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectReport {
    /// Chapters written into the target
    pub injected: Vec<Injection>,

    /// Chapters left out, with the reason
    pub skipped: Vec<SkippedChapter>,
}

impl InjectReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no chapter was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Labels of skipped chapters, in processing order.
    pub fn unmatched_labels(&self) -> Vec<&str> {
        self.skipped.iter().map(|s| s.label.as_str()).collect()
    }
}

/// A chapter that replaced an assignment line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injection {
    /// Chapter label
    pub label: String,

    /// Zero-based line index of the label marker
    pub label_line: usize,

    /// Zero-based line index of the replaced line
    pub text_line: usize,
}

/// A chapter that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedChapter {
    /// Chapter label
    pub label: String,

    /// Why the chapter was skipped
    pub reason: SkipReason,
}

/// Reason a chapter was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// No line contains the label
    LabelNotFound,

    /// The label was found but no assignment line follows it
    NoAssignment {
        /// Zero-based line index of the label marker
        label_line: usize,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::LabelNotFound => write!(f, "label not found"),
            SkipReason::NoAssignment { label_line } => {
                write!(f, "no text line after label at line {}", label_line)
            }
        }
    }
}
