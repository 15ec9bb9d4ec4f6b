//! Line-oriented source document.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A text document held as an ordered sequence of lines.
///
/// Every line keeps its trailing `\n` (the last line may lack one), so
/// concatenating the lines reproduces the normalized input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines, keeping line terminators.
    ///
    /// `\r\n` is normalized to `\n` before splitting.
    pub fn parse(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        let lines = normalized
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    /// Wrap lines that already carry their terminators.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the document lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Mutable access to the lines, for in-place rewriting.
    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    /// Consume the document and return its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines back into a single string.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// List every heading line: a run of `marker` followed by a space and a label.
    pub fn headings(&self, marker: char) -> Vec<Heading> {
        let re = heading_regex();

        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let caps = re.captures(line)?;
                let run = &caps[1];
                if !run.chars().all(|c| c == marker) {
                    return None;
                }
                Some(Heading {
                    level: run.chars().count(),
                    label: caps[2].to_string(),
                    line: index,
                })
            })
            .collect()
    }
}

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"^(\S+) (.+?)\n?$").unwrap())
}

/// A heading found in a document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Nesting depth (number of marker characters)
    pub level: usize,

    /// Heading text after the marker run
    pub label: String,

    /// Zero-based line index
    pub line: usize,
}
