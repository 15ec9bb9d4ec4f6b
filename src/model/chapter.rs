//! Chapter types.

use serde::{Deserialize, Serialize};

/// A chapter extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Heading label the chapter was found under
    pub heading: String,

    /// Heading level
    pub level: usize,

    /// Zero-based index of the heading line
    pub start_line: usize,

    /// Lines strictly between the heading and the terminating heading
    pub lines: Vec<String>,
}

impl Chapter {
    /// Check if the chapter has no content lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Chapter text ready to be embedded as a UI string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedChapter {
    /// Label used to locate the chapter in the target file
    pub label: String,

    /// Escaped, reflowed text joined with the line-break token
    pub text: String,
}

impl RenderedChapter {
    /// Create a rendered chapter.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}
