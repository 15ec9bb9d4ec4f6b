//! Injection options.

/// Substring identifying the attribute line that receives the text.
pub const DEFAULT_ASSIGNMENT_MARKER: &str = "text:";

/// Indentation of the generated assignment line.
pub const DEFAULT_INDENT: &str = "            ";

/// Options controlling how chapters are written into the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectOptions {
    /// Substring marking the line to replace
    pub assignment_marker: String,

    /// Leading whitespace of the generated line
    pub indent: String,
}

impl InjectOptions {
    /// Create new inject options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assignment marker.
    pub fn with_assignment_marker(mut self, marker: impl Into<String>) -> Self {
        self.assignment_marker = marker.into();
        self
    }

    /// Set the indentation of generated lines.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Build the line that replaces the assignment line.
    pub fn replacement_line(&self, text: &str) -> String {
        format!("{}Text {{ text: \"{}\";\n", self.indent, text)
    }
}

impl Default for InjectOptions {
    fn default() -> Self {
        Self {
            assignment_marker: DEFAULT_ASSIGNMENT_MARKER.to_string(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}
