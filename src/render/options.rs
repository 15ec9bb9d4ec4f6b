//! Rendering options and configuration.

use super::reflow::DEFAULT_WIDTH;

/// Literal two-character line break understood by the UI string parser.
pub const DEFAULT_LINE_BREAK: &str = "\\n";

/// Lines starting with this prefix are image references and are dropped.
pub const DEFAULT_IMAGE_PREFIX: &str = "![";

/// Options for rendering chapter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum segment width in characters
    pub width: usize,

    /// Token placed between rendered segments
    pub line_break: String,

    /// Prefix identifying image-reference lines
    pub image_prefix: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width (at least 1).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Set the line-break token.
    pub fn with_line_break(mut self, token: impl Into<String>) -> Self {
        self.line_break = token.into();
        self
    }

    /// Set the image-reference prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_prefix = prefix.into();
        self
    }

    /// Check if a raw line is an image reference.
    pub fn is_image_line(&self, line: &str) -> bool {
        !self.image_prefix.is_empty() && line.starts_with(&self.image_prefix)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            line_break: DEFAULT_LINE_BREAK.to_string(),
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
        }
    }
}
