//! Options for a complete README-to-help run.

use crate::extract::DEFAULT_MARKER;
use crate::inject::InjectOptions;
use crate::render::RenderOptions;

/// Chapters copied into the help screen by default.
pub const DEFAULT_CHAPTERS: [&str; 4] = ["📷 📹 Images", "📅 Events", "💾 Sieve", "⚙ Settings"];

/// Heading level of the default chapters.
pub const DEFAULT_LEVEL: usize = 3;

/// Options for extracting, rendering and injecting help chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOptions {
    /// Chapter headings to extract, in injection order
    pub chapters: Vec<String>,

    /// Heading level shared by all chapters
    pub level: usize,

    /// Heading marker character
    pub marker: char,

    /// Rendering options
    pub render: RenderOptions,

    /// Injection options
    pub inject: InjectOptions,
}

impl HelpOptions {
    /// Create new help options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chapter list.
    pub fn with_chapters<I, S>(mut self, chapters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chapters = chapters.into_iter().map(Into::into).collect();
        self
    }

    /// Append a chapter.
    pub fn add_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapters.push(chapter.into());
        self
    }

    /// Set the heading level.
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Set the heading marker.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Set the wrap width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.render = self.render.with_width(width);
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set injection options.
    pub fn with_inject_options(mut self, options: InjectOptions) -> Self {
        self.inject = options;
        self
    }
}

impl Default for HelpOptions {
    fn default() -> Self {
        Self {
            chapters: DEFAULT_CHAPTERS.iter().map(|c| c.to_string()).collect(),
            level: DEFAULT_LEVEL,
            marker: DEFAULT_MARKER,
            render: RenderOptions::default(),
            inject: InjectOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_options_defaults() {
        let options = HelpOptions::default();
        assert_eq!(options.chapters.len(), 4);
        assert_eq!(options.chapters[1], "📅 Events");
        assert_eq!(options.level, 3);
        assert_eq!(options.marker, '#');
        assert_eq!(options.render.width, 180);
    }

    #[test]
    fn test_help_options_builder() {
        let options = HelpOptions::new()
            .with_chapters(["Install"])
            .add_chapter("Usage")
            .with_level(2)
            .with_width(72);

        assert_eq!(options.chapters, vec!["Install", "Usage"]);
        assert_eq!(options.level, 2);
        assert_eq!(options.render.width, 72);
    }
}
