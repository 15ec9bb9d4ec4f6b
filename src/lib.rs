//! # readme-help
//!
//! Build-time helpers that keep an application's help screen in sync with
//! its README.
//!
//! Selected README chapters are extracted, quote-escaped, wrapped and joined
//! into single-line string literals, then written into the `Text { text: ...`
//! lines of a UI description file. A second helper lists the non-ASCII
//! glyphs a UI file uses so its font can be subset.
//!
//! ## Quick Start
//!
//! ```no_run
//! use readme_help::{generate_help, HelpOptions};
//!
//! fn main() -> readme_help::Result<()> {
//!     let report = generate_help("README.md", "ui/help.slint", &HelpOptions::default())?;
//!     for label in report.unmatched_labels() {
//!         eprintln!("not injected: {}", label);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Chapter extraction**: heading-bounded sections of a Markdown-like file
//! - **Reflow**: quote escaping and greedy word wrapping at a fixed width
//! - **Injection**: in-place replacement of UI text assignments, with a report
//! - **Glyph lists**: sorted `U+XXXX` code points for font subsetting

pub mod error;
pub mod extract;
pub mod inject;
pub mod model;
pub mod options;
pub mod render;
pub mod symbols;
pub mod util;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{extract_chapter, get_chapter};
pub use inject::{inject, InjectOptions, InjectReport, Injection, SkipReason, SkippedChapter};
pub use model::{Chapter, Document, Heading, RenderedChapter};
pub use options::{HelpOptions, DEFAULT_CHAPTERS, DEFAULT_LEVEL};
pub use render::{process_line, JsonFormat, RenderOptions};

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Read a text file into a line-oriented document.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = fs::read_to_string(path)?;
    Ok(Document::parse(&text))
}

/// Extract and render every configured chapter of a document.
///
/// The first missing heading aborts the whole call.
///
/// # Example
///
/// ```
/// use readme_help::{render_help, Document, HelpOptions};
///
/// let doc = Document::parse("# App\n### Usage\nRun \"app\".\n### Other\n");
/// let options = HelpOptions::new().with_chapters(["Usage"]);
/// let chapters = render_help(&doc, &options).unwrap();
/// assert_eq!(chapters[0].text, "Run \\\"app\\\".");
/// ```
pub fn render_help(document: &Document, options: &HelpOptions) -> Result<Vec<RenderedChapter>> {
    options
        .chapters
        .iter()
        .map(|heading| {
            let chapter = extract_chapter(document, heading, options.level, options.marker)?;
            if chapter.is_empty() {
                log::warn!("Chapter \"{}\" has no content", heading);
            }
            Ok(render::render_chapter(&chapter, &options.render))
        })
        .collect()
}

/// Render chapters from README text and inject them into target text.
///
/// Returns the rewritten target text and the injection report.
pub fn generate_help_text(
    readme: &str,
    target: &str,
    options: &HelpOptions,
) -> Result<(String, InjectReport)> {
    let chapters = render_help(&Document::parse(readme), options)?;
    let mut target = Document::parse(target);
    let report = inject::inject_document(&mut target, &chapters, &options.inject);
    Ok((target.to_text(), report))
}

/// Render chapters from a README file and inject them into a UI file in place.
///
/// The target is only read and rewritten after every chapter rendered.
pub fn generate_help<P: AsRef<Path>, Q: AsRef<Path>>(
    readme_path: P,
    target_path: Q,
    options: &HelpOptions,
) -> Result<InjectReport> {
    ReadmeHelp::with_options(options.clone())
        .load(readme_path)?
        .inject_file(target_path)
}

/// Scan a UI file for non-ASCII characters and write the glyph list.
///
/// # Example
///
/// ```no_run
/// let symbols = readme_help::write_symbols("ui/help.slint", "ui/fonts/symbols.txt").unwrap();
/// println!("{} glyphs", symbols.len());
/// ```
pub fn write_symbols<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<BTreeSet<char>> {
    let text = fs::read_to_string(input)?;
    let symbols = symbols::collect_symbols(&text);
    fs::write(output, symbols::format_symbols(&symbols))?;
    log::info!("Wrote {} symbols", symbols.len());
    Ok(symbols)
}

/// Builder for rendering README chapters and injecting them.
///
/// # Example
///
/// ```no_run
/// use readme_help::ReadmeHelp;
///
/// let report = ReadmeHelp::new()
///     .with_chapters(["📅 Events", "💾 Sieve"])
///     .with_width(120)
///     .load("README.md")?
///     .inject_file("ui/help.slint")?;
/// # Ok::<(), readme_help::Error>(())
/// ```
pub struct ReadmeHelp {
    options: HelpOptions,
}

impl ReadmeHelp {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: HelpOptions::default(),
        }
    }

    /// Create a builder from existing options.
    pub fn with_options(options: HelpOptions) -> Self {
        Self { options }
    }

    /// Set the chapters to extract.
    pub fn with_chapters<I, S>(mut self, chapters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_chapters(chapters);
        self
    }

    /// Set the heading level.
    pub fn with_level(mut self, level: usize) -> Self {
        self.options = self.options.with_level(level);
        self
    }

    /// Set the wrap width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.options = self.options.with_width(width);
        self
    }

    /// Render chapters from a README file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<HelpResult> {
        let document = read_document(path)?;
        self.render(&document)
    }

    /// Render chapters from README text.
    pub fn load_str(self, readme: &str) -> Result<HelpResult> {
        self.render(&Document::parse(readme))
    }

    fn render(self, document: &Document) -> Result<HelpResult> {
        let chapters = render_help(document, &self.options)?;
        Ok(HelpResult {
            chapters,
            options: self.options,
        })
    }
}

impl Default for ReadmeHelp {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered chapters ready for injection.
pub struct HelpResult {
    /// Rendered chapters in configured order
    pub chapters: Vec<RenderedChapter>,
    options: HelpOptions,
}

impl HelpResult {
    /// Inject into target text, returning the new text and the report.
    pub fn inject_str(&self, target: &str) -> (String, InjectReport) {
        let mut document = Document::parse(target);
        let report = inject::inject_document(&mut document, &self.chapters, &self.options.inject);
        (document.to_text(), report)
    }

    /// Inject into a target file, rewriting it in place.
    pub fn inject_file<P: AsRef<Path>>(&self, path: P) -> Result<InjectReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let (updated, report) = self.inject_str(&text);
        fs::write(path, updated)?;
        Ok(report)
    }

    /// Serialize the rendered chapters to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.chapters, format)
    }

    /// Find a rendered chapter by label.
    pub fn chapter(&self, label: &str) -> Option<&RenderedChapter> {
        self.chapters.iter().find(|c| c.label == label)
    }
}
