//! Rendering of chapters into embeddable help text.

use crate::model::{Chapter, RenderedChapter};

use super::reflow::process_line_with_width;
use super::RenderOptions;

/// Render raw chapter lines into a single help-text string.
///
/// Image lines are dropped, every other line is escaped and wrapped, and all
/// segments are joined with the line-break token.
///
/// # Example
///
/// ```
/// use readme_help::render::{render_lines, RenderOptions};
///
/// let lines = ["First\n", "![shot](a.png)\n", "\n", "Second\n"];
/// let text = render_lines(&lines, &RenderOptions::default());
/// assert_eq!(text, "First\\n\\nSecond");
/// ```
pub fn render_lines<S: AsRef<str>>(lines: &[S], options: &RenderOptions) -> String {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !options.is_image_line(line))
        .flat_map(|line| process_line_with_width(line, options.width))
        .collect::<Vec<_>>()
        .join(&options.line_break)
}

/// Render an extracted chapter, labelled by its heading.
pub fn render_chapter(chapter: &Chapter, options: &RenderOptions) -> RenderedChapter {
    let text = render_lines(&chapter.lines, options);
    log::debug!(
        "Rendered \"{}\": {} lines -> {} chars",
        chapter.heading,
        chapter.lines.len(),
        text.chars().count()
    );
    RenderedChapter::new(chapter.heading.clone(), text)
}
