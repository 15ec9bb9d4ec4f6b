//! Chapter extraction from heading-structured documents.
//!
//! A chapter starts after an exact heading line and ends before the first
//! following line that starts with the marker repeated `level` or
//! `level - 1` times. Both prefixes are plain `starts_with` checks on the
//! raw line, so a deeper heading whose marker run begins with either
//! prefix also ends the chapter, and at level 1 the empty `level - 1`
//! prefix ends the chapter at the very next line.

use crate::error::{Error, Result};
use crate::model::{Chapter, Document};
use crate::util::{find_first, find_first_from};

/// Default heading marker character.
pub const DEFAULT_MARKER: char = '#';

/// Build the exact line a heading must match, including the trailing newline.
pub fn heading_line(marker: char, level: usize, heading: &str) -> String {
    format!("{} {}\n", marker_run(marker, level), heading)
}

fn marker_run(marker: char, count: usize) -> String {
    std::iter::repeat(marker).take(count).collect()
}

/// Get the lines of the chapter under `heading` at `level`, using `#` as marker.
///
/// # Example
///
/// ```
/// use readme_help::extract::get_chapter;
///
/// let lines = ["# Title\n", "### 📅 Events\n", "Line one\n", "### Other\n"];
/// let chapter = get_chapter("📅 Events", 3, &lines).unwrap();
/// assert_eq!(chapter, vec!["Line one\n".to_string()]);
/// ```
pub fn get_chapter<S: AsRef<str>>(heading: &str, level: usize, lines: &[S]) -> Result<Vec<String>> {
    get_chapter_with_marker(DEFAULT_MARKER, heading, level, lines).map(|(_, lines)| lines)
}

/// Locate a chapter and return the heading line index and its content lines.
pub fn get_chapter_with_marker<S: AsRef<str>>(
    marker: char,
    heading: &str,
    level: usize,
    lines: &[S],
) -> Result<(usize, Vec<String>)> {
    if level == 0 {
        return Err(Error::InvalidLevel(level));
    }

    let target = heading_line(marker, level, heading);
    let start = find_first(lines, |line| line.as_ref() == target).ok_or_else(|| {
        Error::ChapterNotFound {
            heading: heading.to_string(),
            level,
        }
    })?;

    let same = marker_run(marker, level);
    let parent = marker_run(marker, level - 1);
    let end = find_first_from(lines, start + 1, |line| {
        let line = line.as_ref();
        line.starts_with(&same) || line.starts_with(&parent)
    })
    .unwrap_or(lines.len());

    log::debug!(
        "Chapter \"{}\" spans lines {}..{} (heading at {})",
        heading,
        start + 1,
        end,
        start
    );

    let content = lines[start + 1..end]
        .iter()
        .map(|line| line.as_ref().to_string())
        .collect();

    Ok((start, content))
}

/// Extract a chapter from a document.
pub fn extract_chapter(
    document: &Document,
    heading: &str,
    level: usize,
    marker: char,
) -> Result<Chapter> {
    let (start_line, lines) = get_chapter_with_marker(marker, heading, level, document.lines())?;
    Ok(Chapter {
        heading: heading.to_string(),
        level,
        start_line,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme() -> Vec<&'static str> {
        vec![
            "# Image Sieve\n",
            "Intro\n",
            "## Usage\n",
            "### 📷 📹 Images\n",
            "Images text\n",
            "\n",
            "### 📅 Events\n",
            "Events text\n",
            "#### Details\n",
            "Nested text\n",
            "### ⚙ Settings\n",
            "Settings text\n",
            "last line\n",
        ]
    }

    #[test]
    fn test_heading_line() {
        assert_eq!(heading_line('#', 3, "📅 Events"), "### 📅 Events\n");
        assert_eq!(heading_line('=', 1, "Top"), "= Top\n");
    }

    #[test]
    fn test_chapter_between_siblings() {
        let chapter = get_chapter("📷 📹 Images", 3, &readme()).unwrap();
        assert_eq!(chapter, vec!["Images text\n", "\n"]);
    }

    #[test]
    fn test_last_chapter_runs_to_end() {
        let chapter = get_chapter("⚙ Settings", 3, &readme()).unwrap();
        assert_eq!(chapter, vec!["Settings text\n", "last line\n"]);
    }

    #[test]
    fn test_adjacent_headings_give_empty_chapter() {
        let lines = ["### A\n", "### B\n"];
        assert!(get_chapter("A", 3, &lines).unwrap().is_empty());
    }

    #[test]
    fn test_parent_heading_terminates() {
        let lines = ["### A\n", "text\n", "## Parent\n", "more\n"];
        assert_eq!(get_chapter("A", 3, &lines).unwrap(), vec!["text\n"]);
    }

    #[test]
    fn test_deeper_heading_also_terminates() {
        // "####" starts with "###", so a nested heading ends the chapter.
        let chapter = get_chapter("📅 Events", 3, &readme()).unwrap();
        assert_eq!(chapter, vec!["Events text\n"]);
    }

    #[test]
    fn test_level_one_ends_at_next_line() {
        // The level-0 prefix is empty and matches every line.
        let chapter = get_chapter("Image Sieve", 1, &readme()).unwrap();
        assert!(chapter.is_empty());
    }

    #[test]
    fn test_chapter_before_sibling_heading() {
        let lines = ["# Title\n", "### 📅 Events\n", "Line one\n", "### Other\n"];
        assert_eq!(get_chapter("📅 Events", 3, &lines).unwrap(), vec!["Line one\n"]);
    }

    #[test]
    fn test_missing_heading() {
        let result = get_chapter("💾 Sieve", 3, &readme());
        assert!(matches!(
            result,
            Err(Error::ChapterNotFound { ref heading, level: 3 }) if heading == "💾 Sieve"
        ));
    }

    #[test]
    fn test_heading_requires_exact_level() {
        assert!(get_chapter("📅 Events", 2, &readme()).is_err());
    }

    #[test]
    fn test_heading_without_newline_is_not_matched() {
        let lines = ["### A"];
        assert!(get_chapter("A", 3, &lines).is_err());
    }

    #[test]
    fn test_invalid_level() {
        assert!(matches!(
            get_chapter("A", 0, &["A\n"]),
            Err(Error::InvalidLevel(0))
        ));
    }

    #[test]
    fn test_first_match_wins() {
        let lines = ["### A\n", "one\n", "### A\n", "two\n"];
        assert_eq!(get_chapter("A", 3, &lines).unwrap(), vec!["one\n"]);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let first = get_chapter("📷 📹 Images", 3, &readme()).unwrap();
        let second = get_chapter("📷 📹 Images", 3, &readme()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_chapter_from_document() {
        let doc = Document::from_lines(readme());
        let chapter = extract_chapter(&doc, "📅 Events", 3, '#').unwrap();
        assert_eq!(chapter.start_line, 6);
        assert_eq!(chapter.level, 3);
        assert_eq!(chapter.lines, vec!["Events text\n"]);
        assert!(!chapter.is_empty());
    }

    #[test]
    fn test_extract_empty_chapter() {
        let doc = Document::parse("### A\n### B\nb\n");
        let chapter = extract_chapter(&doc, "A", 3, '#').unwrap();
        assert!(chapter.is_empty());
        assert_eq!(chapter.start_line, 0);
    }
}
