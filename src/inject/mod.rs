//! Section injection into UI description files.
//!
//! For each chapter the first line containing its label is located, then
//! the first following line containing the assignment marker is replaced
//! by a generated `Text { text: "...";` line. A chapter whose label or
//! assignment line is missing is skipped and listed in the report; the
//! run never fails because of it.
//!
//! # Example
//!
//! ```
//! use readme_help::inject::{inject, InjectOptions};
//! use readme_help::RenderedChapter;
//!
//! let mut lines: Vec<String> = vec![
//!     "    // 📅 Events\n".into(),
//!     "    Text { text: \"old\";\n".into(),
//! ];
//! let chapters = [RenderedChapter::new("📅 Events", "Line one")];
//! let report = inject(&mut lines, &chapters, &InjectOptions::default());
//!
//! assert!(report.is_complete());
//! assert_eq!(lines[1], "            Text { text: \"Line one\";\n");
//! ```

mod options;
mod report;

pub use options::{InjectOptions, DEFAULT_ASSIGNMENT_MARKER, DEFAULT_INDENT};
pub use report::{InjectReport, Injection, SkipReason, SkippedChapter};

use crate::model::{Document, RenderedChapter};
use crate::util::{find_first, find_first_from};

/// Inject rendered chapters into target lines in place.
pub fn inject(
    lines: &mut [String],
    chapters: &[RenderedChapter],
    options: &InjectOptions,
) -> InjectReport {
    let mut report = InjectReport::new();

    for chapter in chapters {
        match inject_one(lines, chapter, options) {
            Ok(injection) => report.injected.push(injection),
            Err(reason) => {
                log::warn!("Skipping {}: {}", chapter.label, reason);
                report.skipped.push(SkippedChapter {
                    label: chapter.label.clone(),
                    reason,
                });
            }
        }
    }

    report
}

/// Inject rendered chapters into a target document.
pub fn inject_document(
    document: &mut Document,
    chapters: &[RenderedChapter],
    options: &InjectOptions,
) -> InjectReport {
    inject(document.lines_mut(), chapters, options)
}

fn inject_one(
    lines: &mut [String],
    chapter: &RenderedChapter,
    options: &InjectOptions,
) -> std::result::Result<Injection, SkipReason> {
    let label_line = find_first(lines, |line| line.contains(chapter.label.as_str()))
        .ok_or(SkipReason::LabelNotFound)?;
    log::info!("Found {} at line {}", chapter.label, label_line);

    let text_line = find_first_from(lines, label_line + 1, |line| {
        line.contains(options.assignment_marker.as_str())
    })
    .ok_or(SkipReason::NoAssignment { label_line })?;
    log::info!("Inserting text at line {}", text_line);

    lines[text_line] = options.replacement_line(&chapter.text);

    Ok(Injection {
        label: chapter.label.clone(),
        label_line,
        text_line,
    })
}
