//! Integration tests for the extract -> reflow -> inject pipeline on in-memory lines.

use readme_help::extract::get_chapter;
use readme_help::inject::{inject, InjectOptions};
use readme_help::render::{render_lines, RenderOptions};
use readme_help::RenderedChapter;

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_events_end_to_end() {
    let readme = ["# Title\n", "### 📅 Events\n", "Line one\n", "### Other\n"];
    let chapter = get_chapter("📅 Events", 3, &readme).unwrap();
    assert_eq!(chapter, vec!["Line one\n"]);

    let text = render_lines(&chapter, &RenderOptions::default());
    let mut target = owned(&[
        "Tab {\n",
        "    title: \"📅 Events\";\n",
        "    VerticalBox {\n",
        "        Text { text: \"\";\n",
        "    }\n",
        "}\n",
    ]);
    let before = target.clone();

    let report = inject(
        &mut target,
        &[RenderedChapter::new("📅 Events", text)],
        &InjectOptions::default(),
    );

    assert!(report.is_complete());
    assert_eq!(target[3], "            Text { text: \"Line one\";\n");
    for index in [0, 1, 2, 4, 5] {
        assert_eq!(target[index], before[index]);
    }
}

#[test]
fn test_every_sibling_chapter_is_disjoint() {
    let readme = [
        "## Usage\n",
        "### A\n",
        "a1\n",
        "a2\n",
        "### B\n",
        "b1\n",
        "### C\n",
        "c1\n",
    ];

    let a = get_chapter("A", 3, &readme).unwrap();
    let b = get_chapter("B", 3, &readme).unwrap();
    let c = get_chapter("C", 3, &readme).unwrap();

    assert_eq!(a, vec!["a1\n", "a2\n"]);
    assert_eq!(b, vec!["b1\n"]);
    assert_eq!(c, vec!["c1\n"]);
}

#[test]
fn test_long_paragraph_is_wrapped_and_joined() {
    let sentence = "The sieve copies every image marked as taken into the target folder. ";
    let paragraph = format!("{}\n", sentence.repeat(5).trim_end());
    let lines = vec![paragraph];

    let text = render_lines(&lines, &RenderOptions::default());
    let segments: Vec<&str> = text.split("\\n").collect();

    assert!(segments.len() >= 2);
    assert!(segments.iter().all(|s| s.chars().count() <= 180));
    assert_eq!(segments.join(" "), sentence.repeat(5).trim_end());
}

#[test]
fn test_unknown_label_is_noop() {
    let mut target = owned(&["Text { text: \"keep\";\n"]);
    let before = target.clone();

    let report = inject(
        &mut target,
        &[RenderedChapter::new("⚙ Settings", "new")],
        &InjectOptions::default(),
    );

    assert_eq!(target, before);
    assert_eq!(report.unmatched_labels(), vec!["⚙ Settings"]);
}
