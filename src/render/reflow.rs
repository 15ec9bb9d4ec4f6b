//! Quote escaping and fixed-width reflow of single lines.
//!
//! Wrapping is greedy and only breaks at whitespace. Widths are counted in
//! characters. A word longer than the width is never split; it gets a
//! segment of its own.

/// Default wrap width in characters.
pub const DEFAULT_WIDTH: usize = 180;

const TAB_SIZE: usize = 8;

/// Escape every `"` as `\"`.
pub fn escape_quotes(line: &str) -> String {
    line.replace('"', "\\\"")
}

/// Escape and wrap a line at the default width.
///
/// A blank line (just a newline) becomes a single empty segment so that
/// paragraph breaks survive the join.
///
/// # Example
///
/// ```
/// use readme_help::render::process_line;
///
/// assert_eq!(process_line("Say \"hi\"\n"), vec!["Say \\\"hi\\\"".to_string()]);
/// assert_eq!(process_line("\n"), vec![String::new()]);
/// ```
pub fn process_line(line: &str) -> Vec<String> {
    process_line_with_width(line, DEFAULT_WIDTH)
}

/// Escape and wrap a line at the given width.
pub fn process_line_with_width(line: &str, width: usize) -> Vec<String> {
    let escaped = escape_quotes(line);
    if escaped.chars().count() == 1 {
        return vec![String::new()];
    }
    wrap(&escaped, width)
}

/// Greedily wrap text into segments of at most `width` characters.
///
/// Tabs are expanded and all whitespace becomes spaces first. Leading
/// whitespace is kept on the first segment only; trailing whitespace is
/// dropped from every segment. Whitespace-only input yields no segments.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let normalized = normalize_whitespace(&expand_tabs(text));
    let mut chunks = split_chunks(&normalized);
    chunks.reverse();

    let mut segments: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0;

        if !segments.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(&chunk) = chunks.last() {
            let len = chunk.chars().count();
            if current_len + len > width {
                break;
            }
            current.push(chunk);
            current_len += len;
            chunks.pop();
        }

        // Over-long word: place it whole on an otherwise empty segment.
        if current.is_empty() {
            if let Some(chunk) = chunks.pop() {
                current.push(chunk);
            }
        }

        if current.last().is_some_and(|c| is_blank(c)) {
            current.pop();
        }

        if !current.is_empty() {
            segments.push(current.concat());
        }
    }

    segments
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}

fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

fn normalize_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| if is_space(c) { ' ' } else { c })
        .collect()
}

/// Split into alternating runs of spaces and non-spaces.
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (index, c) in text.char_indices() {
        let space = c == ' ';
        match in_space {
            Some(previous) if previous != space => {
                chunks.push(&text[start..index]);
                start = index;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"a "b" c"#), r#"a \"b\" c"#);
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn test_escaping_is_not_idempotent() {
        let once = escape_quotes("\"");
        let twice = escape_quotes(&once);
        assert_eq!(once, "\\\"");
        assert_eq!(twice, "\\\\\"");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_short_line_single_segment() {
        assert_eq!(
            process_line("Select a \"folder\" first.\n"),
            vec!["Select a \\\"folder\\\" first."]
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(process_line("\n"), vec![""]);
    }

    #[test]
    fn test_single_char_without_newline_counts_as_blank() {
        // The blank check is a length check on the escaped line.
        assert_eq!(process_line("x"), vec![""]);
    }

    #[test]
    fn test_whitespace_only_line_yields_nothing() {
        assert!(process_line("   \n").is_empty());
        assert!(process_line("\t\n").is_empty());
    }

    #[test]
    fn test_wrap_at_width() {
        let words = vec!["word"; 50].join(" ");
        let segments = process_line(&format!("{}\n", words));

        assert!(segments.len() > 1);
        for segment in &segments {
            assert!(segment.chars().count() <= DEFAULT_WIDTH);
            assert!(!segment.starts_with(' '));
            assert!(!segment.ends_with(' '));
        }
        assert_eq!(segments.join(" "), words);
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap("aaa bbb", 7), vec!["aaa bbb"]);
        assert_eq!(wrap("aaa bbb", 6), vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_long_word_not_split() {
        let long = "x".repeat(20);
        assert_eq!(
            wrap(&format!("a {} b", long), 10),
            vec!["a".to_string(), long, "b".to_string()]
        );
    }

    #[test]
    fn test_keeps_first_segment_indent() {
        assert_eq!(wrap("  - item one two", 9), vec!["  - item", "one two"]);
    }

    #[test]
    fn test_keeps_inner_spacing() {
        assert_eq!(wrap("a  b", 10), vec!["a  b"]);
    }

    #[test]
    fn test_tabs_expand() {
        assert_eq!(wrap("a\tb", 20), vec!["a       b"]);
    }

    #[test]
    fn test_width_counts_characters() {
        // Four emoji fit a width of four even though they take 16 bytes.
        assert_eq!(wrap("📷📹📅💾 x", 4), vec!["📷📹📅💾", "x"]);
    }

    #[test]
    fn test_split_chunks() {
        assert_eq!(split_chunks("ab  cd "), vec!["ab", "  ", "cd", " "]);
        assert!(split_chunks("").is_empty());
    }
}
