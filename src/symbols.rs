//! Glyph list generation for subset fonts.
//!
//! The help text embeds emoji and other non-ASCII characters; the UI font
//! is subset to exactly the code points listed here.

use std::collections::BTreeSet;

/// Highest code point that never needs a listed glyph.
pub const ASCII_MAX: u32 = 127;

/// Collect every distinct character above the ASCII range, in code point order.
///
/// # Example
///
/// ```
/// use readme_help::symbols::{collect_symbols, format_symbols};
///
/// let symbols = collect_symbols("Text { text: \"📅 Events ⚙\"; }");
/// assert_eq!(format_symbols(&symbols), "U+2699\nU+1F4C5");
/// ```
pub fn collect_symbols(text: &str) -> BTreeSet<char> {
    text.chars().filter(|&c| u32::from(c) > ASCII_MAX).collect()
}

/// Format symbols as `U+XXXX` lines, without a trailing newline.
pub fn format_symbols(symbols: &BTreeSet<char>) -> String {
    symbols
        .iter()
        .map(|&c| format!("U+{:X}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("\n")
}
