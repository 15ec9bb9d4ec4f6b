//! Rendering module for turning chapter lines into embeddable help text.

mod chapter;
mod json;
mod options;
mod reflow;

pub use chapter::{render_chapter, render_lines};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_IMAGE_PREFIX, DEFAULT_LINE_BREAK};
pub use reflow::{escape_quotes, process_line, process_line_with_width, wrap, DEFAULT_WIDTH};
