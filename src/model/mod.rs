//! Document model types.
//!
//! A README and a UI description file are both plain line sequences; the
//! chapter types carry the extracted and rendered text between stages.

mod chapter;
mod document;

pub use chapter::{Chapter, RenderedChapter};
pub use document::{Document, Heading};
