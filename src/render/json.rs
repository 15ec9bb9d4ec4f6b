//! JSON rendering for reports and outlines.

use crate::error::Result;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any report type to JSON.
pub fn to_json<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
        JsonFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RenderedChapter;

    #[test]
    fn test_to_json_pretty() {
        let chapter = RenderedChapter::new("💾 Sieve", "Text");
        let json = to_json(&chapter, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"label\""));
        assert!(json.contains("💾 Sieve"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let chapter = RenderedChapter::new("💾 Sieve", "Text");
        let json = to_json(&chapter, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}
