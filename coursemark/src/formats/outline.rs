//! Outline format
//!
//! The heading list as pretty JSON: `[{"text", "level", "id"}, ...]` in source order. This is
//! the contract a document exporter consumes; it estimates page numbers on its own.

use crate::error::FormatError;
use crate::format::Format;
use crate::markup::convert;

pub struct OutlineFormat;

impl Format for OutlineFormat {
    fn name(&self) -> &str {
        "outline"
    }

    fn description(&self) -> &str {
        "Heading outline as JSON (text, level, id)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, source: &str) -> Result<String, FormatError> {
        let conversion = convert(source);
        Ok(serde_json::to_string_pretty(&conversion.headings)?)
    }
}
