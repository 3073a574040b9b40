//! Metadata format: the lecture metadata block as pretty JSON.

use crate::error::FormatError;
use crate::format::Format;
use crate::metadata::extract_metadata;

pub struct MetadataFormat;

impl Format for MetadataFormat {
    fn name(&self) -> &str {
        "metadata"
    }

    fn description(&self) -> &str {
        "Lecture metadata (title, date, duration, instructor, course, objectives) as JSON"
    }

    fn serialize(&self, source: &str) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&extract_metadata(source))?)
    }
}
