//! Table of contents format
//!
//! Renders only the TOC block for a document. Useful when the page around the lecture is
//! assembled elsewhere and the TOC goes into a sidebar.

use crate::error::FormatError;
use crate::format::Format;
use crate::markup::convert;
use crate::outline::{generate_table_of_contents_with, TocOptions};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TocFormat {
    options: TocOptions,
}

impl TocFormat {
    pub fn new(options: TocOptions) -> Self {
        Self { options }
    }
}

impl Format for TocFormat {
    fn name(&self) -> &str {
        "toc"
    }

    fn description(&self) -> &str {
        "Table of contents block built from the headings"
    }

    fn serialize(&self, source: &str) -> Result<String, FormatError> {
        let conversion = convert(source);
        Ok(generate_table_of_contents_with(
            &conversion.headings,
            &self.options,
        ))
    }

    fn serialize_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut toc = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "toc-title" => toc.title = value.clone(),
                "toc-indent" => {
                    toc.indent_px = value.parse().map_err(|_| FormatError::InvalidOption {
                        key: key.clone(),
                        reason: format!("expected a pixel count, got '{value}'"),
                    })?
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'toc' has no option '{other}'"
                    )))
                }
            }
        }
        TocFormat::new(toc).serialize(source)
    }
}
