//! Format trait definition
//!
//! This module defines the Format trait that all output formats implement.
//! Every format takes lecture markup as input and produces text output.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// Implementors render lecture markup into one representation: an HTML fragment or page,
/// a table of contents, or a JSON view of the outline or metadata.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, source: &str) -> Result<String, FormatError> {
///         Ok(coursemark::convert(source).html)
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "toc")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used to pick a target format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render markup source into this format
    fn serialize(&self, source: &str) -> Result<String, FormatError>;

    /// Render markup source, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any option it is handed.
    fn serialize_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean option value the way the CLI spells booleans.
pub(crate) fn parse_bool_option(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::InvalidOption {
            key: key.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}
