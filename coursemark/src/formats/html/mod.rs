//! HTML format implementation
//!
//! By default the output is the bare fragment produced by [`crate::convert`]: block elements
//! separated by newlines, no `<html>`/`<body>` wrapper. That is what a lecture page embeds.
//!
//! With `standalone=true` the fragment is wrapped into a complete HTML5 document:
//!
//! - `<title>` from the lecture metadata title, falling back to the first level-1 heading
//! - a lecture header (course, title, date, duration, instructor) from the metadata block
//! - the table of contents above the content unless `toc=false`
//! - embedded CSS: `css/baseline.css`, then the theme, then any custom CSS
//!
//! # Options
//!
//! | Key          | Values                  | Default    |
//! |--------------|-------------------------|------------|
//! | `standalone` | boolean                 | `false`    |
//! | `toc`        | boolean                 | `true`     |
//! | `theme`      | `modern`, `serif`       | `modern`   |
//! | `css-path`   | path to a CSS file      | none       |
//!
//! Unknown theme names fall back to `modern`.

mod serializer;

pub use serializer::{serialize_to_html, HtmlOptions};

use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use std::collections::HashMap;
use std::fs;

/// Available CSS themes for standalone pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlTheme {
    /// Baseline only (no overrides)
    #[default]
    Modern,
    /// Serif typography override
    Serif,
}

impl HtmlTheme {
    /// Parse a theme name, falling back to [`HtmlTheme::Modern`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "serif" | "fancy-serif" => HtmlTheme::Serif,
            "modern" | "default" => HtmlTheme::Modern,
            other => {
                tracing::warn!(theme = other, "unknown HTML theme, using modern");
                HtmlTheme::Modern
            }
        }
    }
}

/// The baseline stylesheet embedded into standalone pages.
pub fn get_default_css() -> &'static str {
    include_str!("../../../css/baseline.css")
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// HTML format that wraps the fragment into a full page.
    pub fn standalone() -> Self {
        Self::new(HtmlOptions {
            standalone: true,
            ..HtmlOptions::default()
        })
    }

    fn options_with(&self, params: &HashMap<String, String>) -> Result<HtmlOptions, FormatError> {
        let mut options = self.options.clone();
        for (key, value) in params {
            match key.as_str() {
                "standalone" => options.standalone = parse_bool_option(key, value)?,
                "toc" => options.toc = parse_bool_option(key, value)?,
                "theme" => options.theme = HtmlTheme::from_name(value),
                "css-path" | "css" => {
                    let css = fs::read_to_string(value).map_err(|err| {
                        FormatError::InvalidOption {
                            key: key.clone(),
                            reason: format!("cannot read '{value}': {err}"),
                        }
                    })?;
                    options.custom_css = Some(css);
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' has no option '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment, or a standalone page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, source: &str) -> Result<String, FormatError> {
        Ok(serialize_to_html(source, &self.options))
    }

    fn serialize_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options_with(options)?;
        Ok(serialize_to_html(source, &options))
    }
}
