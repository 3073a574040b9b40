//! HTML serialization (markup → HTML)
//!
//! Pipeline: markup → [`crate::convert`] → fragment, then optionally wrapped into a page
//! together with the metadata header and the table of contents.

use crate::formats::html::HtmlTheme;
use crate::markup::{convert, Conversion};
use crate::metadata::{extract_metadata, LectureMetadata};
use crate::outline::{generate_table_of_contents_with, TocOptions};

const FALLBACK_TITLE: &str = "Lecture Notes";

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragment into a complete HTML document
    pub standalone: bool,
    /// Put the table of contents above the content (standalone only)
    pub toc: bool,
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Optional custom CSS to append after the baseline and theme CSS
    pub custom_css: Option<String>,
    pub toc_options: TocOptions,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            toc: true,
            theme: HtmlTheme::Modern,
            custom_css: None,
            toc_options: TocOptions::default(),
        }
    }
}

impl HtmlOptions {
    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize markup to HTML with the given options
pub fn serialize_to_html(source: &str, options: &HtmlOptions) -> String {
    let conversion = convert(source);
    if !options.standalone {
        return conversion.html;
    }

    let metadata = extract_metadata(source);
    wrap_in_document(&conversion, &metadata, options)
}

fn wrap_in_document(
    conversion: &Conversion,
    metadata: &LectureMetadata,
    options: &HtmlOptions,
) -> String {
    let baseline_css = super::get_default_css();
    let theme_css = match options.theme {
        HtmlTheme::Serif => include_str!("../../../css/themes/theme-serif.css"),
        HtmlTheme::Modern => include_str!("../../../css/themes/theme-modern.css"),
    };
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    let title = if !metadata.title.is_empty() {
        metadata.title.as_str()
    } else {
        conversion.title().unwrap_or(FALLBACK_TITLE)
    };
    let escaped_title = html_escape(title);

    let header = lecture_header(metadata);
    let toc = if options.toc {
        generate_table_of_contents_with(&conversion.headings, &options.toc_options)
    } else {
        String::new()
    };
    let body_html = &conversion.html;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="coursemark">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{theme_css}
{custom_css}
  </style>
</head>
<body>
{header}<article class="lecture-content">
{toc}{body_html}</article>
</body>
</html>
"#
    )
}

/// Header block drawn above the lecture: course, title and the non-empty detail rows.
fn lecture_header(metadata: &LectureMetadata) -> String {
    let details = [
        ("Date", &metadata.date),
        ("Duration", &metadata.duration),
        ("Instructor", &metadata.instructor),
    ];
    let has_details = details.iter().any(|(_, value)| !value.is_empty());

    if metadata.course.is_empty() && metadata.title.is_empty() && !has_details {
        return String::new();
    }

    let mut header = String::from("<header class=\"lecture-header\">\n");
    if !metadata.course.is_empty() {
        header.push_str(&format!(
            "<p class=\"lecture-course\">{}</p>\n",
            html_escape(&metadata.course)
        ));
    }
    if !metadata.title.is_empty() {
        header.push_str(&format!(
            "<p class=\"lecture-title\">{}</p>\n",
            html_escape(&metadata.title)
        ));
    }
    if has_details {
        header.push_str("<dl class=\"lecture-details\">\n");
        for (label, value) in details.iter().filter(|(_, value)| !value.is_empty()) {
            header.push_str(&format!(
                "<dt>{label}:</dt><dd>{}</dd>\n",
                html_escape(value)
            ));
        }
        header.push_str("</dl>\n");
    }
    header.push_str("</header>\n");
    header
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
