//! Table of contents
//!
//! The TOC is a pure function of a heading list. Level-1 headings are skipped (they are the
//! document title); everything else is a flat list whose indentation is purely visual:
//! `(level - 2) * indent_px` pixels of left margin, no nested lists.

use crate::markup::Heading;

/// Presentation knobs for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Text of the `<h3>` heading above the list.
    pub title: String,
    /// Left margin per level below 2.
    pub indent_px: u32,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            title: "Table of Contents".to_string(),
            indent_px: 20,
        }
    }
}

/// Render a table of contents with the default options.
///
/// Returns an empty string for an empty heading list.
pub fn generate_table_of_contents(headings: &[Heading]) -> String {
    generate_table_of_contents_with(headings, &TocOptions::default())
}

pub fn generate_table_of_contents_with(headings: &[Heading], options: &TocOptions) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut toc = String::from("<div class=\"table-of-contents\">\n");
    toc.push_str(&format!("<h3>{}</h3>\n", options.title));
    toc.push_str("<ul>\n");

    for heading in headings.iter().filter(|heading| heading.level > 1) {
        let indent = u32::from(heading.level - 2) * options.indent_px;
        toc.push_str(&format!("<li style=\"margin-left: {indent}px;\">\n"));
        toc.push_str(&format!("<a href=\"#{}\">{}</a>\n", heading.id, heading.text));
        toc.push_str("</li>\n");
    }

    toc.push_str("</ul>\n</div>\n");
    toc
}
