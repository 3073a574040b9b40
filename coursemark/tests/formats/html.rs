//! Export tests for the HTML format (markup → HTML page)

use crate::common::load_fixture;
use coursemark::format::Format;
use coursemark::formats::html::{HtmlFormat, HtmlOptions, HtmlTheme};
use coursemark::FormatRegistry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

fn page(source: &str, options: HtmlOptions) -> String {
    HtmlFormat::new(options).serialize(source).unwrap()
}

fn standalone() -> HtmlOptions {
    HtmlOptions {
        standalone: true,
        ..HtmlOptions::default()
    }
}

fn without_styles(html: &str) -> String {
    static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex for stripping style blocks")
    });
    STYLE_REGEX.replace_all(html, "<style/>").into_owned()
}

#[test]
fn test_lecture_page_structure() {
    let html = page(&load_fixture("lecture.md"), standalone());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Descriptive Statistics</title>"));
    assert!(html.contains("<meta name=\"generator\" content=\"coursemark\">"));
    assert!(html.contains("<article class=\"lecture-content\">"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_lecture_page_header_then_toc_then_content() {
    let html = without_styles(&page(&load_fixture("lecture.md"), standalone()));

    let header = html.find("<header class=\"lecture-header\">").unwrap();
    let toc = html.find("<div class=\"table-of-contents\">").unwrap();
    let title = html.find("<h1 id=\"descriptive-statistics\">").unwrap();
    assert!(header < toc);
    assert!(toc < title);

    assert!(html.contains("<p class=\"lecture-course\">BA 101 Business Analytics</p>"));
    assert!(html.contains("<dt>Duration:</dt><dd>90 minutes</dd>"));
    assert!(html.contains("<dt>Instructor:</dt><dd>Dr. Amara Lindqvist</dd>"));
}

#[test]
fn test_lecture_toc_entries() {
    let html = page(&load_fixture("lecture.md"), standalone());

    assert!(html.contains(
        "<li style=\"margin-left: 0px;\">\n<a href=\"#measures-of-centre\">Measures of Centre</a>\n</li>"
    ));
    assert!(html.contains(
        "<li style=\"margin-left: 20px;\">\n<a href=\"#computing-in-python\">Computing in Python</a>\n</li>"
    ));
    assert!(!html.contains("href=\"#descriptive-statistics\""));
}

#[test]
fn test_theme_css_is_embedded() {
    let serif = page(
        "# T\n",
        HtmlOptions {
            theme: HtmlTheme::Serif,
            ..standalone()
        },
    );
    let modern = page("# T\n", standalone());

    assert!(serif.contains("Georgia"));
    assert!(!modern.contains("Georgia"));
    assert!(modern.contains(coursemark::formats::get_default_css()));
}

#[test]
fn test_registry_passes_options_through() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "true".to_string());
    options.insert("toc".to_string(), "false".to_string());
    options.insert("theme".to_string(), "serif".to_string());

    let html = registry
        .serialize_with_options("# T\n## A\n", "html", &options)
        .unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("table-of-contents"));
    assert!(html.contains("Georgia"));
}
