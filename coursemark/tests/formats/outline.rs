//! Outline, TOC and metadata formats through the registry.

use crate::common::load_fixture;
use coursemark::{FormatRegistry, Heading, LectureMetadata};

#[test]
fn test_outline_json_for_lecture() {
    let registry = FormatRegistry::default();
    let json = registry
        .serialize(&load_fixture("lecture.md"), "outline")
        .unwrap();

    let headings: Vec<Heading> = serde_json::from_str(&json).unwrap();
    assert_eq!(headings.len(), 5);
    assert_eq!(headings[3], Heading::new("Computing in Python", 3));

    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(raw[0]["id"], "descriptive-statistics");
    assert_eq!(raw[0]["level"], 1);
}

#[test]
fn test_toc_format_matches_conversion() {
    let registry = FormatRegistry::default();
    let source = load_fixture("lecture.md");

    let toc = registry.serialize(&source, "toc").unwrap();
    assert_eq!(toc, coursemark::convert(&source).table_of_contents());
}

#[test]
fn test_metadata_json_for_lecture() {
    let registry = FormatRegistry::default();
    let json = registry
        .serialize(&load_fixture("lecture.md"), "metadata")
        .unwrap();

    let metadata: LectureMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(metadata.instructor, "Dr. Amara Lindqvist");
    assert_eq!(metadata.objectives.len(), 3);
}
