//! Metadata extraction over full lecture documents.

use crate::common::load_fixture;
use coursemark::{extract_metadata, LectureMetadata};

#[test]
fn test_lecture_fixture_metadata() {
    let metadata = extract_metadata(&load_fixture("lecture.md"));

    assert_eq!(
        metadata,
        LectureMetadata {
            title: "Descriptive Statistics".to_string(),
            date: "2024-09-16".to_string(),
            duration: "90 minutes".to_string(),
            instructor: "Dr. Amara Lindqvist".to_string(),
            course: "BA 101 Business Analytics".to_string(),
            objectives: vec![
                "Summarise a variable with **mean**, median and mode".to_string(),
                "Describe spread with the standard deviation".to_string(),
                "Read a frequency table".to_string(),
            ],
        }
    );
}

#[test]
fn test_objectives_stop_at_next_section() {
    let text = "## Learning Objectives\n- one\n- two\n- three\n## Agenda\n- agenda item\n";
    let metadata = extract_metadata(text);

    assert_eq!(metadata.objectives, vec!["one", "two", "three"]);
}

#[test]
fn test_metadata_does_not_need_conversion() {
    // The kitchen sink has no metadata block besides its title.
    let metadata = extract_metadata(&load_fixture("kitchensink.md"));

    assert_eq!(metadata.title, "Kitchen Sink");
    assert!(metadata.date.is_empty());
    assert!(metadata.objectives.is_empty());
}
