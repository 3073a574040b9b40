//! Lecture metadata extraction
//!
//! Lecture notes open with a small metadata block:
//!
//! ```markdown
//! # Regression Analysis
//!
//! **Date:** 2024-03-04
//! **Duration:** 90 minutes
//! **Instructor:** Dr. Rivera
//! **Course:** BA 301
//!
//! ## Learning Objectives
//! - Fit a linear model
//! - Read a residual plot
//! ```
//!
//! [`extract_metadata`] runs its own line scan and does not need a prior conversion. The
//! first level-1 heading is the title, each bold label is taken from its first occurrence,
//! and objectives are the hyphen bullets in the nine lines after the first
//! `## Learning Objectives` heading. Collection stops early at a line starting with `##` or
//! at a bullet with no text. Fields that are never found stay empty.

use crate::markup::BYTE_ORDER_MARK;
use serde::{Deserialize, Serialize};

const DATE_LABEL: &str = "**Date:**";
const DURATION_LABEL: &str = "**Duration:**";
const INSTRUCTOR_LABEL: &str = "**Instructor:**";
const COURSE_LABEL: &str = "**Course:**";
const OBJECTIVES_HEADING: &str = "## Learning Objectives";
const OBJECTIVES_WINDOW: usize = 9;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureMetadata {
    pub title: String,
    pub date: String,
    pub duration: String,
    pub instructor: String,
    pub course: String,
    pub objectives: Vec<String>,
}

#[derive(Default)]
struct Fields {
    title: Option<String>,
    date: Option<String>,
    duration: Option<String>,
    instructor: Option<String>,
    course: Option<String>,
    objectives: Option<Vec<String>>,
}

/// Scan `text` for the lecture metadata block. Never fails.
pub fn extract_metadata(text: &str) -> LectureMetadata {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut fields = Fields::default();

    for (index, line) in lines.iter().enumerate() {
        if let Some(title) = line.strip_prefix("# ") {
            fields.title.get_or_insert_with(|| title.trim().to_string());
        } else if let Some(value) = line.strip_prefix(DATE_LABEL) {
            fields.date.get_or_insert_with(|| value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(DURATION_LABEL) {
            fields.duration.get_or_insert_with(|| value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(INSTRUCTOR_LABEL) {
            fields.instructor.get_or_insert_with(|| value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(COURSE_LABEL) {
            fields.course.get_or_insert_with(|| value.trim().to_string());
        } else if line.starts_with(OBJECTIVES_HEADING) && fields.objectives.is_none() {
            fields.objectives = Some(collect_objectives(&lines[index + 1..]));
        }
    }

    LectureMetadata {
        title: fields.title.unwrap_or_default(),
        date: fields.date.unwrap_or_default(),
        duration: fields.duration.unwrap_or_default(),
        instructor: fields.instructor.unwrap_or_default(),
        course: fields.course.unwrap_or_default(),
        objectives: fields.objectives.unwrap_or_default(),
    }
}

fn collect_objectives(following: &[&str]) -> Vec<String> {
    let mut objectives = Vec::new();

    for line in following.iter().take(OBJECTIVES_WINDOW) {
        if line.starts_with("##") {
            break;
        }
        if *line == "-" || line.starts_with("- ") {
            let objective = line[1..].trim();
            if objective.is_empty() {
                break;
            }
            objectives.push(objective.to_string());
        }
    }

    tracing::trace!(count = objectives.len(), "collected learning objectives");
    objectives
}

#[cfg(test)]
mod tests {
    use super::*;

    const LECTURE: &str = "# Regression Analysis\n\
        \n\
        **Date:** 2024-03-04\n\
        **Duration:** 90 minutes\n\
        **Instructor:** Dr. Rivera\n\
        **Course:** BA 301\n\
        \n\
        ## Learning Objectives\n\
        - Fit a linear model\n\
        - Read a residual plot\n\
        - Compare nested models\n\
        ## Warm-up\n\
        - This is not an objective\n";

    #[test]
    fn extracts_full_block() {
        let metadata = extract_metadata(LECTURE);
        assert_eq!(metadata.title, "Regression Analysis");
        assert_eq!(metadata.date, "2024-03-04");
        assert_eq!(metadata.duration, "90 minutes");
        assert_eq!(metadata.instructor, "Dr. Rivera");
        assert_eq!(metadata.course, "BA 301");
        assert_eq!(
            metadata.objectives,
            vec![
                "Fit a linear model",
                "Read a residual plot",
                "Compare nested models"
            ]
        );
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let metadata = extract_metadata("\u{feff}# Title\n**Course:** BA 301\n");
        assert_eq!(metadata.title, "Title");
        assert_eq!(metadata.course, "BA 301");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let metadata = extract_metadata("Just some prose.\n");
        assert_eq!(metadata, LectureMetadata::default());
    }

    #[test]
    fn first_occurrence_wins() {
        let metadata = extract_metadata("# First\n# Second\n**Date:** Mon\n**Date:** Tue\n");
        assert_eq!(metadata.title, "First");
        assert_eq!(metadata.date, "Mon");
    }

    #[test]
    fn objectives_window_is_nine_lines() {
        let mut text = String::from("## Learning Objectives\n");
        for i in 1..=12 {
            text.push_str(&format!("- objective {i}\n"));
        }
        let metadata = extract_metadata(&text);
        assert_eq!(metadata.objectives.len(), 9);
        assert_eq!(metadata.objectives[8], "objective 9");
    }

    #[test]
    fn non_bullet_lines_in_window_are_skipped() {
        let metadata =
            extract_metadata("## Learning Objectives\n\nBy the end you can:\n- explain it\n");
        assert_eq!(metadata.objectives, vec!["explain it"]);
    }

    #[test]
    fn empty_bullet_stops_collection() {
        let metadata = extract_metadata("## Learning Objectives\n- one\n-\n- two\n");
        assert_eq!(metadata.objectives, vec!["one"]);
    }

    #[test]
    fn thematic_break_is_not_an_objective() {
        let metadata = extract_metadata("## Learning Objectives\n---\n- real\n");
        assert_eq!(metadata.objectives, vec!["real"]);
    }

    #[test]
    fn objectives_heading_at_end_of_input() {
        let metadata = extract_metadata("## Learning Objectives");
        assert!(metadata.objectives.is_empty());
    }
}
