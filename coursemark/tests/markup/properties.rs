//! Property tests: the converter is total and keeps simple structural promises.

use coursemark::{convert, extract_metadata, slugify};
use proptest::prelude::*;

/// Lines made of letters, digits and spaces only: never block syntax.
fn plain_line() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,30}"
}

/// Like [`plain_line`] but without trailing spaces, so the text survives line trimming.
fn heading_title() -> impl Strategy<Value = String> {
    "[A-Za-z]([A-Za-z0-9 ]{0,20}[A-Za-z0-9])?"
}

proptest! {
    #[test]
    fn convert_never_panics(text in "(?s).{0,400}") {
        let conversion = convert(&text);
        prop_assert!(conversion.headings.iter().all(|h| (1..=4).contains(&h.level)));
    }

    #[test]
    fn extract_metadata_never_panics(text in "(?s).{0,400}") {
        let metadata = extract_metadata(&text);
        prop_assert!(metadata.objectives.len() <= 9);
    }

    #[test]
    fn plain_lines_become_paragraphs(lines in prop::collection::vec(plain_line(), 1..12)) {
        let text = lines.join("\n");
        let html = convert(&text).html;

        let expected: String = lines
            .iter()
            .map(|line| format!("<p>{}</p>\n", line.trim()))
            .collect();
        prop_assert_eq!(html, expected);
    }

    #[test]
    fn one_heading_entry_per_heading_line(
        titles in prop::collection::vec(("[1-4]", heading_title()), 0..8)
    ) {
        let text: String = titles
            .iter()
            .map(|(level, title)| {
                let hashes = "#".repeat(level.parse::<usize>().unwrap());
                format!("{hashes} {title}\n")
            })
            .collect();
        let conversion = convert(&text);

        prop_assert_eq!(conversion.headings.len(), titles.len());
        for (heading, (level, title)) in conversion.headings.iter().zip(&titles) {
            prop_assert_eq!(heading.level.to_string(), level.clone());
            prop_assert_eq!(&heading.text, title);
            prop_assert_eq!(&heading.id, &slugify(title));
        }
    }

    #[test]
    fn slugs_are_url_safe(text in ".{0,60}") {
        let slug = slugify(&text);
        prop_assert!(slug.chars().all(|c| c == '-' || c == '_' || c.is_ascii_alphanumeric()));
        prop_assert!(!slug.contains("--"));
    }
}
