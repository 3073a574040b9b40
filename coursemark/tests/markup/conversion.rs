//! End-to-end conversion tests over full lecture documents.

use crate::common::load_fixture;
use coursemark::{convert, Heading, MarkupConverter};
use insta::assert_snapshot;

// ============================================================================
// LECTURE FIXTURE
// ============================================================================

#[test]
fn test_lecture_headings_in_source_order() {
    let conversion = convert(&load_fixture("lecture.md"));

    let outline: Vec<(u8, &str, &str)> = conversion
        .headings
        .iter()
        .map(|h| (h.level, h.text.as_str(), h.id.as_str()))
        .collect();
    assert_eq!(
        outline,
        vec![
            (1, "Descriptive Statistics", "descriptive-statistics"),
            (2, "Learning Objectives", "learning-objectives"),
            (2, "Measures of Centre", "measures-of-centre"),
            (3, "Computing in Python", "computing-in-python"),
            (2, "Spread", "spread"),
        ]
    );
    assert_eq!(conversion.title(), Some("Descriptive Statistics"));
}

#[test]
fn test_lecture_metadata_lines_are_paragraphs() {
    let html = convert(&load_fixture("lecture.md")).html;

    assert!(html.contains("<p><strong>Date:</strong> 2024-09-16</p>"));
    assert!(html.contains("<p><strong>Course:</strong> BA 101 Business Analytics</p>"));
}

#[test]
fn test_lecture_objectives_list() {
    let html = convert(&load_fixture("lecture.md")).html;

    assert!(html.contains(
        "<ul>\n\
         <li>Summarise a variable with <strong>mean</strong>, median and mode</li>\n\
         <li>Describe spread with the standard deviation</li>\n\
         <li>Read a frequency table</li>\n\
         </ul>\n"
    ));
}

#[test]
fn test_lecture_inline_spans() {
    let html = convert(&load_fixture("lecture.md")).html;

    assert!(html.contains(
        "<p>The <em>mean</em> is sensitive to outliers; the <code>median</code> is not.</p>"
    ));
    assert!(html.contains(
        "<p>See <a href=\"https://example.edu/ba101\" target=\"_blank\">the course site</a> for the slides.</p>"
    ));
    assert!(html.contains("<blockquote>Always plot the data first.</blockquote>"));
}

#[test]
fn test_lecture_table_with_header() {
    let html = convert(&load_fixture("lecture.md")).html;

    assert!(html.contains(
        "<div class=\"table-container\"><table>\n\
         <thead><tr>\n<th>Measure</th>\n<th>Formula</th>\n<th>Robust</th>\n</tr></thead>\n\
         <tbody>\n\
         <tr>\n<td>Mean</td>\n<td>sum / n</td>\n<td>no</td>\n</tr>\n\
         <tr>\n<td>Median</td>\n<td>middle value</td>\n<td>yes</td>\n</tr>\n\
         </tbody>\n</table></div>\n"
    ));
    assert!(!html.contains("<td>---------</td>"));
}

#[test]
fn test_lecture_code_block_is_verbatim() {
    let html = convert(&load_fixture("lecture.md")).html;

    assert!(html.contains(
        "<pre><code class=\"language-python\">import statistics\n\
         values = [3, 1, 4, 1, 5]\n\
         print(statistics.mean(values))\n\
         </code></pre>\n"
    ));
}

#[test]
fn test_lecture_ordered_list_directly_after_heading() {
    let html = convert(&load_fixture("lecture.md")).html;

    assert!(html.contains(
        "<h2 id=\"spread\">Spread</h2>\n\
         <ol>\n<li>Range</li>\n<li>Interquartile range</li>\n<li>Standard deviation</li>\n</ol>\n"
    ));
}

#[test]
fn test_lecture_ends_with_rule() {
    let html = convert(&load_fixture("lecture.md")).html;
    assert!(html.ends_with("<hr>\n\n"));
}

// ============================================================================
// KITCHEN SINK
// ============================================================================

#[test]
fn test_kitchensink_snapshot() {
    let html = convert(&load_fixture("kitchensink.md")).html;

    assert_snapshot!(html, @r#"
<h1 id="kitchen-sink">Kitchen Sink</h1>
<p>Plain paragraph with <strong>strong</strong> and <em>soft</em> text.<br>Second visual line.</p>
<ul>
<li>first bullet</li>
<li>numbered after bullet</li>
<li>starred</li>
</ul>
<div class="table-container"><table>
<tbody>
<tr>
<td>a</td>
<td>b</td>
</tr>
<tr>
<td>c</td>
<td>d</td>
</tr>
</tbody>
</table></div>
<h2 id="section-two">Section: Two!</h2>
<blockquote>quote with <a href="https://example.com" target="_blank">link</a></blockquote>
<pre><code>unterminated code with *stars*

</code></pre>
"#);
}

// ============================================================================
// SMALL DOCUMENTS
// ============================================================================

#[test]
fn test_two_row_table_with_separator_has_empty_body() {
    let html = convert("| Name | Grade |\n| --- | --- |\n").html;
    assert_eq!(
        html,
        "<div class=\"table-container\"><table>\n\
         <thead><tr>\n<th>Name</th>\n<th>Grade</th>\n</tr></thead>\n<tbody>\n\
         </tbody>\n</table></div>\n\n"
    );
}

#[test]
fn test_heading_markers_map_to_tags() {
    let conversion = convert("# One\n## Two\n### Three\n#### Four\n");
    for (level, heading) in (1u8..=4).zip(&conversion.headings) {
        assert_eq!(heading.level, level);
        assert!(conversion
            .html
            .contains(&format!("<h{level} id=\"{}\">", heading.id)));
    }
    assert_eq!(conversion.headings.len(), 4);
}

#[test]
fn test_repeated_conversions_do_not_share_headings() {
    let converter = MarkupConverter::default();
    let first = converter.convert("## Alpha\n");
    let second = converter.convert("## Beta\n");

    assert_eq!(first.headings, vec![Heading::new("Alpha", 2)]);
    assert_eq!(second.headings, vec![Heading::new("Beta", 2)]);
    assert!(converter
        .generate_table_of_contents(&second)
        .contains("#beta"));
    assert!(!converter
        .generate_table_of_contents(&second)
        .contains("#alpha"));
}
