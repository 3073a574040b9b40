//! CLI-specific transforms
//!
//! Views of the intermediate steps the converter goes through, for debugging lecture
//! sources that render unexpectedly.
//!
//! - `line-classes`: every line with the block state it was read in and its classification
//! - `block-actions`: state transitions and the actions each line triggers, plus the
//!   closing actions at end of input
//! - `outline-tree`: the heading outline as an indented tree with anchor ids
//!
//! ## Extra Parameters
//!
//! - `show-linum`: "false" hides the line number column (default "true")
//!
//! Example: `coursemark inspect lecture.md block-actions --extra-show-linum false`

use coursemark::markup::{classify, scanner, transition, BlockState};
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["line-classes", "block-actions", "outline-tree"];

/// Execute a named transform on a source file with optional extra parameters
///
/// Returns the transformed output, or an error message for unknown transforms and
/// malformed parameters.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let show_linum = match extra_params.get("show-linum").map(|s| s.as_str()) {
        None | Some("true") => true,
        Some("false") => false,
        Some(other) => return Err(format!("Invalid value '{other}' for show-linum")),
    };

    match transform_name {
        "line-classes" => Ok(line_classes(source, show_linum)),
        "block-actions" => Ok(block_actions(source, show_linum)),
        "outline-tree" => Ok(outline_tree(source)),
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn linum_prefix(index: usize, show_linum: bool) -> String {
    if show_linum {
        format!("{:>4}  ", index + 1)
    } else {
        String::new()
    }
}

fn line_classes(source: &str, show_linum: bool) -> String {
    let mut output = String::new();
    let mut state = BlockState::default();

    for (index, line) in source_lines(source).enumerate() {
        let class = classify(line, state == BlockState::CodeBlock);
        output.push_str(&linum_prefix(index, show_linum));
        output.push_str(&format!("{:<16} {class:?}\n", format!("{state:?}")));
        state = transition(state, class).0;
    }

    output
}

fn block_actions(source: &str, show_linum: bool) -> String {
    let mut output = String::new();
    let mut state = BlockState::default();

    for (index, line) in source_lines(source).enumerate() {
        let class = classify(line, state == BlockState::CodeBlock);
        let (next, actions) = transition(state, class);
        output.push_str(&linum_prefix(index, show_linum));
        output.push_str(&format!(
            "{:<16} -> {:<16} {actions:?}\n",
            format!("{state:?}"),
            format!("{next:?}")
        ));
        state = next;
    }

    let closing = scanner::finish(state);
    if !closing.is_empty() {
        output.push_str(&format!("end   {state:?} -> None {closing:?}\n"));
    }

    output
}

fn outline_tree(source: &str) -> String {
    let conversion = coursemark::convert(source);
    let mut output = String::new();
    for heading in &conversion.headings {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
        output.push_str(&format!(
            "{indent}h{} {} #{}\n",
            heading.level, heading.text, heading.id
        ));
    }
    output
}
