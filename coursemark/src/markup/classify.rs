//! Line classification
//!
//! [`classify`] looks at one line in isolation. The only context it needs is whether a code
//! block is open, because inside one every line is literal content except a closing fence.
//!
//! Precedence outside code blocks: fence, heading, thematic break, table row, list item,
//! blockquote, paragraph. The first rule that matches wins.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*-]\s+").expect("valid bullet marker regex"));
static ORDINAL_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("valid ordinal marker regex"));
static ORDINAL_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("valid ordinal start regex"));

const FENCE: &str = "```";
const HEADING_MARKERS: [(&str, u8); 4] = [("# ", 1), ("## ", 2), ("### ", 3), ("#### ", 4)];
const THEMATIC_BREAKS: [&str; 3] = ["---", "***", "___"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// What a single source line is, independent of what surrounds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming, outside a code block.
    Blank,
    /// Triple backtick line. `language` is the trimmed text after the backticks.
    Fence { language: &'a str },
    /// Any line while a code block is open, untouched.
    CodeLine(&'a str),
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    /// Trimmed, non-empty cells.
    TableRow(Vec<String>),
    /// Item text with the marker stripped.
    ListItem { kind: ListKind, text: &'a str },
    Blockquote(&'a str),
    Paragraph(&'a str),
}

/// Classify `line`. `in_code_block` is true while a fence is open.
pub fn classify(line: &str, in_code_block: bool) -> LineClass<'_> {
    let trimmed = line.trim();

    if in_code_block {
        return match trimmed.strip_prefix(FENCE) {
            Some(rest) => LineClass::Fence {
                language: rest.trim(),
            },
            None => LineClass::CodeLine(line),
        };
    }

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        return LineClass::Fence {
            language: rest.trim(),
        };
    }

    for (marker, level) in HEADING_MARKERS {
        if let Some(text) = trimmed.strip_prefix(marker) {
            return LineClass::Heading { level, text };
        }
    }

    if THEMATIC_BREAKS.contains(&trimmed) {
        return LineClass::ThematicBreak;
    }

    if is_table_row(trimmed) {
        return LineClass::TableRow(split_cells(trimmed));
    }

    if let Some(kind) = list_kind(trimmed) {
        return LineClass::ListItem {
            kind,
            text: strip_list_marker(trimmed),
        };
    }

    if let Some(text) = trimmed.strip_prefix("> ") {
        return LineClass::Blockquote(text);
    }

    LineClass::Paragraph(trimmed)
}

/// At least two pipes, i.e. more than two pipe-delimited segments.
fn is_table_row(line: &str) -> bool {
    line.split('|').count() > 2
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

fn list_kind(line: &str) -> Option<ListKind> {
    if ORDINAL_START.is_match(line) {
        Some(ListKind::Ordered)
    } else if line.starts_with("- ") || line.starts_with("* ") {
        Some(ListKind::Unordered)
    } else {
        None
    }
}

fn strip_list_marker(line: &str) -> &str {
    let line = match BULLET_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    };
    match ORDINAL_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}
