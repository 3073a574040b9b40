//! Block scanner
//!
//! The scanner keeps exactly one open block at any line boundary. [`transition`] is the
//! whole state machine: it maps the open block and a classified line to the next open block
//! and the actions to perform, without touching any buffer. [`Scanner`] applies those
//! actions.
//!
//! Closing rules:
//! - a blank line closes an open list or table, never a code block
//! - any line that is not a list item closes an open list
//! - any line that is not a table row closes an open table
//! - end of input closes whatever is open
//!
//! A list stays open when the marker kind changes (`- a` directly followed by `1. b`): the
//! item is appended to the list that is already open.

use super::classify::{classify, LineClass, ListKind};
use super::inline::format_inline;
use super::table::render_table;
use super::{Conversion, Heading};

/// The block open at a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    None,
    CodeBlock,
    List(ListKind),
    Table,
}

/// A single step for the scanner to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<'a> {
    OpenCode { language: &'a str },
    CodeLine(&'a str),
    CloseCode,
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    OpenList(ListKind),
    ListItem(&'a str),
    CloseList(ListKind),
    BufferRow(Vec<String>),
    FlushTable,
    Blockquote(&'a str),
    Paragraph(&'a str),
    Blank,
}

/// Compute the next state and the actions for one classified line.
pub fn transition<'a>(state: BlockState, class: LineClass<'a>) -> (BlockState, Vec<Action<'a>>) {
    let mut actions = Vec::new();

    let next = match (state, class) {
        (BlockState::CodeBlock, LineClass::Fence { .. }) => {
            actions.push(Action::CloseCode);
            BlockState::None
        }
        (BlockState::CodeBlock, LineClass::CodeLine(line)) => {
            actions.push(Action::CodeLine(line));
            BlockState::CodeBlock
        }
        (BlockState::CodeBlock, other) => {
            // The classifier never produces anything else inside a code block.
            tracing::trace!(?other, "unexpected line class inside code block");
            BlockState::CodeBlock
        }
        (BlockState::Table, LineClass::TableRow(cells)) => {
            actions.push(Action::BufferRow(cells));
            BlockState::Table
        }
        (BlockState::List(kind), LineClass::ListItem { text, .. }) => {
            actions.push(Action::ListItem(text));
            BlockState::List(kind)
        }
        (open, class) => {
            actions.extend(close(open));
            match class {
                LineClass::Blank => {
                    actions.push(Action::Blank);
                    BlockState::None
                }
                LineClass::Fence { language } => {
                    actions.push(Action::OpenCode { language });
                    BlockState::CodeBlock
                }
                LineClass::CodeLine(line) => {
                    actions.push(Action::Paragraph(line.trim()));
                    BlockState::None
                }
                LineClass::Heading { level, text } => {
                    actions.push(Action::Heading { level, text });
                    BlockState::None
                }
                LineClass::ThematicBreak => {
                    actions.push(Action::ThematicBreak);
                    BlockState::None
                }
                LineClass::TableRow(cells) => {
                    actions.push(Action::BufferRow(cells));
                    BlockState::Table
                }
                LineClass::ListItem { kind, text } => {
                    actions.push(Action::OpenList(kind));
                    actions.push(Action::ListItem(text));
                    BlockState::List(kind)
                }
                LineClass::Blockquote(text) => {
                    actions.push(Action::Blockquote(text));
                    BlockState::None
                }
                LineClass::Paragraph(text) => {
                    actions.push(Action::Paragraph(text));
                    BlockState::None
                }
            }
        }
    };

    (next, actions)
}

/// Actions that close `state` at end of input.
pub fn finish(state: BlockState) -> Vec<Action<'static>> {
    match state {
        BlockState::CodeBlock => {
            tracing::debug!("closing unterminated code block at end of input");
            vec![Action::CloseCode]
        }
        other => close(other).into_iter().collect(),
    }
}

fn close(state: BlockState) -> Option<Action<'static>> {
    match state {
        BlockState::List(kind) => Some(Action::CloseList(kind)),
        BlockState::Table => Some(Action::FlushTable),
        BlockState::None | BlockState::CodeBlock => None,
    }
}

/// Applies transitions line by line and accumulates the output.
#[derive(Debug, Default)]
pub struct Scanner {
    state: BlockState,
    table: Vec<Vec<String>>,
    html: String,
    headings: Vec<Heading>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Process one line (without its newline).
    pub fn feed(&mut self, line: &str) {
        let class = classify(line, self.state == BlockState::CodeBlock);
        let (next, actions) = transition(self.state, class);
        for action in actions {
            self.apply(action);
        }
        self.state = next;
    }

    /// Close any open block and hand back the result.
    pub fn finish(mut self) -> Conversion {
        for action in finish(self.state) {
            self.apply(action);
        }
        self.state = BlockState::None;
        Conversion {
            html: self.html,
            headings: self.headings,
        }
    }

    fn apply(&mut self, action: Action<'_>) {
        match action {
            Action::OpenCode { language } => {
                if language.is_empty() {
                    self.html.push_str("<pre><code>");
                } else {
                    self.html
                        .push_str(&format!("<pre><code class=\"language-{language}\">"));
                }
            }
            Action::CodeLine(line) => {
                self.html.push_str(line);
                self.html.push('\n');
            }
            Action::CloseCode => self.html.push_str("</code></pre>\n"),
            Action::Heading { level, text } => {
                let heading = Heading::new(text, level);
                self.html.push_str(&format!(
                    "<h{level} id=\"{}\">{}</h{level}>\n",
                    heading.id, heading.text
                ));
                self.headings.push(heading);
            }
            Action::ThematicBreak => self.html.push_str("<hr>\n"),
            Action::OpenList(kind) => self.html.push_str(&format!("<{}>\n", kind.tag())),
            Action::ListItem(text) => {
                self.html
                    .push_str(&format!("<li>{}</li>\n", format_inline(text)));
            }
            Action::CloseList(kind) => self.html.push_str(&format!("</{}>\n", kind.tag())),
            Action::BufferRow(cells) => self.table.push(cells),
            Action::FlushTable => {
                let rows = std::mem::take(&mut self.table);
                if rows.len() < 2 {
                    tracing::debug!(rows = rows.len(), "dropping table with fewer than two rows");
                }
                self.html.push_str(&render_table(&rows));
            }
            Action::Blockquote(text) => {
                self.html
                    .push_str(&format!("<blockquote>{}</blockquote>\n", format_inline(text)));
            }
            Action::Paragraph(text) => {
                self.html.push_str(&format!("<p>{}</p>\n", format_inline(text)));
            }
            Action::Blank => self.html.push('\n'),
        }
    }
}
