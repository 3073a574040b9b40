//! Markup to HTML conversion
//!
//! The converter is split in the same stages a line goes through:
//!
//! - [`classify`]: raw line → [`LineClass`]
//! - [`scanner`]: ([`BlockState`], [`LineClass`]) → (next state, [`Action`]s), applied by
//!   [`Scanner`] which owns the HTML buffer, the table buffer and the heading list
//! - [`inline`]: span substitution for paragraph, list item and blockquote text
//! - [`table`]: buffered rows → table HTML
//! - [`slug`]: heading text → anchor id
//!
//! # Element Mapping Table
//!
//! | Markup                    | HTML                                              |
//! |---------------------------|---------------------------------------------------|
//! | `# ` .. `#### `           | `<h1 id="slug">` .. `<h4 id="slug">`              |
//! | fence with language tag   | `<pre><code class="language-TAG">`                |
//! | `---`, `***`, `___`       | `<hr>`                                            |
//! | pipe rows                 | `<div class="table-container"><table>`            |
//! | `- `, `* `                | `<ul>` + `<li>`                                   |
//! | `1.`                      | `<ol>` + `<li>`                                   |
//! | `> `                      | `<blockquote>` (one per line)                     |
//! | anything else             | `<p>`                                             |

pub mod classify;
pub mod inline;
pub mod scanner;
pub mod slug;
pub mod table;

pub use classify::{classify, LineClass, ListKind};
pub use inline::format_inline;
pub use scanner::{transition, Action, BlockState, Scanner};
pub use slug::slugify;
pub use table::render_table;

use serde::{Deserialize, Serialize};

pub(crate) const BYTE_ORDER_MARK: char = '\u{feff}';

/// A heading found during conversion.
///
/// Headings are also the outline records handed to document exporters, which is why they
/// serialize: an exporter gets `{text, level, id}` and estimates pages on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Remainder of the line after the marker and one space.
    pub text: String,
    /// 1 to 4.
    pub level: u8,
    /// Anchor id, see [`slugify`]. Not de-duplicated.
    pub id: String,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        let text = text.into();
        let id = slugify(&text);
        Self { text, level, id }
    }
}

/// Result of a single [`convert`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// HTML fragments, newline separated. Not a full document.
    pub html: String,
    /// Headings in source order.
    pub headings: Vec<Heading>,
}

impl Conversion {
    /// Text of the first level-1 heading, which serves as the document title.
    pub fn title(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|heading| heading.level == 1)
            .map(|heading| heading.text.as_str())
    }

    /// Table of contents with the default options.
    pub fn table_of_contents(&self) -> String {
        crate::outline::generate_table_of_contents(&self.headings)
    }
}

/// Convert markup text into an HTML fragment and its heading list.
///
/// Lines are separated by `\n`; a trailing `\r` on a line is ignored, and so is a leading
/// byte-order mark. Never fails.
pub fn convert(text: &str) -> Conversion {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut scanner = Scanner::new();
    for line in text.split('\n') {
        scanner.feed(line.strip_suffix('\r').unwrap_or(line));
    }
    let conversion = scanner.finish();
    tracing::debug!(
        bytes_in = text.len(),
        bytes_out = conversion.html.len(),
        headings = conversion.headings.len(),
        "converted markup"
    );
    conversion
}
