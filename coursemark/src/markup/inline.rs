//! Inline span formatting
//!
//! A fixed, ordered list of substitutions. Each stage is a global replacement over the
//! previous stage's output, there is no shared scan position and no recursion:
//!
//! 1. `` `code` ``
//! 2. `**bold**`, then `__bold__`
//! 3. `*italic*`, then `_italic_`
//! 4. `[text](url)`, opened in a new browsing context
//! 5. literal `\n` (backslash, n) to a line break
//!
//! Bold runs before italic so the asterisks of a bold pair are gone by the time the single
//! delimiter rule looks for them. Emphasis content cannot contain its own delimiter, so
//! `**a *b* c**` does not nest; such input degrades to whatever the stages produce.
//! Text inside a code span is not protected either: `` `*x*` `` still gets emphasis.

use once_cell::sync::Lazy;
use regex::Regex;

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid inline pattern"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

static PIPELINE: Lazy<Vec<Substitution>> = Lazy::new(|| {
    vec![
        Substitution::new(r"`([^`]+)`", "<code>${1}</code>"),
        Substitution::new(r"\*\*([^*]+)\*\*", "<strong>${1}</strong>"),
        Substitution::new(r"__([^_]+)__", "<strong>${1}</strong>"),
        Substitution::new(r"\*([^*]+)\*", "<em>${1}</em>"),
        Substitution::new(r"_([^_]+)_", "<em>${1}</em>"),
        Substitution::new(
            r"\[([^\]]+)\]\(([^)]+)\)",
            "<a href=\"${2}\" target=\"_blank\">${1}</a>",
        ),
    ]
});

const ESCAPED_NEWLINE: &str = r"\n";

/// Resolve inline spans in `text`. Unmatched markers pass through literally.
pub fn format_inline(text: &str) -> String {
    let formatted = PIPELINE
        .iter()
        .fold(text.to_string(), |acc, stage| stage.apply(&acc));
    formatted.replace(ESCAPED_NEWLINE, "<br>")
}
