//! Lecture markup conversion
//!
//!     This crate turns the lightweight markup used for lecture notes into HTML fragments, and
//!     extracts the pieces a lecture page is built around: the ordered heading list (for the
//!     table of contents and for document exporters) and the lecture metadata block.
//!
//!     This is a pure lib, that is, it powers coursemark-cli but is shell agnostic: no code
//!     here should suppose a shell environment, be it std printing, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── markup                  # The converter proper
//!     │   ├── classify.rs         # line -> LineClass
//!     │   ├── scanner.rs          # (BlockState, LineClass) -> (BlockState, actions)
//!     │   ├── inline.rs           # span substitution pipeline
//!     │   ├── table.rs            # buffered rows -> table html
//!     │   └── slug.rs             # heading text -> anchor id
//!     ├── outline.rs              # table of contents
//!     ├── metadata.rs             # lecture metadata extraction
//!     └── formats
//!         ├── html                # fragment or standalone page
//!         ├── toc.rs
//!         ├── outline.rs          # heading list as JSON
//!         └── metadata.rs         # metadata as JSON
//!
//! Core Algorithm
//!
//!     Conversion is a single pass over the source lines. Every line is first classified on its
//!     own (knowing only whether a code block is open), then the classification is fed to a
//!     transition function over the open block state which yields the next state plus a list
//!     of actions. The scanner applies the actions: it writes HTML, buffers table rows and
//!     records headings. Keeping classification and transitions pure means the state machine
//!     can be tested without looking at any HTML.
//!
//!     Inline spans are resolved by a fixed, ordered pipeline of substitutions (code, bold,
//!     italic, links, escaped newlines). Each stage consumes the previous stage's output.
//!
//! Totality
//!
//!     The converter never fails. Unrecognised syntax becomes paragraph text, malformed tables
//!     are dropped, absent metadata fields are empty. Only the format layer, which serializes
//!     to JSON or reads stylesheet files, returns errors.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod markup;
pub mod metadata;
pub mod outline;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use markup::{convert, format_inline, slugify, Conversion, Heading};
pub use metadata::{extract_metadata, LectureMetadata};
pub use outline::{generate_table_of_contents, TocOptions};
pub use registry::FormatRegistry;

/// Converter handle for callers that prefer an object over free functions.
///
/// The handle holds presentation options only. Every conversion returns its own
/// [`Conversion`], so nothing leaks from one call into the next and one handle can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct MarkupConverter {
    toc: TocOptions,
}

impl MarkupConverter {
    pub fn new(toc: TocOptions) -> Self {
        Self { toc }
    }

    /// Convert markup into an HTML fragment plus its heading list.
    pub fn convert(&self, text: &str) -> Conversion {
        markup::convert(text)
    }

    /// Resolve inline spans (code, bold, italic, links, line breaks) in a single line.
    pub fn format_inline(&self, text: &str) -> String {
        markup::format_inline(text)
    }

    /// Render the table of contents for a previous conversion.
    pub fn generate_table_of_contents(&self, conversion: &Conversion) -> String {
        outline::generate_table_of_contents_with(&conversion.headings, &self.toc)
    }

    pub fn extract_metadata(&self, text: &str) -> LectureMetadata {
        metadata::extract_metadata(text)
    }
}
