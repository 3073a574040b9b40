//! Format implementations
//!
//! Every format renders lecture markup into one output representation.

pub mod html;
pub mod metadata;
pub mod outline;
pub mod toc;

pub use html::{get_default_css, HtmlFormat, HtmlOptions, HtmlTheme};
pub use metadata::MetadataFormat;
pub use outline::OutlineFormat;
pub use toc::TocFormat;
