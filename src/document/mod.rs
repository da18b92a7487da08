//! Structural model of Markdown documents.
//!
//! The parser extracts only what rules consume: ATX headings and inline links.
//! Everything else in the document is treated as opaque text.

mod parser;
mod types;

pub use parser::{IN_MEMORY_PATH, MarkdownParser};
pub use types::{Document, Heading, Hyperlink, LinkKind};

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
