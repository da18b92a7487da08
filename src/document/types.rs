use std::path::{Path, PathBuf};

use serde::Serialize;

/// An ATX heading (`#` through `######`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Number of leading `#` markers (1-6)
    pub level: usize,
    /// Label with markers and surrounding whitespace removed
    pub text: String,
    /// Line of the heading (1-indexed)
    pub line_number: usize,
}

/// How a link target is resolved when checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// `http://`, `https://` or `mailto:` target.
    External,
    /// Same-document `#fragment` target.
    Anchor,
    /// Relative path, optionally carrying a `#fragment` suffix.
    File,
}

impl LinkKind {
    #[must_use]
    pub fn classify(target: &str) -> Self {
        if target.starts_with("http://")
            || target.starts_with("https://")
            || target.starts_with("mailto:")
        {
            Self::External
        } else if target.starts_with('#') {
            Self::Anchor
        } else {
            Self::File
        }
    }
}

/// An inline `[text](target)` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    pub text: String,
    pub target: String,
    pub line_number: usize,
    pub kind: LinkKind,
}

impl Hyperlink {
    #[must_use]
    pub fn new(text: &str, target: &str, line_number: usize) -> Self {
        let target = target.trim();
        Self {
            text: text.trim().to_string(),
            target: target.to_string(),
            line_number,
            kind: LinkKind::classify(target),
        }
    }
}

/// Structural model of a single Markdown document.
///
/// Built once by [`MarkdownParser`](super::MarkdownParser) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
    lines: Vec<String>,
    headings: Vec<Heading>,
    links: Vec<Hyperlink>,
}

impl Document {
    pub(super) fn new(
        path: PathBuf,
        content: String,
        lines: Vec<String>,
        headings: Vec<Heading>,
        links: Vec<Hyperlink>,
    ) -> Self {
        Self {
            path,
            content,
            lines,
            headings,
            links,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lines of the document. Never empty: empty content yields a single empty line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Headings in document order.
    #[must_use]
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Links in line order, left-to-right within a line.
    #[must_use]
    pub fn links(&self) -> &[Hyperlink] {
        &self.links
    }

    /// Directory that relative file links resolve against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

pub(super) fn split_lines(content: &str) -> Vec<String> {
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
