use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use super::types::{Document, Heading, Hyperlink, split_lines};
use crate::{DocGuardError, Result};

/// Path reported for documents parsed from memory.
pub const IN_MEMORY_PATH: &str = "<memory>";

/// Extracts headings and inline links from Markdown text.
///
/// Only ATX headings are recognized, and fenced code blocks are not special-cased:
/// a `# comment` inside a fence is reported as a heading.
pub struct MarkdownParser {
    heading_pattern: Regex,
    link_pattern: Regex,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading_pattern: Regex::new(r"^\s*(#{1,6})\s+(.*\S.*)$").expect("Invalid regex"),
            link_pattern: Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid regex"),
        }
    }

    /// Read and parse a Markdown file.
    ///
    /// # Errors
    /// Returns `NotFound` if the file does not exist, `Decode` if it is not valid UTF-8,
    /// and `FileRead` for any other read failure.
    pub fn parse(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).map_err(|e| DocGuardError::from_io(path, e))?;
        self.parse_bytes(path, &bytes)
    }

    /// Parse already-read file bytes.
    ///
    /// # Errors
    /// Returns `Decode` if `bytes` is not valid UTF-8.
    pub fn parse_bytes(&self, path: &Path, bytes: &[u8]) -> Result<Document> {
        let content = std::str::from_utf8(bytes).map_err(|source| DocGuardError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_content(content, path))
    }

    /// Parse Markdown held in memory.
    #[must_use]
    pub fn parse_content(&self, content: &str, path: impl Into<PathBuf>) -> Document {
        let mut headings = Vec::new();
        let mut links = Vec::new();

        let lines = split_lines(content);
        for (i, line) in lines.iter().enumerate() {
            let line_number = i + 1;
            if let Some(heading) = self.match_heading(line, line_number) {
                headings.push(heading);
            }
            links.extend(
                self.link_pattern
                    .captures_iter(line)
                    .map(|caps| Hyperlink::new(&caps[1], &caps[2], line_number)),
            );
        }

        Document::new(path.into(), content.to_string(), lines, headings, links)
    }

    fn match_heading(&self, line: &str, line_number: usize) -> Option<Heading> {
        let caps = self.heading_pattern.captures(line)?;
        Some(Heading {
            level: caps[1].len(),
            text: caps[2].trim().to_string(),
            line_number,
        })
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
