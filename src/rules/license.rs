use super::{Rule, Violation, rule_id};
use crate::Result;
use crate::document::Document;

pub const MISSING_LICENSE_MESSAGE: &str = "Document is missing a 'License' section.";

/// Requires a heading (any level) whose text mentions "license".
pub struct RequireSectionLicense {
    id: String,
}

impl Default for RequireSectionLicense {
    fn default() -> Self {
        Self::new()
    }
}

impl RequireSectionLicense {
    /// Type name the configuration key is derived from.
    pub const TYPE_NAME: &'static str = "RequireSectionLicense";

    #[must_use]
    pub fn new() -> Self {
        Self {
            id: rule_id(Self::TYPE_NAME),
        }
    }
}

impl Rule for RequireSectionLicense {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, doc: &Document) -> Result<Vec<Violation>> {
        let found = doc
            .headings()
            .iter()
            .any(|h| h.text.to_lowercase().contains("license"));

        if found {
            Ok(Vec::new())
        } else {
            Ok(vec![Violation::new(&self.id, 1, MISSING_LICENSE_MESSAGE)])
        }
    }
}

#[cfg(test)]
#[path = "license_tests.rs"]
mod tests;
