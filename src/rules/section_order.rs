use serde::{Deserialize, Serialize};

use super::{Rule, Violation, rule_id};
use crate::Result;
use crate::document::{Document, Heading};

/// Options for [`SectionOrder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOrderOptions {
    /// Expected section labels, matched as case-insensitive substrings.
    #[serde(default)]
    pub order: Vec<String>,
}

/// Checks that top-level sections (levels 1-2) follow the configured order.
///
/// Sections missing from the document or absent from the configured order are
/// tolerated; only a section that appears after a later-ordered one is reported.
pub struct SectionOrder {
    id: String,
    order: Vec<String>,
    order_lower: Vec<String>,
}

impl SectionOrder {
    /// Type name the configuration key is derived from.
    pub const TYPE_NAME: &'static str = "SectionOrder";

    #[must_use]
    pub fn new(options: SectionOrderOptions) -> Self {
        let order_lower = options.order.iter().map(|s| s.to_lowercase()).collect();
        Self {
            id: rule_id(Self::TYPE_NAME),
            order: options.order,
            order_lower,
        }
    }

    /// First configured label contained in the heading text, if any.
    fn position_of(&self, heading: &Heading) -> Option<usize> {
        let text = heading.text.to_lowercase();
        self.order_lower
            .iter()
            .position(|label| text.contains(label.as_str()))
    }
}

impl Rule for SectionOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, doc: &Document) -> Result<Vec<Violation>> {
        if self.order.is_empty() {
            return Ok(Vec::new());
        }

        let mut violations = Vec::new();
        // Highest configured index reached so far.
        let mut watermark: Option<usize> = None;

        for heading in doc.headings().iter().filter(|h| h.level <= 2) {
            let Some(index) = self.position_of(heading) else {
                continue;
            };

            if let Some(reached) = watermark
                && index < reached
            {
                violations.push(Violation::new(
                    &self.id,
                    heading.line_number.saturating_sub(1).max(1),
                    format!(
                        "Section '{}' appears out of order. It should not come before '{}'.",
                        heading.text, self.order[reached]
                    ),
                ));
            }

            watermark = Some(watermark.map_or(index, |reached| reached.max(index)));
        }

        Ok(violations)
    }
}

#[cfg(test)]
#[path = "section_order_tests.rs"]
mod tests;
