//! Structural rules evaluated against a parsed [`Document`].
//!
//! A rule is any type implementing [`Rule`]. Rules are built from configuration by
//! [`RuleSetBuilder`], which looks names up in a registration table.

mod broken_link;
mod license;
mod probe;
mod registry;
mod section_order;

pub use broken_link::{BrokenLinkCheck, BrokenLinkOptions, DEFAULT_ALLOWED_STATUSES, slugify};
pub use license::RequireSectionLicense;
pub use probe::{LinkProbe, ProbeMethod, ReqwestProbe};
pub use registry::{RuleSetBuilder, available_rules};
pub use section_order::{SectionOrder, SectionOrderOptions};

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::document::Document;

/// Identifier used for violations synthesized by the runner itself.
pub const RUNNER_RULE_ID: &str = "runner";

/// A single finding reported against a document line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    /// 1-indexed line, or 0 for file-level runner failures.
    pub line_number: usize,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(rule_id: impl Into<String>, line_number: usize, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            line_number,
            message: message.into(),
        }
    }

    /// Violation attributed to the runner rather than to a structural rule.
    #[must_use]
    pub fn runner(message: impl Into<String>) -> Self {
        Self::new(RUNNER_RULE_ID, 0, message)
    }

    #[must_use]
    pub fn is_runner_failure(&self) -> bool {
        self.rule_id == RUNNER_RULE_ID
    }
}

pub trait Rule: Send + Sync {
    /// Stable identifier, shared by configuration keys and reported violations.
    fn id(&self) -> &str;

    /// Evaluate the rule. An empty vector means the document passes.
    ///
    /// # Errors
    /// Returns `RuleEvaluation` when the rule cannot evaluate the document at all.
    fn apply(&self, doc: &Document) -> Result<Vec<Violation>>;
}

/// Convert a `CamelCase` type name into `kebab-case`.
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rule identifier for a rule type named `type_name` (e.g. `"SectionOrder"`).
#[must_use]
pub fn rule_id(type_name: &str) -> String {
    kebab_case(type_name)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
