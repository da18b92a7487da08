use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::probe::{LinkProbe, ProbeMethod, ReqwestProbe};
use super::{Rule, Violation, rule_id};
use crate::document::{Document, Hyperlink, LinkKind};
use crate::{DocGuardError, Result};

/// Statuses accepted on the GET retry when none are configured.
pub const DEFAULT_ALLOWED_STATUSES: [u16; 12] =
    [200, 201, 202, 203, 204, 205, 206, 301, 302, 303, 307, 308];

const DEFAULT_TIMEOUT_SECS: f64 = 3.0;

/// Options for [`BrokenLinkCheck`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokenLinkOptions {
    /// Probe `http(s)://` links over the network.
    #[serde(default)]
    pub check_external: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: f64,

    /// Statuses accepted when the HEAD probe fails and GET is retried.
    #[serde(default = "default_allowed_statuses")]
    pub allowed_statuses: BTreeSet<u16>,
}

impl Default for BrokenLinkOptions {
    fn default() -> Self {
        Self {
            check_external: false,
            timeout: default_timeout(),
            allowed_statuses: default_allowed_statuses(),
        }
    }
}

impl BrokenLinkOptions {
    /// # Errors
    /// Returns a `Config` error if `timeout` is not a positive, finite number.
    pub fn timeout_duration(&self) -> Result<Duration> {
        if self.timeout.is_finite() && self.timeout > 0.0 {
            Ok(Duration::from_secs_f64(self.timeout))
        } else {
            Err(DocGuardError::Config(format!(
                "broken-link-check: timeout must be a positive number of seconds, got {}",
                self.timeout
            )))
        }
    }
}

const fn default_timeout() -> f64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_allowed_statuses() -> BTreeSet<u16> {
    DEFAULT_ALLOWED_STATUSES.into_iter().collect()
}

/// Normalize heading text into an anchor slug.
///
/// Lowercases, drops everything except word characters, hyphens and spaces,
/// then turns each space into a hyphen.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Reports anchor, file and (optionally) external links that do not resolve.
pub struct BrokenLinkCheck {
    id: String,
    options: BrokenLinkOptions,
    probe: Option<Box<dyn LinkProbe>>,
}

impl BrokenLinkCheck {
    /// Type name the configuration key is derived from.
    pub const TYPE_NAME: &'static str = "BrokenLinkCheck";

    /// Build the rule, creating an HTTP client only when external checks are enabled.
    ///
    /// # Errors
    /// Returns an error if the timeout is invalid or the HTTP client cannot be built.
    pub fn new(options: BrokenLinkOptions) -> Result<Self> {
        let timeout = options.timeout_duration()?;
        let probe: Option<Box<dyn LinkProbe>> = if options.check_external {
            Some(Box::new(ReqwestProbe::new(timeout)?))
        } else {
            None
        };
        Ok(Self {
            id: rule_id(Self::TYPE_NAME),
            options,
            probe,
        })
    }

    /// Build the rule with a caller-supplied probe.
    #[must_use]
    pub fn with_probe(options: BrokenLinkOptions, probe: Box<dyn LinkProbe>) -> Self {
        Self {
            id: rule_id(Self::TYPE_NAME),
            options,
            probe: Some(probe),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &BrokenLinkOptions {
        &self.options
    }

    fn check_anchor(&self, link: &Hyperlink, slugs: &HashSet<String>) -> Option<Violation> {
        let fragment = link.target.strip_prefix('#').unwrap_or(&link.target);
        if slugs.contains(&slugify(fragment)) {
            return None;
        }
        Some(Violation::new(
            &self.id,
            link.line_number,
            format!(
                "Broken anchor link: '{}' does not match any heading.",
                link.target
            ),
        ))
    }

    fn check_file(&self, doc: &Document, link: &Hyperlink) -> Option<Violation> {
        let path_part = link
            .target
            .split_once('#')
            .map_or(link.target.as_str(), |(path, _)| path);
        if path_part.is_empty() || doc.base_dir().join(path_part).exists() {
            return None;
        }
        Some(Violation::new(
            &self.id,
            link.line_number,
            format!("Broken file link: '{}' does not exist.", link.target),
        ))
    }

    /// Returns the failure reason, or `None` if the link is reachable.
    fn probe_external(&self, probe: &dyn LinkProbe, url: &str) -> Option<String> {
        match probe.status(ProbeMethod::Head, url) {
            Ok(status) if status < 400 => return None,
            Ok(status) => log::debug!("HEAD {url} returned {status}, retrying with GET"),
            Err(e) => return Some(probe_failure_reason(&e)),
        }

        match probe.status(ProbeMethod::Get, url) {
            Ok(status) if self.options.allowed_statuses.contains(&status) => None,
            Ok(status) => Some(format!("HTTP {status}")),
            Err(e) => Some(probe_failure_reason(&e)),
        }
    }
}

fn probe_failure_reason(err: &DocGuardError) -> String {
    match err {
        DocGuardError::NetworkProbe { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

fn is_probeable(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

impl Rule for BrokenLinkCheck {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, doc: &Document) -> Result<Vec<Violation>> {
        let slugs: HashSet<String> = doc.headings().iter().map(|h| slugify(&h.text)).collect();
        let mut probed: HashMap<&str, Option<String>> = HashMap::new();
        let mut violations = Vec::new();

        for link in doc.links() {
            let violation = match link.kind {
                LinkKind::Anchor => self.check_anchor(link, &slugs),
                LinkKind::File => self.check_file(doc, link),
                LinkKind::External => {
                    let Some(probe) = self.probe.as_deref() else {
                        continue;
                    };
                    if !self.options.check_external || !is_probeable(&link.target) {
                        continue;
                    }
                    let failure = probed
                        .entry(link.target.as_str())
                        .or_insert_with(|| self.probe_external(probe, &link.target));
                    failure.as_ref().map(|reason| {
                        Violation::new(
                            &self.id,
                            link.line_number,
                            format!("Broken external link: '{}' ({reason}).", link.target),
                        )
                    })
                }
            };
            violations.extend(violation);
        }

        Ok(violations)
    }
}

#[cfg(test)]
#[path = "broken_link_tests.rs"]
mod tests;
