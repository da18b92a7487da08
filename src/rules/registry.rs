use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use super::{BrokenLinkCheck, BrokenLinkOptions, RequireSectionLicense, Rule, SectionOrder};
use crate::config::{RuleSetting, RuleState};
use crate::{DocGuardError, Result};

const BROKEN_LINK_CHECK: &str = "broken-link-check";

type RuleFactory = fn(&str, toml::Table) -> Result<Box<dyn Rule>>;

/// Registration table: configuration name → constructor.
const RULE_FACTORIES: &[(&str, RuleFactory)] = &[
    ("require-section-license", build_require_section_license),
    ("section-order", build_section_order),
    (BROKEN_LINK_CHECK, build_broken_link_check),
];

/// Names of all rules that can be enabled in configuration.
#[must_use]
pub fn available_rules() -> Vec<&'static str> {
    RULE_FACTORIES.iter().map(|(name, _)| *name).collect()
}

fn find_factory(name: &str) -> Option<RuleFactory> {
    RULE_FACTORIES
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, factory)| *factory)
}

fn parse_options<T: DeserializeOwned>(name: &str, options: toml::Table) -> Result<T> {
    toml::Value::Table(options)
        .try_into()
        .map_err(|e| DocGuardError::Config(format!("invalid options for rule '{name}': {e}")))
}

fn build_require_section_license(_name: &str, _options: toml::Table) -> Result<Box<dyn Rule>> {
    Ok(Box::new(RequireSectionLicense::new()))
}

fn build_section_order(name: &str, options: toml::Table) -> Result<Box<dyn Rule>> {
    Ok(Box::new(SectionOrder::new(parse_options(name, options)?)))
}

fn build_broken_link_check(name: &str, options: toml::Table) -> Result<Box<dyn Rule>> {
    let options: BrokenLinkOptions = parse_options(name, options)?;
    Ok(Box::new(BrokenLinkCheck::new(options)?))
}

/// Turns the `[rules]` configuration table into instantiated rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    force_check_external: bool,
}

impl RuleSetBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            force_check_external: false,
        }
    }

    /// Turn external link probing on for an enabled `broken-link-check`.
    #[must_use]
    pub const fn with_check_external(mut self, enabled: bool) -> Self {
        self.force_check_external = enabled;
        self
    }

    /// The `[rules]` table with command-line overrides applied.
    ///
    /// This is what [`RuleSetBuilder::build`] instantiates, so it is also what cached
    /// results must be keyed on.
    #[must_use]
    pub fn effective_settings(
        &self,
        rules: &IndexMap<String, RuleSetting>,
    ) -> IndexMap<String, RuleSetting> {
        let mut effective = rules.clone();
        if !self.force_check_external {
            return effective;
        }
        if let Some(setting) = effective.get_mut(BROKEN_LINK_CHECK)
            && let RuleState::On(mut options) = setting.resolve()
        {
            options.insert("check_external".to_string(), toml::Value::Boolean(true));
            *setting = RuleSetting::Options(options);
        }
        effective
    }

    /// Instantiate every enabled rule, in configuration order.
    ///
    /// Unknown rule names and unrecognized settings are skipped with a warning.
    ///
    /// # Errors
    /// Returns a `Config` error if an enabled rule has invalid options.
    pub fn build(&self, rules: &IndexMap<String, RuleSetting>) -> Result<Vec<Box<dyn Rule>>> {
        let mut built = Vec::new();

        for (name, setting) in &self.effective_settings(rules) {
            let Some(factory) = find_factory(name) else {
                log::warn!("Ignoring unknown rule '{name}'");
                continue;
            };

            let options = match setting.resolve() {
                RuleState::Off => {
                    log::debug!("Rule '{name}' is disabled");
                    continue;
                }
                RuleState::On(options) => options,
                RuleState::Unrecognized => {
                    log::warn!("Ignoring rule '{name}': unrecognized setting {setting:?}");
                    continue;
                }
            };

            built.push(factory(name, options)?);
        }

        Ok(built)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
