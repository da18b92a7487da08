use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a single `[rules]` entry is configured.
///
/// Accepted forms: `"on"` / `"off"`, `true` / `false`, or a table of options with an
/// optional `enabled` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Toggle(bool),
    Switch(String),
    Options(toml::Table),
    Other(toml::Value),
}

/// Resolved state of a [`RuleSetting`].
#[derive(Debug, Clone, PartialEq)]
pub enum RuleState {
    Off,
    /// Enabled, with the rule-specific options (`enabled` removed).
    On(toml::Table),
    Unrecognized,
}

impl RuleSetting {
    #[must_use]
    pub fn resolve(&self) -> RuleState {
        match self {
            Self::Toggle(true) => RuleState::On(toml::Table::new()),
            Self::Toggle(false) => RuleState::Off,
            Self::Switch(value) => match value.as_str() {
                "on" => RuleState::On(toml::Table::new()),
                "off" => RuleState::Off,
                _ => RuleState::Unrecognized,
            },
            Self::Options(table) => {
                let mut options = table.clone();
                match options.remove("enabled") {
                    None | Some(toml::Value::Boolean(true)) => RuleState::On(options),
                    Some(toml::Value::Boolean(false)) => RuleState::Off,
                    Some(_) => RuleState::Unrecognized,
                }
            }
            Self::Other(_) => RuleState::Unrecognized,
        }
    }
}

/// File discovery settings `[scanner]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Extensions of files linted when walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from directory walks.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Rule name → setting, in the order rules are evaluated.
    #[serde(default)]
    pub rules: IndexMap<String, RuleSetting>,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
