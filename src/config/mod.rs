mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{Config, RuleSetting, RuleState, ScannerConfig};

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

/// Hash of the rule settings that determine lint results.
///
/// Pass the settings actually in effect (after command-line overrides). Scanner
/// settings are not part of it: they change which files are linted, not the
/// violations a given file produces.
#[must_use]
pub fn compute_rules_hash(rules: &IndexMap<String, RuleSetting>) -> String {
    let json = serde_json::to_string(rules).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    format!("{:x}", hasher.finalize())
}
