use std::fs;

use crate::cli::InitArgs;
use crate::output::ErrorOutput;
use crate::{DocGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, state};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr().print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DocGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    state::ensure_parent_dir(output_path)?;
    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# doc-guard configuration file

# Rules run in the order listed. Each rule accepts "on" / "off", true / false,
# or a table of options (add `enabled = false` to keep options but skip the rule).
[rules]
# Require a heading that mentions "License".
require-section-license = "on"

# Top-level sections (# and ##) must follow this order. Headings match a label
# when they contain it, ignoring case. Missing or unlisted sections are fine.
section-order = { order = ["About", "Installation", "Usage", "License"] }

# Check anchor (#heading) and relative file links. External http(s) links are
# only probed with check_external = true or `doc-guard lint --check-external`.
[rules.broken-link-check]
check_external = false
timeout = 3.0
# Statuses accepted when a HEAD request fails and GET is retried.
allowed_statuses = [200, 201, 202, 203, 204, 205, 206, 301, 302, 303, 307, 308]

[scanner]
# Extensions linted when walking directories.
extensions = ["md", "markdown"]

# Glob patterns excluded from directory walks, relative to each walked path.
exclude = ["**/node_modules/**", "**/target/**", "**/vendor/**"]

# Respect .gitignore files.
gitignore = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
