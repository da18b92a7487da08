//! Error and warning output on stderr.
//!
//! Format: `✖ Type: message`, then `  × detail` and `  help: suggestion` when available.

use std::error::Error as _;
use std::io::Write;

use super::{ColorMode, ansi};
use crate::error::DocGuardError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.for_stderr(),
        }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print `error` with its underlying cause and a hint, if one applies.
    pub fn print(&self, error: &DocGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write(&mut stderr, error);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    pub fn write<W: Write>(&self, w: &mut W, error: &DocGuardError) {
        let detail = error.source().map(ToString::to_string);
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            suggestion_for(error),
        );
    }

    /// Write errors to stderr are discarded: there is nowhere left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

const fn suggestion_for(error: &DocGuardError) -> Option<&'static str> {
    match error {
        DocGuardError::TomlParse(_) => Some("Check the TOML syntax of your .doc-guard.toml"),
        DocGuardError::Config(_) => {
            Some("Run 'doc-guard init' to see every rule and its options")
        }
        DocGuardError::InvalidPattern { .. } => {
            Some("Check the glob syntax in [scanner] exclude")
        }
        DocGuardError::FileRead { .. } | DocGuardError::Io(_) => {
            Some("Check file permissions, or disable caching with --no-cache")
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
