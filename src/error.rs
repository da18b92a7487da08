use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File is not valid UTF-8: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule '{rule}' failed: {message}")]
    RuleEvaluation { rule: String, message: String },

    #[error("Network probe failed for {url}: {message}")]
    NetworkProbe { url: String, message: String },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DocGuardError {
    /// Map an I/O error on `path` to `NotFound` or `FileRead`.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    /// Short category name used in user-facing error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::NotFound { .. } => "NotFound",
            Self::Decode { .. } => "Decode",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::RuleEvaluation { .. } => "Rule",
            Self::NetworkProbe { .. } => "Network",
            Self::InvalidPattern { .. } => "Pattern",
            Self::ThreadPool(_) => "Runtime",
            Self::JsonSerialize(_) => "Serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, DocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
