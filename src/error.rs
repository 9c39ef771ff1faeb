use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pull request snapshot: {0}")]
    Snapshot(String),
}

impl PrGuardError {
    /// Short category name, used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidRegex { .. } | Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::Json(_) | Self::Snapshot(_) => "Snapshot",
        }
    }

    /// The underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// A hint for fixing the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("run `pr-guard config validate` to check the configuration file")
            }
            Self::InvalidRegex { .. } => Some("patterns use Rust regex syntax"),
            Self::Json(_) | Self::Snapshot(_) => {
                Some("the snapshot must be a JSON object with `labels`, `body` and `files`")
            }
            _ => None,
        }
    }

    /// Builds an `InvalidRegex` error for the given pattern source.
    pub fn invalid_regex(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
