use serde::{Deserialize, Serialize};

use crate::checker::{
    BodyLengthCheck, DEFAULT_BYPASS_LABEL, DEFAULT_CLASS_EXCEPTIONS, DEFAULT_NO_LABEL_INSTRUCTION,
    DEFAULT_NO_LABEL_MESSAGE, DEFAULT_SUBCLASS_EXCEPTIONS, SizeMetric,
};
use crate::matcher::DEFAULT_TEST_PATH_PATTERNS;
use crate::report::Severity;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root of `.pr-guard.toml`. Every section is optional; a missing section
/// disables the corresponding check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_tests: Option<MissingTestsConfig>,

    /// `[[topic]]` entries, run in file order.
    #[serde(default, rename = "topic", skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<TopicConfig>,

    /// `[[lockfile]]` entries, run in file order.
    #[serde(default, rename = "lockfile", skip_serializing_if = "Vec::is_empty")]
    pub lockfiles: Vec<LockfileConfig>,
}

/// `[size]`: maximum diff size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SizeConfig {
    pub max_lines: usize,

    #[serde(default)]
    pub metric: SizeMetric,

    /// Globs selecting the files that count. Empty means every file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default = "default_warning")]
    pub severity: Severity,
}

impl SizeConfig {
    /// True if file globs narrow down which files are measured.
    #[must_use]
    pub fn has_file_filter(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }
}

/// `[body]`: minimum description length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default = "default_warning")]
    pub severity: Severity,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            message: None,
            severity: Severity::Warning,
        }
    }
}

/// `[labels]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LabelsConfig {
    /// Labels that block merging, compared ignoring case.
    #[serde(default)]
    pub do_not_merge: Vec<String>,

    /// Regexes; each must match at least one PR label.
    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,

    #[serde(default)]
    pub recommended: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_message: Option<String>,
}

/// `[missing_tests]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MissingTestsConfig {
    #[serde(default = "default_test_paths")]
    pub test_paths: Vec<String>,

    #[serde(default = "default_class_exceptions")]
    pub class_exceptions: Vec<String>,

    #[serde(default = "default_subclass_exceptions")]
    pub subclass_exceptions: Vec<String>,

    #[serde(default = "default_bypass_label")]
    pub bypass_label: String,
}

impl Default for MissingTestsConfig {
    fn default() -> Self {
        Self {
            test_paths: default_test_paths(),
            class_exceptions: default_class_exceptions(),
            subclass_exceptions: default_subclass_exceptions(),
            bypass_label: default_bypass_label(),
        }
    }
}

/// `[[topic]]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TopicConfig {
    pub name: String,

    /// Exact paths of sensitive files.
    #[serde(default)]
    pub files: Vec<String>,

    /// Regexes matched against added and removed lines.
    #[serde(default)]
    pub content: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Defaults to a generic note naming the topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default = "default_no_label_instruction")]
    pub no_label_instruction: String,

    #[serde(default = "default_no_label_message")]
    pub no_label_message: String,
}

impl TopicConfig {
    #[must_use]
    pub fn instructions(&self) -> String {
        self.instructions.clone().unwrap_or_else(|| {
            format!(
                "This PR contains changes to {}. Please make sure they were reviewed.",
                self.name
            )
        })
    }
}

/// `[[lockfile]]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LockfileConfig {
    pub manifest: String,
    pub lockfile: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default = "default_warning")]
    pub severity: Severity,
}

const fn default_warning() -> Severity {
    Severity::Warning
}

const fn default_min_length() -> usize {
    BodyLengthCheck::DEFAULT_MIN_LENGTH
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_test_paths() -> Vec<String> {
    to_strings(DEFAULT_TEST_PATH_PATTERNS)
}

fn default_class_exceptions() -> Vec<String> {
    to_strings(DEFAULT_CLASS_EXCEPTIONS)
}

fn default_subclass_exceptions() -> Vec<String> {
    to_strings(DEFAULT_SUBCLASS_EXCEPTIONS)
}

fn default_bypass_label() -> String {
    DEFAULT_BYPASS_LABEL.to_string()
}

fn default_no_label_instruction() -> String {
    DEFAULT_NO_LABEL_INSTRUCTION.to_string()
}

fn default_no_label_message() -> String {
    DEFAULT_NO_LABEL_MESSAGE.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
