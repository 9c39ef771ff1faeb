//! Semantic checks that serde cannot express.
//!
//! Pattern syntax is checked later, when the config is compiled into a suite.

use crate::config::Config;
use crate::{PrGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a topic has no name or a lockfile rule is incomplete
/// or names the same file twice.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_topics(config)?;
    validate_lockfiles(config)?;
    Ok(())
}

fn validate_topics(config: &Config) -> Result<()> {
    for (i, topic) in config.topics.iter().enumerate() {
        if topic.name.trim().is_empty() {
            return Err(PrGuardError::Config(format!(
                "topic[{i}].name must not be empty"
            )));
        }
        if topic.files.is_empty() && topic.content.is_empty() {
            tracing::warn!(topic = %topic.name, "topic has no files or content patterns and never triggers");
        }
    }
    Ok(())
}

fn validate_lockfiles(config: &Config) -> Result<()> {
    for (i, rule) in config.lockfiles.iter().enumerate() {
        if rule.manifest.is_empty() || rule.lockfile.is_empty() {
            return Err(PrGuardError::Config(format!(
                "lockfile[{i}] needs both `manifest` and `lockfile`"
            )));
        }
        if rule.manifest.contains('/') || rule.lockfile.contains('/') {
            return Err(PrGuardError::Config(format!(
                "lockfile[{i}]: `manifest` and `lockfile` are file names, not paths"
            )));
        }
        if rule.manifest == rule.lockfile {
            return Err(PrGuardError::Config(format!(
                "lockfile[{i}]: manifest and lockfile are both '{}'",
                rule.manifest
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
