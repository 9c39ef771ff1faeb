use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PrGuardError, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(checks) => {
            println!(
                "Configuration is valid: {} ({checks} check(s) enabled)",
                config_path.display()
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Parses, validates and compiles a configuration file, returning the
/// number of checks it enables.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, has
/// semantic errors, or contains a pattern that does not compile.
pub fn run_config_validate_impl(config_path: &Path) -> Result<usize> {
    if !config_path.exists() {
        return Err(PrGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let loaded = FileConfigLoader::new().load_from_path(config_path)?;
    let suite = loaded.config.build_suite()?;
    Ok(suite.len())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
