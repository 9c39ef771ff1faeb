use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PrGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PrGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# pr-guard configuration file
# Every section is optional; a missing section disables that check.
version = "1"

# Warn when a PR changes too many lines.
[size]
max_lines = 500
# insertions, deletions or total (default)
metric = "total"
# Count only some files (globs). Leave both empty to use the PR totals.
# include = ["src/**"]
exclude = ["**/*.lock", "**/package-lock.json"]
# severity = "error"

# Warn when the PR description is too short.
[body]
min_length = 10

[labels]
# Any of these labels (ignoring case) blocks the PR.
do_not_merge = ["Do Not Merge", "WIP"]
# Regexes; each must match at least one label. "" means "any label".
required = [""]
# recommended = ["^type:"]
# recommended_message = "Please add a `type:` label."

# Require tests for new classes (Java/Kotlin defaults shown).
# [missing_tests]
# test_paths = ['(^|/)(test|androidTest)/.*\.(java|kt)$']
# class_exceptions = ['ViewHolder$', 'Module$', 'Tag$']
# subclass_exceptions = ['(Fragment|Activity)\b', 'RecyclerView']
# bypass_label = "unit-tests-exemption"

# Ask for extra review when a sensitive area changes.
# [[topic]]
# name = "analytics"
# files = ["app/src/main/java/org/app/AnalyticsTracker.kt"]
# content = ['AnalyticsTracker\.track\(']
# label = "Tracks"
# instructions = "This PR contains changes to analytics events. Please verify the events fire as expected."

# Dependency manifests must be committed with their lockfile.
[[lockfile]]
manifest = "package.json"
lockfile = "package-lock.json"

[[lockfile]]
manifest = "Cargo.toml"
lockfile = "Cargo.lock"
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
