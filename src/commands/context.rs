use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::diff::PullRequest;

/// Load configuration: an explicit path, else the discovered file, else
/// defaults. `--no-config` skips discovery entirely.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            path: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Read the pull request snapshot from a file, or stdin for `-`.
///
/// # Errors
/// Returns an error if the snapshot cannot be read or parsed.
pub(crate) fn load_snapshot(path: &Path, from_stdin: bool) -> crate::Result<PullRequest> {
    if from_stdin {
        tracing::debug!("reading snapshot from stdin");
        return PullRequest::from_reader(std::io::stdin().lock());
    }
    PullRequest::load(path)
}

/// Write to `output_path` (creating parent directories), else stdout unless quiet.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
