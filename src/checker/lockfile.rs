use crate::diff::PullRequest;
use crate::report::{Reporter, Severity};

use super::Checker;

/// Flags a dependency manifest changed without its lockfile.
///
/// The lockfile must be changed in the same directory as the manifest, so a
/// monorepo with several `package.json` files is checked per package.
/// A custom message may use `{manifest}` (the changed manifest path) and
/// `{lockfile}` placeholders.
#[derive(Debug, Clone)]
pub struct LockfileCheck {
    manifest: String,
    lockfile: String,
    message: Option<String>,
    severity: Severity,
}

impl LockfileCheck {
    #[must_use]
    pub fn new(manifest: impl Into<String>, lockfile: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            lockfile: lockfile.into(),
            message: None,
            severity: Severity::Warning,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Changed manifest paths whose sibling lockfile was left untouched.
    #[must_use]
    pub fn stale_manifests<'a>(&self, pr: &'a PullRequest) -> Vec<&'a str> {
        pr.files()
            .iter()
            .filter(|file| file.file_name() == self.manifest)
            .filter(|file| {
                let expected = match file.directory() {
                    "" => self.lockfile.clone(),
                    dir => format!("{dir}/{}", self.lockfile),
                };
                let updated = pr.touches(&expected);
                tracing::debug!(manifest = file.path(), lockfile = %expected, updated, "lockfile co-change");
                !updated
            })
            .map(|file| file.path())
            .collect()
    }

    fn message(&self, manifest_path: &str) -> String {
        self.message.as_ref().map_or_else(
            || {
                format!(
                    "`{manifest_path}` was changed without updating its corresponding `{}`. \
                     Please run the appropriate tooling to update the lockfile.",
                    self.lockfile
                )
            },
            |template| {
                template
                    .replace("{manifest}", manifest_path)
                    .replace("{lockfile}", &self.lockfile)
            },
        )
    }
}

impl Checker for LockfileCheck {
    fn name(&self) -> &'static str {
        "lockfile"
    }

    fn check(&self, pr: &PullRequest, reporter: &mut dyn Reporter) {
        for manifest_path in self.stale_manifests(pr) {
            reporter.report(self.message(manifest_path), self.severity);
        }
    }
}

#[cfg(test)]
#[path = "lockfile_tests.rs"]
mod tests;
