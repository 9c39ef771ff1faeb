use std::fmt;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::diff::{DiffStats, FileDiff, PullRequest};
use crate::error::{PrGuardError, Result};
use crate::report::{Reporter, Severity};

use super::Checker;

/// Which count a size check compares against its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMetric {
    Insertions,
    Deletions,
    #[default]
    Total,
}

impl SizeMetric {
    #[must_use]
    pub const fn of(self, stats: DiffStats) -> usize {
        match self {
            Self::Insertions => stats.insertions,
            Self::Deletions => stats.deletions,
            Self::Total => stats.total(),
        }
    }
}

/// Predicate choosing which changed files count toward a size limit.
pub struct FileSelector(Box<dyn Fn(&FileDiff) -> bool + Send + Sync>);

impl FileSelector {
    pub fn new(predicate: impl Fn(&FileDiff) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// Select files matching any `include` glob (all files when empty) and
    /// no `exclude` glob.
    ///
    /// # Errors
    /// Returns an error if any glob pattern is invalid.
    pub fn from_globs(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = build_globset(include)?;
        let exclude = build_globset(exclude)?;
        Ok(Self::new(move |file| {
            let path = file.path();
            (include.is_empty() || include.is_match(path)) && !exclude.is_match(path)
        }))
    }

    #[must_use]
    pub fn selects(&self, file: &FileDiff) -> bool {
        (self.0)(file)
    }
}

impl fmt::Debug for FileSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FileSelector(..)")
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| PrGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| PrGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

/// Reports when the diff grows past `max_size` lines.
#[derive(Debug)]
pub struct DiffSizeCheck {
    max_size: usize,
    selector: Option<FileSelector>,
    metric: SizeMetric,
    message: Option<String>,
    severity: Severity,
}

impl DiffSizeCheck {
    #[must_use]
    pub const fn new(max_size: usize) -> Self {
        Self {
            max_size,
            selector: None,
            metric: SizeMetric::Total,
            message: None,
            severity: Severity::Warning,
        }
    }

    #[must_use]
    pub fn with_selector(mut self, selector: FileSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    #[must_use]
    pub const fn with_metric(mut self, metric: SizeMetric) -> Self {
        self.metric = metric;
        self
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

    /// Size of the pull request under this check's metric.
    ///
    /// Without a selector the platform aggregate is used as is. With one,
    /// selected files are summed and files lacking stats count as zero.
    #[must_use]
    pub fn measure(&self, pr: &PullRequest) -> usize {
        let Some(selector) = &self.selector else {
            return self.metric.of(pr.totals());
        };
        pr.files()
            .iter()
            .filter(|file| selector.selects(file))
            .map(|file| self.metric.of(file.stats().unwrap_or(DiffStats::ZERO)))
            .sum()
    }

    fn message(&self) -> String {
        self.message.clone().unwrap_or_else(|| {
            format!(
                "This PR is larger than {} lines of changes. Please consider splitting it into smaller PRs for easier and faster reviews.",
                self.max_size
            )
        })
    }
}

impl Checker for DiffSizeCheck {
    fn name(&self) -> &'static str {
        "diff-size"
    }

    fn check(&self, pr: &PullRequest, reporter: &mut dyn Reporter) {
        let size = self.measure(pr);
        tracing::debug!(
            size,
            max_size = self.max_size,
            metric = ?self.metric,
            "measured diff size"
        );
        if size > self.max_size {
            reporter.report(self.message(), self.severity);
        }
    }
}

/// Reports when the pull request description is too short.
#[derive(Debug, Clone)]
pub struct BodyLengthCheck {
    min_length: usize,
    message: Option<String>,
    severity: Severity,
}

impl BodyLengthCheck {
    pub const DEFAULT_MIN_LENGTH: usize = 10;

    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self {
            min_length,
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

    fn message(&self) -> String {
        self.message.clone().unwrap_or_else(|| {
            format!(
                "The PR description appears very short, less than {} characters long. Please provide a summary of your changes in the PR description.",
                self.min_length
            )
        })
    }
}

impl Default for BodyLengthCheck {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH)
    }
}

impl Checker for BodyLengthCheck {
    fn name(&self) -> &'static str {
        "body-length"
    }

    fn check(&self, pr: &PullRequest, reporter: &mut dyn Reporter) {
        // A body exactly `min_length` long still fails.
        if pr.body().chars().count() <= self.min_length {
            reporter.report(self.message(), self.severity);
        }
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
