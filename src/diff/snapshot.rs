use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::line::{DiffLine, parse_patch};

/// Insertion/deletion counts for a file or a whole pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffStats {
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffStats {
    pub const ZERO: Self = Self {
        insertions: 0,
        deletions: 0,
    };

    #[must_use]
    pub const fn new(insertions: usize, deletions: usize) -> Self {
        Self {
            insertions,
            deletions,
        }
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.insertions + self.deletions
    }

    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            insertions: self.insertions + other.insertions,
            deletions: self.deletions + other.deletions,
        }
    }
}

/// The diff of one changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    path: String,
    lines: Vec<DiffLine>,
    stats: Option<DiffStats>,
}

impl FileDiff {
    /// Build a file diff from its raw patch text.
    #[must_use]
    pub fn new(path: impl Into<String>, patch: &str) -> Self {
        Self::from_lines(path, parse_patch(patch))
    }

    #[must_use]
    pub fn from_lines(path: impl Into<String>, lines: Vec<DiffLine>) -> Self {
        Self {
            path: path.into(),
            lines,
            stats: None,
        }
    }

    /// Attach the platform-reported counts for this file.
    #[must_use]
    pub const fn with_stats(mut self, stats: DiffStats) -> Self {
        self.stats = Some(stats);
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    /// Platform-reported counts; `None` when the platform omitted them
    /// (huge or binary files).
    #[must_use]
    pub const fn stats(&self) -> Option<DiffStats> {
        self.stats
    }

    pub fn added_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(|line| line.is_added())
    }

    pub fn removed_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(|line| line.is_removed())
    }

    /// Last path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Parent directory, empty for files at the repository root.
    #[must_use]
    pub fn directory(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }
}

/// Read-only view of a pull request: changed files, labels, description and
/// aggregate counts. Built once per run; checkers only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullRequest {
    files: Vec<FileDiff>,
    labels: IndexSet<String>,
    body: String,
    totals: DiffStats,
}

impl PullRequest {
    /// Create a snapshot whose aggregate totals are summed from per-file stats.
    #[must_use]
    pub fn new(files: Vec<FileDiff>) -> Self {
        let totals = files
            .iter()
            .filter_map(FileDiff::stats)
            .fold(DiffStats::ZERO, DiffStats::add);
        Self {
            files,
            labels: IndexSet::new(),
            body: String::new(),
            totals,
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Override the aggregate totals with the platform-reported numbers.
    #[must_use]
    pub const fn with_totals(mut self, totals: DiffStats) -> Self {
        self.totals = totals;
        self
    }

    #[must_use]
    pub fn files(&self) -> &[FileDiff] {
        &self.files
    }

    #[must_use]
    pub const fn labels(&self) -> &IndexSet<String> {
        &self.labels
    }

    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub const fn totals(&self) -> DiffStats {
        self.totals
    }

    /// True if any changed file has exactly this path.
    #[must_use]
    pub fn touches(&self, path: &str) -> bool {
        self.files.iter().any(|file| file.path() == path)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
