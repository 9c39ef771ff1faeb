//! Pull request snapshot documents.
//!
//! The platform client (CI glue) dumps the pull request as JSON; this module
//! turns that document into a [`PullRequest`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{PrGuardError, Result};

use super::snapshot::{DiffStats, FileDiff, PullRequest};

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    insertions: Option<usize>,
    #[serde(default)]
    deletions: Option<usize>,
    #[serde(default)]
    files: Vec<FileDocument>,
}

#[derive(Debug, Deserialize)]
struct FileDocument {
    path: String,
    #[serde(default)]
    patch: Option<String>,
    #[serde(default)]
    insertions: Option<usize>,
    #[serde(default)]
    deletions: Option<usize>,
}

impl FileDocument {
    fn into_file_diff(self) -> FileDiff {
        let file = FileDiff::new(self.path, self.patch.as_deref().unwrap_or_default());
        // No counts at all means "not reported"; a partial report zero-fills.
        match (self.insertions, self.deletions) {
            (None, None) => file,
            (ins, del) => file.with_stats(DiffStats::new(ins.unwrap_or(0), del.unwrap_or(0))),
        }
    }
}

impl PullRequest {
    /// Parse a snapshot JSON document.
    ///
    /// Aggregate `insertions`/`deletions` fall back to the sum of per-file
    /// stats when the document omits them.
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON, does not match the
    /// snapshot shape, or contains a file with an empty path.
    pub fn from_json(content: &str) -> Result<Self> {
        let doc: SnapshotDocument = serde_json::from_str(content)?;

        if let Some(index) = doc.files.iter().position(|f| f.path.trim().is_empty()) {
            return Err(PrGuardError::Snapshot(format!(
                "files[{index}] has an empty path"
            )));
        }

        let files: Vec<FileDiff> = doc
            .files
            .into_iter()
            .map(FileDocument::into_file_diff)
            .collect();
        let mut pr = Self::new(files)
            .with_labels(doc.labels)
            .with_body(doc.body.unwrap_or_default());

        if doc.insertions.is_some() || doc.deletions.is_some() {
            let summed = pr.totals();
            pr = pr.with_totals(DiffStats::new(
                doc.insertions.unwrap_or(summed.insertions),
                doc.deletions.unwrap_or(summed.deletions),
            ));
        }

        tracing::debug!(
            files = pr.files().len(),
            labels = pr.labels().len(),
            insertions = pr.totals().insertions,
            deletions = pr.totals().deletions,
            "loaded pull request snapshot"
        );
        Ok(pr)
    }

    /// Load a snapshot from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PrGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load a snapshot from any reader (used for stdin).
    ///
    /// # Errors
    /// Returns an error if reading fails or the content cannot be parsed.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
