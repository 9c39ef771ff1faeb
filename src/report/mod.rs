//! Check outcomes and the sink that collects them.

use serde::{Deserialize, Serialize};

/// Reporting level of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational, never blocks.
    Info,
    Warning,
    /// Blocks merging.
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub message: String,
    pub severity: Severity,
}

impl CheckOutcome {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

/// Sink every checker writes its findings to.
///
/// Implementations must keep call order and must not drop duplicates.
pub trait Reporter {
    fn report(&mut self, message: String, severity: Severity);

    fn error(&mut self, message: String) {
        self.report(message, Severity::Error);
    }

    fn warning(&mut self, message: String) {
        self.report(message, Severity::Warning);
    }

    fn info(&mut self, message: String) {
        self.report(message, Severity::Info);
    }
}

/// In-memory reporter that accumulates outcomes for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<CheckOutcome>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn into_outcomes(self) -> Vec<CheckOutcome> {
        self.outcomes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.severity == severity)
            .count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(CheckOutcome::is_error)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.outcomes.iter().any(CheckOutcome::is_warning)
    }
}

impl Reporter for Report {
    fn report(&mut self, message: String, severity: Severity) {
        self.outcomes.push(CheckOutcome::new(message, severity));
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
