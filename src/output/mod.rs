mod error_output;
mod json;
mod markdown;
mod text;

pub use error_output::{ErrorOutput, print_error};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::report::{CheckOutcome, Severity};

/// Renders collected check outcomes.
pub trait OutputFormatter {
    /// Format the outcomes into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, outcomes: &[CheckOutcome]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Per-severity totals shared by every formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Counts {
    errors: usize,
    warnings: usize,
    messages: usize,
}

impl Counts {
    fn of(outcomes: &[CheckOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut counts, outcome| {
                match outcome.severity {
                    Severity::Error => counts.errors += 1,
                    Severity::Warning => counts.warnings += 1,
                    Severity::Info => counts.messages += 1,
                }
                counts
            })
    }
}

/// Outcomes of one severity, keeping report order.
fn with_severity(outcomes: &[CheckOutcome], severity: Severity) -> Vec<&CheckOutcome> {
    outcomes
        .iter()
        .filter(|outcome| outcome.severity == severity)
        .collect()
}

fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
