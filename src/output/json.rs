use serde::Serialize;

use crate::error::Result;
use crate::report::{CheckOutcome, Severity};

use super::{Counts, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    outcomes: Vec<JsonOutcome<'a>>,
}

#[derive(Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    messages: usize,
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    severity: Severity,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcomes: &[CheckOutcome]) -> Result<String> {
        let counts = Counts::of(outcomes);
        let output = JsonOutput {
            summary: Summary {
                errors: counts.errors,
                warnings: counts.warnings,
                messages: counts.messages,
            },
            outcomes: outcomes
                .iter()
                .map(|outcome| JsonOutcome {
                    severity: outcome.severity,
                    message: &outcome.message,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
