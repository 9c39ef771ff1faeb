use std::fmt::Write;

use crate::error::Result;
use crate::report::{CheckOutcome, Severity};

use super::{Counts, OutputFormatter, with_severity};

/// Markdown suitable for a pull request comment.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn heading(severity: Severity) -> (&'static str, &'static str) {
        match severity {
            Severity::Error => ("❌", "Errors"),
            Severity::Warning => ("⚠️", "Warnings"),
            Severity::Info => ("📖", "Messages"),
        }
    }

    fn write_section(output: &mut String, severity: Severity, outcomes: &[&CheckOutcome]) {
        if outcomes.is_empty() {
            return;
        }
        let (icon, title) = Self::heading(severity);
        writeln!(output, "### {icon} {title}\n").ok();
        writeln!(output, "| | Message |").ok();
        writeln!(output, "|---|---|").ok();
        for outcome in outcomes {
            writeln!(output, "| {icon} | {} |", escape_cell(&outcome.message)).ok();
        }
        writeln!(output).ok();
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, outcomes: &[CheckOutcome]) -> Result<String> {
        let mut output = String::new();
        let counts = Counts::of(outcomes);

        writeln!(output, "## PR Guard Results\n").ok();
        if outcomes.is_empty() {
            writeln!(output, "✅ No issues found.").ok();
            return Ok(output);
        }

        writeln!(output, "| ❌ Errors | ⚠️ Warnings | 📖 Messages |").ok();
        writeln!(output, "|------:|------:|------:|").ok();
        writeln!(
            output,
            "| {} | {} | {} |\n",
            counts.errors, counts.warnings, counts.messages
        )
        .ok();

        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            Self::write_section(&mut output, severity, &with_severity(outcomes, severity));
        }

        Ok(output)
    }
}

/// Table cells cannot hold raw pipes or newlines.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
