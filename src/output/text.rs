use std::fmt::Write;

use crate::error::Result;
use crate::report::{CheckOutcome, Severity};

use super::{Counts, OutputFormatter, plural, with_severity};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain terminal output: errors, then warnings, then messages, followed by
/// a summary line. Continuation lines of multi-line messages are indented.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    const fn color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_outcome(&self, outcome: &CheckOutcome, output: &mut String) {
        let label = outcome.severity.as_str().to_uppercase();
        let status = self.colorize(&label, Self::color(outcome.severity));
        let mut lines = outcome.message.lines();
        let first = lines.next().unwrap_or_default();
        writeln!(output, "{} {status}: {first}", Self::icon(outcome.severity)).ok();
        for line in lines {
            writeln!(output, "    {line}").ok();
        }
    }

    fn format_summary(&self, counts: Counts) -> String {
        let errors = plural(counts.errors, "error");
        let warnings = plural(counts.warnings, "warning");
        let messages = plural(counts.messages, "message");

        let errors = if counts.errors > 0 {
            self.colorize(&errors, ansi::RED)
        } else {
            errors
        };
        let warnings = if counts.warnings > 0 {
            self.colorize(&warnings, ansi::YELLOW)
        } else {
            warnings
        };
        format!("Summary: {errors}, {warnings}, {messages}")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcomes: &[CheckOutcome]) -> Result<String> {
        let mut output = String::new();

        if outcomes.is_empty() {
            let ok = self.colorize("✓ No issues found.", ansi::GREEN);
            writeln!(output, "{ok}").ok();
        }

        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            for outcome in with_severity(outcomes, severity) {
                self.format_outcome(outcome, &mut output);
            }
        }

        if !outcomes.is_empty() {
            writeln!(output).ok();
        }
        writeln!(output, "{}", self.format_summary(Counts::of(outcomes))).ok();
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
