//! Colored error reporting on stderr.
//!
//! Format: `✖ Error Type: message`, then `  × detail` and `  help: suggestion`
//! when available.

use std::io::{IsTerminal, Write};

use crate::error::PrGuardError;

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Auto-detect color support on stderr, honoring `NO_COLOR`.
    #[must_use]
    pub fn stderr() -> Self {
        let use_colors =
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        Self::with_colors(use_colors)
    }

    pub fn print(&self, error: &PrGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Write errors are dropped: there is nowhere left to report them.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &PrGuardError) {
        let error_type = error.error_type();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {error}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {error}");
        }

        if let Some(detail) = error.detail() {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {detail}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {detail}");
            }
        }

        if let Some(help) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {help}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {help}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Print an error to stderr with auto-detected colors.
pub fn print_error(error: &PrGuardError) {
    ErrorOutput::stderr().print(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
