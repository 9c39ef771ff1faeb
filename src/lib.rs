pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod matcher;
pub mod output;
pub mod report;

pub use error::{PrGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PR_GUARD_LOG";

/// Default log filter for the `-v`/`-q` flags.
#[must_use]
pub const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
