use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether a stream should get ANSI colors. `Auto` honors `NO_COLOR`
    /// and requires a terminal.
    #[must_use]
    pub fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pr-guard")]
#[command(author, version, about = "Pull request guard - automated review checks for PR diffs")]
#[command(long_about = "Runs configurable review checks (size, labels, missing tests, \
    sensitive topics, lockfiles) against a pull request snapshot.\n\n\
    Exit codes:\n  \
    0 - No errors reported\n  \
    1 - Errors reported (or warnings with --strict)\n  \
    2 - Configuration or input error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured checks against a pull request snapshot
    Check(CheckArgs),

    /// Generate a starter configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Pull request snapshot JSON file, or `-` to read stdin
    pub snapshot: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long, conflicts_with = "warn_only")]
    pub strict: bool,

    /// Report findings but always exit 0
    #[arg(long)]
    pub warn_only: bool,
}

impl CheckArgs {
    /// True if the snapshot should be read from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.snapshot.as_os_str() == "-"
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".pr-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Parse and compile a configuration file
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".pr-guard.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
