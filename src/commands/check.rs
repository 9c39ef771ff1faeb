use crate::cli::{CheckArgs, Cli};
use crate::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
    print_error,
};
use crate::report::{CheckOutcome, Report};
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, load_snapshot, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // Compile the suite before reading the snapshot so config errors surface first.
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let suite = loaded.config.build_suite()?;
    if suite.is_empty() {
        tracing::warn!("no checks configured; run `pr-guard init` to create a config");
    }

    let pr = load_snapshot(&args.snapshot, args.reads_stdin())?;
    tracing::info!(
        files = pr.files().len(),
        labels = pr.labels().len(),
        checks = suite.len(),
        "running checks"
    );
    let report = suite.run(&pr);

    // Files never get escape codes.
    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = format_output(args.format, report.outcomes(), color_mode)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(&report, args.strict, args.warn_only))
}

pub(crate) fn format_output(
    format: OutputFormat,
    outcomes: &[CheckOutcome],
    color_mode: ColorMode,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(outcomes),
        OutputFormat::Json => JsonFormatter.format(outcomes),
        OutputFormat::Markdown => MarkdownFormatter.format(outcomes),
    }
}

/// Errors fail the run; warnings fail only in strict mode; `--warn-only`
/// never fails.
pub(crate) fn exit_code(report: &Report, strict: bool, warn_only: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }
    if report.has_errors() || (strict && report.has_warnings()) {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
