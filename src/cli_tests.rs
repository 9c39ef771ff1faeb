use std::path::PathBuf;

use clap::Parser;

use super::*;

fn check_args(cli: Cli) -> CheckArgs {
    match cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_requires_snapshot() {
    assert!(Cli::try_parse_from(["pr-guard", "check"]).is_err());
}

#[test]
fn cli_check_defaults() {
    let args = check_args(Cli::parse_from(["pr-guard", "check", "pr.json"]));

    assert_eq!(args.snapshot, PathBuf::from("pr.json"));
    assert_eq!(args.config, None);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.output.is_none());
    assert!(!args.strict);
    assert!(!args.warn_only);
    assert!(!args.reads_stdin());
}

#[test]
fn cli_check_dash_reads_stdin() {
    let args = check_args(Cli::parse_from(["pr-guard", "check", "-"]));
    assert!(args.reads_stdin());
}

#[test]
fn cli_check_with_options() {
    let args = check_args(Cli::parse_from([
        "pr-guard",
        "check",
        "pr.json",
        "--config",
        "custom.toml",
        "-f",
        "markdown",
        "-o",
        "comment.md",
        "--strict",
    ]));

    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.format, OutputFormat::Markdown);
    assert_eq!(args.output, Some(PathBuf::from("comment.md")));
    assert!(args.strict);
}

#[test]
fn cli_check_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["pr-guard", "check", "pr.json", "-f", "sarif"]).is_err());
}

#[test]
fn cli_strict_conflicts_with_warn_only() {
    assert!(
        Cli::try_parse_from(["pr-guard", "check", "pr.json", "--strict", "--warn-only"]).is_err()
    );
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from([
        "pr-guard",
        "check",
        "pr.json",
        "-vv",
        "--color",
        "never",
        "--no-config",
    ]);

    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["pr-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".pr-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate() {
    let cli = Cli::parse_from(["pr-guard", "config", "validate", "-c", "ci.toml"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from("ci.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}

#[test]
fn color_choice_enabled_for_stream() {
    assert!(ColorChoice::Always.enabled_for(false));
    assert!(!ColorChoice::Never.enabled_for(true));
    assert!(!ColorChoice::Auto.enabled_for(false));
}
