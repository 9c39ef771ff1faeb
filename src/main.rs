use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pr_guard::cli::{Cli, Commands};
use pr_guard::commands::{run_check, run_config, run_init};
use pr_guard::{LOG_ENV, log_level};

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose, cli.quiet)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(cli.color.enabled_for(std::io::stderr().is_terminal()))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}
