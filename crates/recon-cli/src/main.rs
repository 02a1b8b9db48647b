//! Spreadsheet reconciler CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};

use recon_cli::cli::{Cli, Command, LogFormatArg};
use recon_cli::commands::{run_common, run_compare, run_dates, run_delta, run_reconcile};
use recon_cli::logging::{LogConfig, LogFormat, init_logging};
use recon_cli::summary::{
    print_common, print_comparison, print_dates, print_delta, print_reconcile,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Compare(args) => print_comparison(&run_compare(args)?),
        Command::Common(args) => print_common(&run_common(args)?),
        Command::Delta(args) => print_delta(&run_delta(args)?),
        Command::Dates(args) => print_dates(&run_dates(args)?),
        Command::Reconcile(args) => print_reconcile(&run_reconcile(args)?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
