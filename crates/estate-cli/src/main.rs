//! Real-estate listing ETL CLI.

use clap::{ColorChoice, Parser};
use estate_cli::logging::{LogConfig, LogFormat, init_logging};
use estate_cli::summary::{print_report, print_validation};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, RunArgs};
use crate::commands::{run_pipeline, run_sample, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run_pipeline(&args) {
            Ok(report) => {
                show_report(&args, &report);
                0
            }
            Err(error) => fail(&error),
        },
        Command::Validate(args) => match run_validate(&args) {
            Ok(result) => {
                print_validation(&result);
                if result.passed { 0 } else { 1 }
            }
            Err(error) => fail(&error),
        },
        Command::Sample(args) => match run_sample(&args) {
            Ok(path) => {
                println!("Sample data written to {}", path.display());
                0
            }
            Err(error) => fail(&error),
        },
    };
    std::process::exit(exit_code);
}

fn show_report(args: &RunArgs, report: &estate_core::SummaryReport) {
    if args.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("error: failed to encode report: {error}"),
        }
    } else {
        print_report(report);
    }
}

fn fail(error: &anyhow::Error) -> i32 {
    error!("command failed: {error:#}");
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
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
