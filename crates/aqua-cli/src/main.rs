//! `aqua-clean`: clean an uploaded ocean or fish survey CSV.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use aqua_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use aqua_cli::commands::{CleanRequest, error_json, run_clean};
use aqua_cli::logging::{LogConfig, LogFormat, init_logging};
use aqua_cli::summary::print_summary;
use aqua_output::write_json;
use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use tracing::debug;
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("{}", error_json(&usage_message(&err)));
            return ExitCode::from(2);
        }
    };
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(err) = init_logging(&log_config) {
        eprintln!("{}", error_json(&format!("failed to initialize logging: {err}")));
        return ExitCode::FAILURE;
    }

    let request = CleanRequest::from(&cli);
    let result = run_clean(&request).and_then(|outcome| {
        write_json(&outcome.records, io::stdout().lock())?;
        Ok(outcome)
    });
    match result {
        Ok(outcome) => {
            if cli.summary {
                print_summary(&outcome.report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("{err:#}");
            debug!(error = %message, "cleaning failed");
            eprintln!("{}", error_json(&message));
            ExitCode::FAILURE
        }
    }
}

/// First line of a clap error without its `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let details: Vec<&str> = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:"))
        .filter(|line| !line.is_empty())
        .collect();
    let message = details.join(" ");
    message
        .strip_prefix("error: ")
        .map_or_else(|| message.clone(), str::to_string)
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
