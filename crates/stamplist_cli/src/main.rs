//! `stamplist` entry point.
//!
//! # Responsibility
//! - Resolve configuration and start logging.
//! - Hand off to the composition root and map its outcome to an exit code.

mod app;
mod cli;
mod config;
mod view;

use app::RunSummary;
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use log::error;
use stamplist_core::init_logging;
use std::process::ExitCode;

const EXIT_OK: u8 = 0;
const EXIT_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    // Logging is diagnostics only; the app still runs without it.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    match app::run(&config, &cli.command, std::io::stdout()) {
        Ok(summary) => {
            for report in &summary.reports {
                eprintln!("warning: {} failed: {}", report.context, report.message);
            }
            ExitCode::from(exit_status(&summary))
        }
        Err(err) => {
            error!("event=app_start module=app status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::from(EXIT_FAILED)
        }
    }
}

/// Any add that did not reach the store fails the run; load errors are warnings only.
fn exit_status(summary: &RunSummary) -> u8 {
    if summary.failed_adds > 0 {
        EXIT_FAILED
    } else {
        EXIT_OK
    }
}
