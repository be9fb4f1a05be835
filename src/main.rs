//! Flight Report CLI entry point

use std::process::ExitCode;

use clap::Parser;

use flight_report::cli::{handle_parse_error, run_report, Cli, ReportOptions};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    run_report(ReportOptions::from(cli))
}
