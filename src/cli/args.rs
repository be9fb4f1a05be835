//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// Flight Report - filter and format flight records
#[derive(Parser, Debug)]
#[command(name = "flight-report")]
#[command(version)]
#[command(about = "Filter and format flight records from a JSON or JSON-lines file")]
#[command(long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Input JSON file (required)
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Display output to console
    #[arg(short = 'd', long)]
    pub display: bool,

    /// Show only flights with AIR_TIME longer than value
    #[arg(short = 'a', long, value_name = "NUMBER", allow_negative_numbers = true)]
    pub airtime: Option<String>,

    /// Show FL_DATE before AIR_TIME and DISTANCE
    #[arg(short = 't', long)]
    pub date: bool,

    /// Print progress notes to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Parsed report options
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub display: bool,
    pub airtime: Option<String>,
    pub include_date: bool,
    pub verbose: bool,
}

impl From<Cli> for ReportOptions {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            display: cli.display,
            airtime: cli.airtime,
            include_date: cli.date,
            verbose: cli.verbose,
        }
    }
}
