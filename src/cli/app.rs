//! Main app runner

use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};

use crate::application::ports::ParseStrategy;
use crate::application::{GenerateReportUseCase, ReportCallbacks, ReportInput};
use crate::infrastructure::{ConsoleSink, FileSink, JsonFileSource};

use super::args::ReportOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the report pipeline
pub fn run_report(options: ReportOptions) -> ExitCode {
    let presenter = Presenter::new(options.verbose);

    let source = JsonFileSource::new(&options.input);
    let file = options.output.as_ref().map(FileSink::new);
    let use_case = GenerateReportUseCase::new(source, file, ConsoleSink::new());

    let input = ReportInput {
        airtime: options.airtime,
        include_date: options.include_date,
        enable_display: options.display,
    };

    let callbacks = ReportCallbacks {
        on_loaded: Some(Box::new(move |count: usize, strategy: ParseStrategy| {
            presenter.info(&presenter.format_loaded(count, strategy.label()));
        })),
        on_filtered: Some(Box::new(move |kept: usize, total: usize| {
            presenter.info(&presenter.format_filtered(kept, total));
        })),
        on_written: Some(Box::new(move |target: &str| {
            presenter.info(&format!("Wrote {}", target));
        })),
    };

    match use_case.execute(input, callbacks) {
        Ok(output) => {
            presenter.info(&presenter.format_emitted(
                output.text.line_count(),
                output.written,
                output.displayed,
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Report an argument parsing failure and pick the exit code.
///
/// Help and version requests print through clap and succeed.
pub fn handle_parse_error(err: clap::Error) -> ExitCode {
    match usage_message(&err) {
        Some(message) => {
            Presenter::default().error(&message);
            ExitCode::from(EXIT_ERROR)
        }
        None => {
            let _ = err.print();
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// One-line message for a usage error, or `None` for help/version output
pub fn usage_message(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::MissingRequiredArgument | ErrorKind::InvalidValue => {
            let arg = invalid_arg(err);
            if arg.contains("--input") {
                Some("Please, specify input file".to_string())
            } else if arg.contains("--output") {
                Some("Please, specify output file path".to_string())
            } else if arg.contains("--airtime") {
                Some("Please, specify airtime value".to_string())
            } else {
                Some(first_line(err))
            }
        }
        _ => Some(first_line(err)),
    }
}

fn invalid_arg(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        Some(ContextValue::Strings(args)) => args.join(" "),
        _ => String::new(),
    }
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
