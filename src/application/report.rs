//! Generate report use case

use thiserror::Error;

use crate::domain::error::AirtimeParseError;
use crate::domain::flight::AirtimeThreshold;
use crate::domain::report::{LineFormat, OutputText, ResultSet};

use super::ports::{ParseStrategy, RecordSource, ReportSink, SinkError, SourceError};

/// Errors from the report use case
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Airtime(#[from] AirtimeParseError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Input parameters for the report use case
#[derive(Debug, Clone, Default)]
pub struct ReportInput {
    /// Raw `--airtime` value, validated after the records load
    pub airtime: Option<String>,
    /// Prefix each line with `FL_DATE`
    pub include_date: bool,
    /// Print the report to the console sink
    pub enable_display: bool,
}

/// Output from the report use case
#[derive(Debug, Clone)]
pub struct ReportOutput {
    /// The rendered report
    pub text: OutputText,
    /// Whether the output file was written
    pub written: bool,
    /// Whether the report went to the console
    pub displayed: bool,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct ReportCallbacks {
    /// Called with (record count, strategy) after parsing
    pub on_loaded: Option<Box<dyn Fn(usize, ParseStrategy)>>,
    /// Called with (kept, total) after the air-time filter runs
    pub on_filtered: Option<Box<dyn Fn(usize, usize)>>,
    /// Called with the sink target after the output file is written
    pub on_written: Option<Box<dyn Fn(&str)>>,
}

/// Load, filter, format and emit a flight report
pub struct GenerateReportUseCase<S, F, C>
where
    S: RecordSource,
    F: ReportSink,
    C: ReportSink,
{
    source: S,
    file: Option<F>,
    console: C,
}

impl<S, F, C> GenerateReportUseCase<S, F, C>
where
    S: RecordSource,
    F: ReportSink,
    C: ReportSink,
{
    /// Create a new use case instance. Without a file sink no file is written.
    pub fn new(source: S, file: Option<F>, console: C) -> Self {
        Self {
            source,
            file,
            console,
        }
    }

    /// Execute the report pipeline
    pub fn execute(
        &self,
        input: ReportInput,
        callbacks: ReportCallbacks,
    ) -> Result<ReportOutput, ReportError> {
        let loaded = self.source.load()?;
        let total = loaded.records.len();

        if let Some(ref cb) = callbacks.on_loaded {
            cb(total, loaded.strategy);
        }

        let threshold = input
            .airtime
            .as_deref()
            .map(str::parse::<AirtimeThreshold>)
            .transpose()?;

        let results = ResultSet::new(loaded.records).filter_by_airtime(threshold.as_ref());

        if threshold.is_some() {
            if let Some(ref cb) = callbacks.on_filtered {
                cb(results.len(), total);
            }
        }

        let text = LineFormat::new(input.include_date).render(&results);

        // File first, so a failed write never reaches the console
        let written = match self.file {
            Some(ref sink) => {
                sink.emit(&text)?;
                if let Some(ref cb) = callbacks.on_written {
                    cb(&sink.target());
                }
                true
            }
            None => false,
        };

        if input.enable_display {
            self.console.emit(&text)?;
        }

        Ok(ReportOutput {
            text,
            written,
            displayed: input.enable_display,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::LoadedRecords;
    use crate::domain::flight::FlightRecord;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Mock implementations for testing
    struct MockSource {
        result: Result<Vec<FlightRecord>, SourceError>,
    }

    impl MockSource {
        fn with(records: Vec<serde_json::Value>) -> Self {
            Self {
                result: Ok(records.into_iter().map(FlightRecord::from).collect()),
            }
        }

        fn failing(err: SourceError) -> Self {
            Self { result: Err(err) }
        }
    }

    impl RecordSource for MockSource {
        fn load(&self) -> Result<LoadedRecords, SourceError> {
            self.result.clone().map(|records| LoadedRecords {
                records,
                strategy: ParseStrategy::Document,
            })
        }
    }

    #[derive(Clone, Default)]
    struct MockSink {
        emitted: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ReportSink for MockSink {
        fn emit(&self, text: &OutputText) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::WriteFailed("disk full".to_string()));
            }
            self.emitted.borrow_mut().push(text.as_str().to_string());
            Ok(())
        }

        fn target(&self) -> String {
            "mock".to_string()
        }
    }

    fn flights() -> MockSource {
        MockSource::with(vec![
            json!({"AIR_TIME": 30, "DISTANCE": 100, "FL_DATE": "2023-01-01"}),
            json!({"AIR_TIME": 90, "DISTANCE": 500, "FL_DATE": "2023-01-02"}),
        ])
    }

    #[test]
    fn execute_formats_all_records() {
        let use_case = GenerateReportUseCase::new(flights(), None::<MockSink>, MockSink::default());

        let output = use_case
            .execute(ReportInput::default(), ReportCallbacks::default())
            .unwrap();
        assert_eq!(output.text.as_str(), "30 100\n90 500");
        assert_eq!(output.text.line_count(), 2);
        assert!(!output.written);
        assert!(!output.displayed);
    }

    #[test]
    fn execute_with_airtime_and_date() {
        let use_case = GenerateReportUseCase::new(flights(), None::<MockSink>, MockSink::default());
        let input = ReportInput {
            airtime: Some("50".to_string()),
            include_date: true,
            ..Default::default()
        };

        let output = use_case.execute(input, ReportCallbacks::default()).unwrap();
        assert_eq!(output.text.as_str(), "2023-01-02 90 500");
    }

    #[test]
    fn execute_emits_to_file_and_console() {
        let file = MockSink::default();
        let console = MockSink::default();
        let use_case = GenerateReportUseCase::new(flights(), Some(file.clone()), console.clone());
        let input = ReportInput {
            enable_display: true,
            ..Default::default()
        };

        let output = use_case.execute(input, ReportCallbacks::default()).unwrap();
        assert!(output.written);
        assert!(output.displayed);
        assert_eq!(*file.emitted.borrow(), vec!["30 100\n90 500".to_string()]);
        assert_eq!(*console.emitted.borrow(), vec!["30 100\n90 500".to_string()]);
    }

    #[test]
    fn invalid_airtime_fails_before_emitting() {
        let file = MockSink::default();
        let use_case =
            GenerateReportUseCase::new(flights(), Some(file.clone()), MockSink::default());
        let input = ReportInput {
            airtime: Some("abc".to_string()),
            ..Default::default()
        };

        let err = use_case.execute(input, ReportCallbacks::default()).unwrap_err();
        assert!(matches!(err, ReportError::Airtime(_)));
        assert_eq!(err.to_string(), "Airtime must be a number");
        assert!(file.emitted.borrow().is_empty());
    }

    #[test]
    fn source_error_is_reported_before_airtime() {
        let use_case = GenerateReportUseCase::new(
            MockSource::failing(SourceError::NotFound),
            None::<MockSink>,
            MockSink::default(),
        );
        let input = ReportInput {
            airtime: Some("abc".to_string()),
            ..Default::default()
        };

        let err = use_case.execute(input, ReportCallbacks::default()).unwrap_err();
        assert_eq!(err.to_string(), "Cannot find input file");
    }

    #[test]
    fn failed_write_skips_console() {
        let file = MockSink {
            fail: true,
            ..Default::default()
        };
        let console = MockSink::default();
        let use_case = GenerateReportUseCase::new(flights(), Some(file), console.clone());
        let input = ReportInput {
            enable_display: true,
            ..Default::default()
        };

        let err = use_case.execute(input, ReportCallbacks::default()).unwrap_err();
        assert!(matches!(err, ReportError::Sink(SinkError::WriteFailed(_))));
        assert!(console.emitted.borrow().is_empty());
    }

    #[test]
    fn callbacks_report_progress() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let (loaded, filtered, written) = (events.clone(), events.clone(), events.clone());
        let callbacks = ReportCallbacks {
            on_loaded: Some(Box::new(move |n: usize, _: ParseStrategy| {
                loaded.borrow_mut().push(format!("loaded {n}"))
            })),
            on_filtered: Some(Box::new(move |kept: usize, total: usize| {
                filtered.borrow_mut().push(format!("kept {kept}/{total}"))
            })),
            on_written: Some(Box::new(move |target: &str| {
                written.borrow_mut().push(format!("wrote {target}"))
            })),
        };
        let use_case =
            GenerateReportUseCase::new(flights(), Some(MockSink::default()), MockSink::default());
        let input = ReportInput {
            airtime: Some("50".to_string()),
            ..Default::default()
        };

        use_case.execute(input, callbacks).unwrap();
        assert_eq!(
            *events.borrow(),
            vec!["loaded 2", "kept 1/2", "wrote mock"]
        );
    }
}
