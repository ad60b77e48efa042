//! Ordered collection of test cases with aggregate reporting.

use std::io::{self, Write};
use std::time::Instant;

use crate::buffer::DynamicBuffer;
use crate::case::TestCase;
use crate::config::{self, DisplayMode};
use crate::error::UnitError;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Case limit of a [`TestSuite::bounded`] suite.
pub const MAX_TEST_CASES: usize = 1024;

/// Width of the name column in the per-case console lines.
pub const NAME_COLUMN_WIDTH: usize = 36;

/// Cases run together, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TestSuite {
    cases: Vec<TestCase>,
    fail_count: usize,
    case_limit: Option<usize>,
}

impl TestSuite {
    /// Create an empty suite with no case limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty suite capped at [`MAX_TEST_CASES`].
    #[must_use]
    pub fn bounded() -> Self {
        Self::with_case_limit(MAX_TEST_CASES)
    }

    /// Create an empty suite that refuses to grow past `limit` cases.
    #[must_use]
    pub fn with_case_limit(limit: usize) -> Self {
        Self {
            case_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Append a case.
    pub fn add(&mut self, case: TestCase) -> Result<(), UnitError> {
        self.ensure_room_for(1)?;
        self.cases.push(case);
        Ok(())
    }

    /// Append copies of every case in `other`, keeping their order.
    ///
    /// Nothing is appended when the combined suite would exceed the limit.
    pub fn add_suite(&mut self, other: &TestSuite) -> Result<(), UnitError> {
        self.ensure_room_for(other.cases.len())?;
        self.cases.extend(other.cases.iter().cloned());
        Ok(())
    }

    fn ensure_room_for(&self, additional: usize) -> Result<(), UnitError> {
        if let Some(limit) = self.case_limit
            && self.cases.len() + additional > limit
        {
            return Err(UnitError::SuiteFull { limit });
        }
        Ok(())
    }

    /// Run every case in order and recompute the failure count.
    pub fn run(&mut self) {
        self.fail_count = 0;
        for case in &mut self.cases {
            case.run();
            if case.failed() {
                self.fail_count += 1;
            }
        }
    }

    /// Same as [`run`](Self::run), emitting one log entry per case plus
    /// `suite_start` and `suite_end`.
    ///
    /// Every case runs and is counted even when the log writer fails; the
    /// first write error is returned once the run is complete, and no further
    /// lines are attempted after it.
    pub fn run_logged<W: Write>(&mut self, emitter: &mut LogEmitter<W>) -> Result<(), UnitError> {
        let mut log_err: Option<io::Error> = None;
        let mut emit = |emitter: &mut LogEmitter<W>, entry: LogEntry| {
            if log_err.is_none()
                && let Err(err) = emitter.emit_entry(entry)
            {
                log_err = Some(err);
            }
        };

        emit(
            emitter,
            LogEntry::new("", LogLevel::Info, "suite_start")
                .with_details(serde_json::json!({ "cases": self.cases.len() })),
        );

        self.fail_count = 0;
        for (index, case) in self.cases.iter_mut().enumerate() {
            let started = Instant::now();
            case.run();
            let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

            let entry = match case.message() {
                Some(message) => {
                    self.fail_count += 1;
                    LogEntry::new("", LogLevel::Warn, "case_fail")
                        .with_outcome(Outcome::Fail)
                        .with_message(message)
                }
                None => LogEntry::new("", LogLevel::Info, "case_pass").with_outcome(Outcome::Pass),
            };
            emit(
                emitter,
                entry
                    .with_case(case.name(), index + 1)
                    .with_latency_ns(latency_ns),
            );
        }

        emit(
            emitter,
            LogEntry::new("", LogLevel::Info, "suite_end").with_details(serde_json::json!({
                "runs": self.cases.len(),
                "passes": self.pass_count(),
                "fails": self.fail_count,
            })),
        );

        if let Some(err) = log_err {
            return Err(err.into());
        }
        emitter.flush()?;
        Ok(())
    }

    /// Append one `.` (pass) or `F` (fail) per case, then a blank line.
    pub fn summary(&self, out: &mut DynamicBuffer) {
        for case in &self.cases {
            out.append_char(if case.failed() { 'F' } else { '.' });
        }
        out.append("\n\n");
    }

    /// Append the `OK (...)` line, or the numbered failure list and totals.
    pub fn details(&self, out: &mut DynamicBuffer) {
        if self.fail_count == 0 {
            let pass_count = self.pass_count();
            let test_word = if pass_count == 1 { "test" } else { "tests" };
            out.append_format(format_args!("OK ({pass_count} {test_word})\n"));
            return;
        }

        if self.fail_count == 1 {
            out.append("There was 1 failure:\n");
        } else {
            out.append_format(format_args!("There were {} failures:\n", self.fail_count));
        }

        for (number, case) in self.cases.iter().filter(|c| c.failed()).enumerate() {
            out.append_format(format_args!(
                "{}) {}: {}\n",
                number + 1,
                case.name(),
                case.message().unwrap_or_default()
            ));
        }
        out.append("\n!!!FAILURES!!!\n");

        out.append_format(format_args!(
            "Runs: {} Passes: {} Fails: {}\n",
            self.cases.len(),
            self.pass_count(),
            self.fail_count
        ));
    }

    /// Write one `PASS`/`FAIL` line per case, in registration order.
    pub fn display_details(&self, out: &mut impl Write) -> io::Result<()> {
        for (i, case) in self.cases.iter().enumerate() {
            match case.message() {
                Some(message) if case.failed() => writeln!(
                    out,
                    "{}: {:<width$}  FAIL  {}",
                    i + 1,
                    case.name(),
                    message,
                    width = NAME_COLUMN_WIDTH
                )?,
                _ => writeln!(
                    out,
                    "{}: {:<width$}  PASS",
                    i + 1,
                    case.name(),
                    width = NAME_COLUMN_WIDTH
                )?,
            }
        }
        Ok(())
    }

    /// Render the last run to the console in the given mode.
    pub fn display(&self, mode: DisplayMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            DisplayMode::Details => self.display_details(out),
            DisplayMode::Summary => {
                let mut report = DynamicBuffer::new();
                self.summary(&mut report);
                self.details(&mut report);
                out.write_all(report.as_str().as_bytes())
            }
            DisplayMode::Quiet => Ok(()),
        }
    }

    /// Run the suite, then render it in the environment's display mode.
    pub fn run_and_display(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.run();
        self.display(config::display_mode(), out)
    }

    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Failed cases as of the last run.
    #[must_use]
    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.cases.len() - self.fail_count
    }
}
