//! Minimal unit-testing engine.
//!
//! This crate provides:
//! - [`DynamicBuffer`]: growable text buffer for messages and reports
//! - Assertion engine: `#[track_caller]` assertions on [`TestCase`]
//! - [`TestCase`]: one named test with abort-on-first-failure semantics
//! - [`TestSuite`]: ordered cases, `.`/`F` summary and failure details
//! - Structured JSONL run logs and machine-readable reports

#![forbid(unsafe_code)]

pub mod assert;
pub mod buffer;
pub mod case;
pub mod config;
pub mod error;
pub mod placeholder;
pub mod report;
pub mod structured_log;
pub mod suite;

pub use buffer::DynamicBuffer;
pub use case::{Abort, CaseState, TestCase, TestFn, TestResult};
pub use config::DisplayMode;
pub use error::UnitError;
pub use report::SuiteReport;
pub use suite::TestSuite;

/// Framework name and version, as printed by hosting programs.
pub const VERSION: &str = "UnitTest 42.01";

/// Register a test function under its own identifier.
///
/// Expands to `suite.add(TestCase::new("name", name))` and yields its result.
#[macro_export]
macro_rules! suite_add_test {
    ($suite:expr, $test:ident) => {
        $suite.add($crate::TestCase::new(stringify!($test), $test))
    };
}
