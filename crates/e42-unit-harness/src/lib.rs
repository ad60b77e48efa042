//! Hosting program for the word-count exercise.
//!
//! Registers the exercise cases on an [`e42_unit::TestSuite`]; the `harness`
//! binary runs it, renders the result and exits with the failure count.

pub mod sentence;

use e42_unit::{TestSuite, UnitError, suite_add_test};

use crate::sentence::{
    extra_spaces_test, more_than_single_space_test, multiple_word_test, single_word_test,
};

/// Suite name used in logs and reports.
pub const SUITE_NAME: &str = "word_count";

/// Every word-count case, in registration order.
pub fn word_count_suite() -> Result<TestSuite, UnitError> {
    let mut suite = TestSuite::new();
    suite_add_test!(suite, single_word_test)?;
    suite_add_test!(suite, multiple_word_test)?;
    suite_add_test!(suite, more_than_single_space_test)?;
    suite_add_test!(suite, extra_spaces_test)?;
    Ok(suite)
}

/// Process exit status for a finished run: the failure count, saturated to 255.
#[must_use]
pub fn exit_status(suite: &TestSuite) -> u8 {
    u8::try_from(suite.fail_count()).unwrap_or(u8::MAX)
}
