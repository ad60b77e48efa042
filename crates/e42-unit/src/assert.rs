//! Assertion engine.
//!
//! Each assertion is a `#[track_caller]` method on [`TestCase`]. On success it
//! returns `Ok(())` and touches nothing. On failure it builds the message
//! `[label: ]<detail> (at <file>:<line>)`, stores it on the case and returns
//! `Err(Abort)` for the test function to propagate with `?`.

use std::panic::Location;

use crate::buffer::DynamicBuffer;
use crate::case::{TestCase, TestResult};

/// Label used by [`TestCase::assert_true`].
pub const ASSERT_FAILED: &str = "assert failed";

/// Label used by [`TestCase::assert_not_null`].
pub const NULL_POINTER_UNEXPECTED: &str = "null pointer unexpected";

impl TestCase {
    #[track_caller]
    fn abort_with(&mut self, label: Option<&str>, detail: &str) -> TestResult {
        let location = Location::caller();
        let mut message = DynamicBuffer::new();
        if let Some(label) = label {
            message.append(label);
            message.append(": ");
        }
        message.append(detail);
        message.append_format(format_args!(" (at {}:{})", location.file(), location.line()));
        Err(self.record_failure(message))
    }

    /// Fail unconditionally with `message`.
    #[track_caller]
    pub fn fail(&mut self, message: &str) -> TestResult {
        self.abort_with(None, message)
    }

    /// Fail with `label` as the message unless `condition` holds.
    #[track_caller]
    pub fn check(&mut self, label: &str, condition: bool) -> TestResult {
        if condition {
            return Ok(());
        }
        self.abort_with(None, label)
    }

    #[track_caller]
    pub fn assert_true(&mut self, condition: bool) -> TestResult {
        self.check(ASSERT_FAILED, condition)
    }

    /// String equality where `None` only equals `None`.
    #[track_caller]
    pub fn assert_str_equals<'a>(
        &mut self,
        expected: impl Into<Option<&'a str>>,
        actual: impl Into<Option<&'a str>>,
    ) -> TestResult {
        self.str_equals(None, expected.into(), actual.into())
    }

    #[track_caller]
    pub fn assert_str_equals_msg<'a>(
        &mut self,
        label: &str,
        expected: impl Into<Option<&'a str>>,
        actual: impl Into<Option<&'a str>>,
    ) -> TestResult {
        self.str_equals(Some(label), expected.into(), actual.into())
    }

    #[track_caller]
    fn str_equals(
        &mut self,
        label: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> TestResult {
        if expected == actual {
            return Ok(());
        }
        let mut detail = DynamicBuffer::new();
        detail.append("expected <");
        detail.append(expected);
        detail.append("> but was <");
        detail.append(actual);
        detail.append(">");
        self.abort_with(label, detail.as_str())
    }

    #[track_caller]
    pub fn assert_int_equals(&mut self, expected: i64, actual: i64) -> TestResult {
        self.int_equals(None, expected, actual)
    }

    #[track_caller]
    pub fn assert_int_equals_msg(
        &mut self,
        label: &str,
        expected: i64,
        actual: i64,
    ) -> TestResult {
        self.int_equals(Some(label), expected, actual)
    }

    #[track_caller]
    fn int_equals(&mut self, label: Option<&str>, expected: i64, actual: i64) -> TestResult {
        if expected == actual {
            return Ok(());
        }
        self.abort_with(label, &format!("expected <{expected}> but was <{actual}>"))
    }

    /// Passes when `|expected - actual| <= delta`. NaN never passes.
    #[track_caller]
    pub fn assert_float_equals(&mut self, expected: f64, actual: f64, delta: f64) -> TestResult {
        self.float_equals(None, expected, actual, delta)
    }

    #[track_caller]
    pub fn assert_float_equals_msg(
        &mut self,
        label: &str,
        expected: f64,
        actual: f64,
        delta: f64,
    ) -> TestResult {
        self.float_equals(Some(label), expected, actual, delta)
    }

    #[track_caller]
    fn float_equals(
        &mut self,
        label: Option<&str>,
        expected: f64,
        actual: f64,
        delta: f64,
    ) -> TestResult {
        if (expected - actual).abs() <= delta {
            return Ok(());
        }
        self.abort_with(label, &format!("expected <{expected:.6}> but was <{actual:.6}>"))
    }

    /// Identity comparison on addresses; pointer metadata is ignored.
    #[track_caller]
    pub fn assert_ptr_equals<T: ?Sized>(
        &mut self,
        expected: *const T,
        actual: *const T,
    ) -> TestResult {
        self.ptr_equals(None, expected, actual)
    }

    #[track_caller]
    pub fn assert_ptr_equals_msg<T: ?Sized>(
        &mut self,
        label: &str,
        expected: *const T,
        actual: *const T,
    ) -> TestResult {
        self.ptr_equals(Some(label), expected, actual)
    }

    #[track_caller]
    fn ptr_equals<T: ?Sized>(
        &mut self,
        label: Option<&str>,
        expected: *const T,
        actual: *const T,
    ) -> TestResult {
        if std::ptr::addr_eq(expected, actual) {
            return Ok(());
        }
        self.abort_with(
            label,
            &format!("expected pointer <{expected:p}> but was <{actual:p}>"),
        )
    }

    #[track_caller]
    pub fn assert_not_null<T: ?Sized>(&mut self, ptr: *const T) -> TestResult {
        self.check(NULL_POINTER_UNEXPECTED, !ptr.is_null())
    }

    #[track_caller]
    pub fn assert_not_null_msg<T: ?Sized>(&mut self, label: &str, ptr: *const T) -> TestResult {
        self.check(label, !ptr.is_null())
    }
}
