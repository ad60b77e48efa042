//! A single named test and the abort-on-failure mechanism around it.
//!
//! A test function receives its own [`TestCase`] and returns [`TestResult`].
//! Every assertion hands back `Err(Abort)` on failure, so `?` unwinds the rest
//! of the function straight back to [`TestCase::run`]. Panics escaping the
//! function are caught at the same boundary and recorded as failures.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::buffer::DynamicBuffer;

/// Marker carried out of a test function by a failed assertion.
///
/// Only the assertion engine can construct one, and it always records the
/// failure on the owning case first.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "propagate the abort with `?` so the rest of the test is skipped"]
pub struct Abort(());

/// Outcome of an assertion, and of a whole test function.
pub type TestResult = Result<(), Abort>;

const FOREIGN_ABORT_MESSAGE: &str = "aborted without a recorded failure";

/// Shared handle to a test function.
pub type TestFn = Arc<dyn Fn(&mut TestCase) -> TestResult + Send + Sync>;

/// Observable lifecycle of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseState {
    NotRun,
    Running,
    Passed,
    Failed,
}

/// One registered test.
#[derive(Clone)]
pub struct TestCase {
    name: String,
    function: TestFn,
    ran: bool,
    failed: bool,
    in_flight: bool,
    message: Option<DynamicBuffer>,
}

impl TestCase {
    /// Bind `function` under `name`.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&mut TestCase) -> TestResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            function: Arc::new(function),
            ran: false,
            failed: false,
            in_flight: false,
            message: None,
        }
    }

    /// Execute the test function once.
    ///
    /// Any previous outcome is discarded first. After this returns, `ran()` is
    /// true and the case is either passed or failed with a message.
    ///
    /// A panic is caught and recorded, but the process panic hook still runs
    /// first, so the default hook prints the panic to stderr. Hosting
    /// programs that want clean console output install their own hook.
    pub fn run(&mut self) {
        self.failed = false;
        self.message = None;
        self.ran = true;
        self.in_flight = true;

        let function = Arc::clone(&self.function);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (*function)(self)));
        self.in_flight = false;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(Abort(()))) if self.failed => {}
            Ok(Err(Abort(()))) => {
                let _ = self.record_failure(DynamicBuffer::from(FOREIGN_ABORT_MESSAGE));
            }
            Err(payload) => {
                let mut message = DynamicBuffer::from("panicked: ");
                message.append(panic_message(payload.as_ref()).as_str());
                let _ = self.record_failure(message);
            }
        }
    }

    /// Mark the case failed with `message`, replacing any earlier message.
    ///
    /// Outside of [`run`](Self::run) there is no checkpoint to resume at; the
    /// failure is still recorded and the returned [`Abort`] is the caller's to
    /// drop.
    pub(crate) fn record_failure(&mut self, message: DynamicBuffer) -> Abort {
        self.failed = true;
        self.message = Some(message);
        Abort(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ran(&self) -> bool {
        self.ran
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Failure message, present exactly when the case failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(DynamicBuffer::as_str)
    }

    #[must_use]
    pub fn state(&self) -> CaseState {
        if self.in_flight {
            CaseState::Running
        } else if self.failed {
            CaseState::Failed
        } else if self.ran {
            CaseState::Passed
        } else {
            CaseState::NotRun
        }
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return (*msg).to_string();
    }
    "<non-string panic payload>".to_string()
}
