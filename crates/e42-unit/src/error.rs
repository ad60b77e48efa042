//! Error types for suite registration and report output.
//!
//! Assertion failures are not errors: they live on the failing
//! [`TestCase`](crate::TestCase) as data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("suite is full: at most {limit} test cases may be registered")]
    SuiteFull { limit: usize },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
