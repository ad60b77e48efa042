//! Machine-readable and markdown reports for a finished suite run.

use serde::{Deserialize, Serialize};

use crate::error::UnitError;
use crate::suite::TestSuite;

/// Outcome of one case as recorded in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// 1-based registration position.
    pub index: usize,
    pub name: String,
    pub passed: bool,
    /// Failure message, when the case failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Snapshot of a suite's last run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub title: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseRecord>,
}

impl SuiteReport {
    /// Build a report from the current case states of `suite`.
    #[must_use]
    pub fn from_suite(title: impl Into<String>, suite: &TestSuite) -> Self {
        let cases: Vec<CaseRecord> = suite
            .cases()
            .iter()
            .enumerate()
            .map(|(i, case)| CaseRecord {
                index: i + 1,
                name: case.name().to_string(),
                passed: !case.failed(),
                message: case.message().map(str::to_string),
            })
            .collect();
        let total = cases.len();
        let passed = cases.iter().filter(|c| c.passed).count();
        Self {
            title: title.into(),
            total,
            passed,
            failed: total - passed,
            cases,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Runs: {}\n", self.total));
        out.push_str(&format!("- Passes: {}\n", self.passed));
        out.push_str(&format!("- Fails: {}\n\n", self.failed));

        out.push_str("| # | Case | Status | Message |\n");
        out.push_str("|---|------|--------|---------|\n");
        for case in &self.cases {
            let status = if case.passed { "PASS" } else { "FAIL" };
            let message = case.message.as_deref().unwrap_or("").replace('|', "\\|");
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                case.index, case.name, status, message
            ));
        }
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, UnitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
