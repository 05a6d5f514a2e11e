// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot of the latest verdict handed to the tutoring collaborator.

use serde::{Deserialize, Serialize};

use crate::{ExecutionResult, ExpectationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorContext {
    pub all_passed: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub test_results: Vec<ExpectationResult>,
}

impl TutorContext {
    /// One-line summary, e.g. `1 of 3 passed; failing: sum, total`.
    ///
    /// An error is appended after the failing list.
    pub fn summary(&self) -> String {
        let passed = self.test_results.iter().filter(|r| r.passed).count();
        let mut summary = format!("{} of {} passed", passed, self.test_results.len());
        let failing: Vec<&str> =
            self.test_results.iter().filter(|r| !r.passed).map(|r| r.name.as_str()).collect();
        if !failing.is_empty() {
            summary.push_str("; failing: ");
            summary.push_str(&failing.join(", "));
        }
        if let Some(error) = &self.error {
            summary.push_str("; error: ");
            summary.push_str(error);
        }
        summary
    }
}

impl From<&ExecutionResult> for TutorContext {
    fn from(result: &ExecutionResult) -> Self {
        Self {
            all_passed: result.all_passed(),
            error: result.error().map(str::to_string),
            test_results: result.test_results().to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "tutor_tests.rs"]
mod tests;
