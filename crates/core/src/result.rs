// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcomes of running learner code and the verdicts derived from them.

use serde::{Deserialize, Serialize};

use crate::ExpectationRule;

/// Why a run ended with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The source did not parse.
    Syntax,
    /// The interpreter raised an error (`TypeError`, `ReferenceError`, ...).
    Runtime,
    /// The script threw a value that nothing caught.
    Thrown,
    /// The wall-clock deadline passed.
    TimedOut,
    /// The captured output hit its line limit.
    ResourceLimit,
    /// The worker died without reporting.
    Internal,
}

crate::simple_display! {
    ErrorKind {
        Syntax => "syntax",
        Runtime => "runtime",
        Thrown => "thrown",
        TimedOut => "timed_out",
        ResourceLimit => "resource_limit",
        Internal => "internal",
    }
}

/// What one execution produced: everything captured, plus the error that
/// ended it early, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutcome {
    pub captured_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl ExecutionOutcome {
    pub fn success(captured_text: impl Into<String>) -> Self {
        Self { captured_text: captured_text.into(), error_message: None, error_kind: None }
    }

    pub fn failure(captured_text: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { captured_text: captured_text.into(), error_message: Some(message.into()), error_kind: Some(kind) }
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Verdict for a single expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectationResult {
    pub name: String,
    pub expected_substring: String,
    /// The full captured text the rule was checked against.
    pub actual_text: String,
    pub passed: bool,
}

impl ExpectationResult {
    pub fn new(rule: &ExpectationRule, actual_text: impl Into<String>, passed: bool) -> Self {
        Self {
            name: rule.name.clone(),
            expected_substring: rule.expected_substring.clone(),
            actual_text: actual_text.into(),
            passed,
        }
    }
}

/// Final record of one run, as shown to the learner.
///
/// Built only through [`ExecutionResult::compose`], which keeps
/// `all_passed` consistent with `error` and the individual verdicts.
/// Deserializing goes through `compose` too; an incoming `allPassed` is
/// ignored. `error` is always present in JSON, `null` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawExecutionResult")]
pub struct ExecutionResult {
    output: String,
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_kind: Option<ErrorKind>,
    test_results: Vec<ExpectationResult>,
    all_passed: bool,
}

impl ExecutionResult {
    /// Combine an outcome with per-rule verdicts.
    ///
    /// An error in the outcome fails every verdict.
    pub fn compose(outcome: ExecutionOutcome, mut test_results: Vec<ExpectationResult>) -> Self {
        let ExecutionOutcome { captured_text, error_message, error_kind } = outcome;
        if error_message.is_some() {
            for result in &mut test_results {
                result.passed = false;
            }
        }
        let all_passed = error_message.is_none() && test_results.iter().all(|r| r.passed);
        Self { output: captured_text, error: error_message, error_kind, test_results, all_passed }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    pub fn test_results(&self) -> &[ExpectationResult] {
        &self.test_results
    }

    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    /// Names of the expectations that did not pass, in rule order.
    pub fn failing(&self) -> impl Iterator<Item = &str> {
        self.test_results.iter().filter(|r| !r.passed).map(|r| r.name.as_str())
    }

    pub fn passed_count(&self) -> usize {
        self.test_results.iter().filter(|r| r.passed).count()
    }
}

/// Wire shape of [`ExecutionResult`] before its verdicts are recomposed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExecutionResult {
    output: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_kind: Option<ErrorKind>,
    #[serde(default)]
    test_results: Vec<ExpectationResult>,
}

impl From<RawExecutionResult> for ExecutionResult {
    fn from(raw: RawExecutionResult) -> Self {
        let outcome = ExecutionOutcome { captured_text: raw.output, error_message: raw.error, error_kind: raw.error_kind };
        Self::compose(outcome, raw.test_results)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
