// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checks an execution outcome against expectation rules.

use kata_core::{ExecutionOutcome, ExecutionResult, ExpectationResult, ExpectationRule};

/// One verdict per rule, in rule order.
///
/// A rule passes when the captured text contains its substring and the run
/// did not fail; any error fails every rule.
pub fn evaluate(outcome: &ExecutionOutcome, rules: &[ExpectationRule]) -> Vec<ExpectationResult> {
    let crashed = outcome.is_error();
    rules
        .iter()
        .map(|rule| {
            let passed = !crashed && rule.matches(&outcome.captured_text);
            ExpectationResult::new(rule, outcome.captured_text.as_str(), passed)
        })
        .collect()
}

/// [`evaluate`] and fold the verdicts into the final result.
pub fn judge(outcome: ExecutionOutcome, rules: &[ExpectationRule]) -> ExecutionResult {
    let results = evaluate(&outcome, rules);
    ExecutionResult::compose(outcome, results)
}

#[cfg(test)]
#[path = "assertions_tests.rs"]
mod tests;
