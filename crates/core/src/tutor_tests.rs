// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{ErrorKind, ExecutionOutcome, ExpectationRule};

fn result(outcome: ExecutionOutcome, verdicts: &[(&str, bool)]) -> ExecutionResult {
    let results = verdicts
        .iter()
        .map(|(name, passed)| ExpectationResult::new(&ExpectationRule::new(*name, ""), "", *passed))
        .collect();
    ExecutionResult::compose(outcome, results)
}

#[test]
fn summary_lists_failing_rules() {
    let context =
        TutorContext::from(&result(ExecutionOutcome::success(""), &[("sum", true), ("avg", false), ("max", false)]));
    assert_eq!(context.summary(), "1 of 3 passed; failing: avg, max");
    assert!(!context.all_passed);
}

#[test]
fn summary_all_passed() {
    let context = TutorContext::from(&result(ExecutionOutcome::success(""), &[("sum", true)]));
    assert_eq!(context.summary(), "1 of 1 passed");
    assert!(context.all_passed);
}

#[test]
fn summary_includes_error() {
    let outcome = ExecutionOutcome::failure("", ErrorKind::Runtime, "x is not defined");
    let context = TutorContext::from(&result(outcome, &[("sum", true)]));
    assert_eq!(context.summary(), "0 of 1 passed; failing: sum; error: x is not defined");
    assert_eq!(context.error.as_deref(), Some("x is not defined"));
}

#[test]
fn summary_without_rules() {
    let context = TutorContext::from(&result(ExecutionOutcome::success("hi"), &[]));
    assert_eq!(context.summary(), "0 of 0 passed");
}

#[test]
fn success_context_has_null_error() {
    let context = TutorContext::from(&result(ExecutionOutcome::success(""), &[]));
    let json = serde_json::to_value(&context).unwrap();
    assert_eq!(json, serde_json::json!({ "allPassed": true, "error": null, "testResults": [] }));
}
