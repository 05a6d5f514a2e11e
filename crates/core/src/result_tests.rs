// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::strategies::{arb_expectation_results, arb_outcome};
use proptest::prelude::*;

fn verdict(name: &str, passed: bool) -> ExpectationResult {
    ExpectationResult::new(&ExpectationRule::new(name, "x"), "x", passed)
}

#[test]
fn compose_success_all_passed() {
    let result = ExecutionResult::compose(
        ExecutionOutcome::success("Hello"),
        vec![verdict("greets", true), verdict("twice", true)],
    );
    assert!(result.all_passed());
    assert_eq!(result.output(), "Hello");
    assert_eq!(result.error(), None);
    assert_eq!(result.passed_count(), 2);
}

#[test]
fn compose_one_failure() {
    let result = ExecutionResult::compose(
        ExecutionOutcome::success("Hello"),
        vec![verdict("greets", true), verdict("farewell", false)],
    );
    assert!(!result.all_passed());
    assert_eq!(result.failing().collect::<Vec<_>>(), vec!["farewell"]);
}

#[test]
fn compose_error_fails_everything() {
    let outcome = ExecutionOutcome::failure("partial", ErrorKind::Thrown, "boom");
    let result = ExecutionResult::compose(outcome, vec![verdict("a", true), verdict("b", true)]);
    assert!(!result.all_passed());
    assert!(result.test_results().iter().all(|r| !r.passed));
    assert_eq!(result.error(), Some("boom"));
    assert_eq!(result.error_kind(), Some(ErrorKind::Thrown));
    assert_eq!(result.output(), "partial");
}

#[test]
fn compose_without_rules() {
    assert!(ExecutionResult::compose(ExecutionOutcome::success(""), vec![]).all_passed());
    let failed = ExecutionOutcome::failure("", ErrorKind::Syntax, "SyntaxError: x");
    assert!(!ExecutionResult::compose(failed, vec![]).all_passed());
}

#[test]
fn result_serializes_camel_case() {
    let outcome = ExecutionOutcome::failure("out", ErrorKind::TimedOut, "execution timed out after 5 ms");
    let result = ExecutionResult::compose(outcome, vec![verdict("rule", true)]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["errorKind"], "timedOut");
    assert_eq!(json["allPassed"], false);
    assert_eq!(json["testResults"][0]["expectedSubstring"], "x");
    assert_eq!(json["testResults"][0]["actualText"], "x");

    let back: ExecutionResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn success_result_has_null_error() {
    let result = ExecutionResult::compose(ExecutionOutcome::success("1"), vec![]);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"output":"1","error":null,"testResults":[],"allPassed":true}"#);
}

#[test]
fn deserializing_recomputes_verdicts() {
    let json = serde_json::json!({
        "output": "partial",
        "error": "boom",
        "testResults": [{ "name": "a", "expectedSubstring": "x", "actualText": "x", "passed": true }],
        "allPassed": true,
    });
    let result: ExecutionResult = serde_json::from_value(json).unwrap();
    assert!(!result.all_passed());
    assert!(!result.test_results()[0].passed);
    assert_eq!(result.error(), Some("boom"));
}

#[test]
fn deserializing_without_error_key_is_success() {
    let json = serde_json::json!({ "output": "ok", "testResults": [], "allPassed": false });
    let result: ExecutionResult = serde_json::from_value(json).unwrap();
    assert!(result.all_passed());
    assert_eq!(result.error(), None);
}

#[test]
fn success_omits_error_fields() {
    let json = serde_json::to_string(&ExecutionOutcome::success("hi")).unwrap();
    assert_eq!(json, r#"{"capturedText":"hi"}"#);
}

#[yare::parameterized(
    syntax = { ErrorKind::Syntax, "syntax" },
    runtime = { ErrorKind::Runtime, "runtime" },
    thrown = { ErrorKind::Thrown, "thrown" },
    timed_out = { ErrorKind::TimedOut, "timed_out" },
    resource_limit = { ErrorKind::ResourceLimit, "resource_limit" },
    internal = { ErrorKind::Internal, "internal" },
)]
fn error_kind_display(kind: ErrorKind, expected: &str) {
    assert_eq!(kind.to_string(), expected);
}

proptest! {
    #[test]
    fn all_passed_matches_definition(outcome in arb_outcome(), results in arb_expectation_results()) {
        let had_error = outcome.is_error();
        let result = ExecutionResult::compose(outcome.clone(), results);
        let expected = !had_error && result.test_results().iter().all(|r| r.passed);
        prop_assert_eq!(result.all_passed(), expected);
        prop_assert_eq!(result.error().is_some(), result.error_kind().is_some());
        prop_assert_eq!(result.output(), outcome.captured_text.as_str());
        if had_error {
            prop_assert!(result.test_results().iter().all(|r| !r.passed));
        }
    }
}
