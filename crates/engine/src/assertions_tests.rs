// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use kata_core::test_support::rules;
use kata_core::ErrorKind;
use proptest::prelude::*;

#[test]
fn substring_match_per_rule() {
    let outcome = ExecutionOutcome::success("Hello, World!");
    let results = evaluate(&outcome, &rules(&[("greets", "Hello"), ("shouts", "HELLO"), ("comma", ", ")]));
    let verdicts: Vec<(&str, bool)> = results.iter().map(|r| (r.name.as_str(), r.passed)).collect();
    assert_eq!(verdicts, vec![("greets", true), ("shouts", false), ("comma", true)]);
    assert!(results.iter().all(|r| r.actual_text == "Hello, World!"));
}

#[test]
fn empty_expectation_passes_without_error() {
    let results = evaluate(&ExecutionOutcome::success(""), &rules(&[("runs", "")]));
    assert!(results[0].passed);
}

#[test]
fn error_fails_every_rule() {
    let outcome = ExecutionOutcome::failure("Line 1", ErrorKind::Runtime, "x is not defined");
    let results = evaluate(&outcome, &rules(&[("line", "Line 1"), ("runs", "")]));
    assert!(results.iter().all(|r| !r.passed));
    assert_eq!(results[0].actual_text, "Line 1");
}

#[test]
fn no_rules_no_results() {
    assert!(evaluate(&ExecutionOutcome::success("x"), &[]).is_empty());
    assert!(judge(ExecutionOutcome::success("x"), &[]).all_passed());
}

#[test]
fn judge_composes() {
    let result = judge(ExecutionOutcome::success("3\n4"), &rules(&[("three", "3"), ("five", "5")]));
    assert!(!result.all_passed());
    assert_eq!(result.failing().collect::<Vec<_>>(), vec!["five"]);
    assert_eq!(result.output(), "3\n4");
}

proptest! {
    #[test]
    fn verdict_is_containment(text in "[ab\n]{0,12}", expected in "[ab]{0,3}") {
        let outcome = ExecutionOutcome::success(text.clone());
        let results = evaluate(&outcome, &rules(&[("rule", expected.as_str())]));
        prop_assert_eq!(results[0].passed, text.contains(expected.as_str()));
    }

    #[test]
    fn evaluation_is_idempotent(text in "[a-c]{0,8}", names in proptest::collection::vec("[a-c]{0,2}", 0..5)) {
        let rule_set: Vec<ExpectationRule> =
            names.iter().enumerate().map(|(i, s)| ExpectationRule::new(format!("r{i}"), s.as_str())).collect();
        let outcome = ExecutionOutcome::success(text);
        prop_assert_eq!(evaluate(&outcome, &rule_set), evaluate(&outcome, &rule_set));
        prop_assert_eq!(evaluate(&outcome, &rule_set).len(), rule_set.len());
    }
}
