// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for judging output against expectations.

use crate::prelude::*;

/// A rule passes when its substring appears in the output
#[test]
fn substring_matching() {
    check("console.log('Hello, World!')", &[("greets", "Hello"), ("lowercase", "hello")])
        .verdicts(&[true, false])
        .all_passed(false);
}

/// An empty expectation passes whenever the run succeeds
#[test]
fn empty_expectation() {
    check("", &[("runs", "")]).verdicts(&[true]).all_passed(true);
}

/// A crash fails every rule, even ones the output satisfies
#[test]
fn crash_fails_everything() {
    check("console.log('Line 1'); missing()", &[("line", "Line 1"), ("runs", "")])
        .verdicts(&[false, false])
        .all_passed(false);
}

/// Expectations can span lines
#[test]
fn multi_line_expectation() {
    check("for (let i = 1; i <= 3; i++) console.log(i)", &[("counts", "1\n2\n3")]).all_passed(true);
}

/// Results keep rule order and carry the full output
#[test]
fn results_keep_rule_order() {
    let result = check("console.log('b a')", &[("b", "b"), ("a", "a"), ("c", "c")]).result();
    let names: Vec<&str> = result.test_results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert!(result.test_results().iter().all(|r| r.actual_text == "b a"));
}

/// Zero rules with a clean run is a pass
#[test]
fn zero_rules() {
    let result = run("console.log(1)").all_passed(true).result();
    assert!(result.test_results().is_empty());
}

/// Results serialize as camelCase JSON for collaborators
#[test]
fn result_json_shape() {
    let result = check("throw 'x'", &[("r", "")]).result();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "output": "",
            "error": "x",
            "errorKind": "thrown",
            "testResults": [
                { "name": "r", "expectedSubstring": "", "actualText": "", "passed": false }
            ],
            "allPassed": false
        })
    );
}
