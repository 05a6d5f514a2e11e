// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use kata_core::test_support::rules;
use kata_core::ErrorKind;
use std::time::Duration;

#[test]
fn execute_passes_matching_output() {
    let result = execute("console.log('Hello, World!')", &rules(&[("greets", "Hello")]));
    assert!(result.all_passed());
    assert_eq!(result.output(), "Hello, World!");
}

#[test]
fn execute_reports_crash() {
    let result = execute(
        "console.log('Line 1'); console.log('Line 2'); undefinedFunction();",
        &rules(&[("first", "Line 1")]),
    );
    assert!(!result.all_passed());
    assert_eq!(result.output(), "Line 1\nLine 2");
    assert_eq!(result.error(), Some("undefinedFunction is not defined"));
    assert_eq!(result.error_kind(), Some(ErrorKind::Runtime));
    assert!(!result.test_results()[0].passed);
}

#[test]
fn execute_with_custom_limits() {
    let config = EngineConfig::default().timeout(Some(Duration::from_millis(40)));
    let result = execute_with(&config, "while (true) {}", &rules(&[("runs", "")]));
    assert_eq!(result.error(), Some("execution timed out after 40 ms"));
    assert_eq!(result.error_kind(), Some(ErrorKind::TimedOut));
}
