// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    present = { "Hello", "Hello, World!", true },
    middle = { "lo, W", "Hello, World!", true },
    case_sensitive = { "hello", "Hello, World!", false },
    across_lines = { "1\n2", "1\n2\n3", true },
    empty_rule = { "", "", true },
    empty_output = { "x", "", false },
)]
fn matches_substring(expected: &str, captured: &str, result: bool) {
    assert_eq!(ExpectationRule::new("rule", expected).matches(captured), result);
}

#[yare::parameterized(
    missing_substring = { r#"{"name":"runs"}"# },
    misspelled_key = { r#"{"name":"greets","expected":"Hello"}"# },
)]
fn rejects_incomplete_rule(input: &str) {
    assert!(serde_json::from_str::<ExpectationRule>(input).is_err());
}

#[test]
fn deserializes_empty_substring() {
    let rule: ExpectationRule = serde_json::from_str(r#"{"name":"runs","expectedSubstring":""}"#).unwrap();
    assert_eq!(rule, ExpectationRule::new("runs", ""));
}
