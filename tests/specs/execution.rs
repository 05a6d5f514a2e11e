// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for running code: output capture, failures, and limits.

use crate::prelude::*;

/// Empty input runs cleanly and prints nothing
#[test]
fn empty_input() {
    run("").succeeds().outputs("").all_passed(true);
}

/// Multiple output calls join with newlines in call order
#[test]
fn multi_line_output() {
    run("console.log('a'); console.log('b'); console.log('c')").outputs("a\nb\nc");
}

/// Output captured before a crash survives
#[test]
fn partial_output_preserved() {
    run("console.log('Line 1'); console.log('Line 2'); undefinedFunction();")
        .outputs("Line 1\nLine 2")
        .fails_with(ErrorKind::Runtime, "undefinedFunction is not defined");
}

/// A thrown error reports its message
#[test]
fn thrown_error_message() {
    run("throw new Error('Something went wrong')").fails_with(ErrorKind::Thrown, "Something went wrong");
}

/// A thrown non-error value reports its text
#[test]
fn thrown_non_error() {
    run("throw 42").fails_with(ErrorKind::Thrown, "42");
    run("throw ['a', 'b']").fails_with(ErrorKind::Thrown, "a,b");
}

/// Syntax errors come back through the same error field
#[test]
fn syntax_error() {
    let result = run("console.log('unterminated").result();
    assert_eq!(result.error_kind(), Some(ErrorKind::Syntax));
    assert!(result.error().unwrap().starts_with("SyntaxError: "));
    assert_eq!(result.output(), "");
}

/// Errors a script catches do not fail the run
#[test]
fn caught_errors_are_not_failures() {
    run("try { null.length } catch (e) { console.error(e.message) }")
        .succeeds()
        .outputs("Error: Cannot read properties of null (reading 'length')");
}

/// Infinite loops time out and keep their output
#[test]
fn timeout_keeps_partial_output() {
    let config = EngineConfig::default().timeout(Some(Duration::from_millis(100)));
    let source = "console.log('tick'); while (true) {}";
    let result = kata_engine::execute_with(&config, source, &rules(&[("tick", "tick")]));
    assert_eq!(result.output(), "tick");
    assert_eq!(result.error(), Some("execution timed out after 100 ms"));
    assert_eq!(result.error_kind(), Some(ErrorKind::TimedOut));
    assert!(!result.all_passed());
}

/// Runaway recursion is a catchable RangeError
#[test]
fn runaway_recursion() {
    run("function loop() { return loop() }\ntry { loop() } catch (e) { console.log(e instanceof RangeError, e.message) }")
        .succeeds()
        .outputs("true Maximum call stack size exceeded");
    run("function loop() { return loop() } loop()")
        .fails_with(ErrorKind::Runtime, "Maximum call stack size exceeded");
}

/// Flooding the console stops at the line limit
#[test]
fn output_limit() {
    let config = EngineConfig::default().max_output_lines(3);
    let result = kata_engine::execute_with(&config, "while (true) console.log('spam')", &[]);
    assert_eq!(result.output(), "spam\nspam\nspam");
    assert_eq!(result.error_kind(), Some(ErrorKind::ResourceLimit));
}

/// Running the same code twice gives identical results
#[test]
fn idempotent() {
    let source = "const xs = [5, 3, 9]; console.log(xs.sort((a, b) => a - b)); console.warn(JSON.stringify({ xs }))";
    assert_eq!(run(source).result(), run(source).result());
}
