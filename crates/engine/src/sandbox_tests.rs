// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn run(source: &str) -> ExecutionOutcome {
    Sandbox::default().execute(source)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn empty_source() {
    assert_eq!(run(""), ExecutionOutcome::success(""));
}

#[test]
fn captures_lines_in_order() {
    let outcome = run("console.log('a', 1, true); console.warn('careful'); console.error('bad'); console.log()");
    assert_eq!(outcome, ExecutionOutcome::success("a 1 true\nWarning: careful\nError: bad\n"));
}

#[yare::parameterized(
    syntax = { "let = 1", ErrorKind::Syntax, "SyntaxError: unexpected token" },
    reference = { "console.log(missing)", ErrorKind::Runtime, "missing is not defined" },
    type_error = { "null.x", ErrorKind::Runtime, "Cannot read properties of null (reading 'x')" },
    thrown_error = { "throw new Error('Something went wrong')", ErrorKind::Thrown, "Something went wrong" },
    thrown_string = { "throw 'nope'", ErrorKind::Thrown, "nope" },
    recursion = { "function f() { f() } f()", ErrorKind::Runtime, "Maximum call stack size exceeded" },
    nested_array = {
        "let a = []; for (let i = 0; i < 100000; i++) a = [a]; String(a)",
        ErrorKind::Runtime,
        "Maximum call stack size exceeded"
    },
)]
fn classifies_failures(source: &str, kind: ErrorKind, message: &str) {
    let outcome = run(source);
    assert_eq!(outcome.error_kind, Some(kind));
    let actual = outcome.error_message.unwrap_or_default();
    assert!(actual.starts_with(message), "{actual:?} should start with {message:?}");
}

#[test]
fn output_before_crash_is_kept() {
    let outcome = run("console.log('Line 1'); console.log('Line 2'); undefinedFunction();");
    assert_eq!(outcome.captured_text, "Line 1\nLine 2");
    assert_eq!(outcome.error_message.as_deref(), Some("undefinedFunction is not defined"));
}

#[test]
fn deadline_reports_timeout_with_partial_output() {
    let sandbox = Sandbox::new(EngineConfig::default().timeout(Some(Duration::from_millis(50))));
    let started = Instant::now();
    let outcome = sandbox.execute("console.log('before'); while (true) {}");
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(outcome.error_kind, Some(ErrorKind::TimedOut));
    assert_eq!(outcome.error_message.as_deref(), Some("execution timed out after 50 ms"));
    assert_eq!(outcome.captured_text, "before");
}

#[test]
fn timeout_cannot_be_caught() {
    let sandbox = Sandbox::new(EngineConfig::default().timeout(Some(Duration::from_millis(30))));
    let outcome = sandbox.execute("try { for (;;) {} } catch (e) { console.log('caught') }");
    assert_eq!(outcome.error_kind, Some(ErrorKind::TimedOut));
    assert_eq!(outcome.captured_text, "");
}

#[test]
fn output_limit_is_resource_limit() {
    let sandbox = Sandbox::new(EngineConfig::default().max_output_lines(5));
    let outcome = sandbox.execute("for (let i = 0; i < 100; i++) console.log(i)");
    assert_eq!(outcome.error_kind, Some(ErrorKind::ResourceLimit));
    assert_eq!(outcome.error_message.as_deref(), Some("output limit of 5 lines exceeded"));
    assert_eq!(outcome.captured_text, "0\n1\n2\n3\n4");
}

#[test]
fn call_depth_is_configurable() {
    let sandbox = Sandbox::new(EngineConfig::default().max_call_depth(20));
    let outcome = sandbox.execute(
        "function depth(n) { return n === 0 ? 0 : 1 + depth(n - 1) }\nconsole.log(depth(10))\nconsole.log(depth(30))",
    );
    assert_eq!(outcome.captured_text, "10");
    assert_eq!(outcome.error_message.as_deref(), Some("Maximum call stack size exceeded"));
}

#[test]
fn runs_are_independent() {
    let sandbox = Sandbox::default();
    assert_eq!(sandbox.execute("var shared = 1; console.log(shared)").captured_text, "1");
    assert_eq!(sandbox.execute("console.log(typeof shared)").captured_text, "undefined");
}

#[test]
fn same_source_same_outcome() {
    let source = "const xs = [3, 1, 2].sort(); console.log(xs, JSON.stringify({ a: xs })); throw new RangeError('r')";
    assert_eq!(run(source), run(source));
}

#[test]
fn without_timeout_waits_for_completion() {
    init_tracing();
    let sandbox = Sandbox::new(EngineConfig::default().timeout(None));
    let outcome = sandbox.execute("let total = 0; for (let i = 1; i <= 1000; i++) total += i; console.log(total)");
    assert_eq!(outcome, ExecutionOutcome::success("500500"));
}

#[test]
fn shared_array_render_times_out_in_worker() {
    let sandbox = Sandbox::new(EngineConfig::default().timeout(Some(Duration::from_millis(100))));
    let started = Instant::now();
    let outcome = sandbox.execute("let a = [[]]; for (let i = 0; i < 40; i++) a = [a, a]; console.log(a)");
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(outcome.error_kind, Some(ErrorKind::TimedOut));
    assert_eq!(outcome.error_message.as_deref(), Some("execution timed out after 100 ms"));
}
