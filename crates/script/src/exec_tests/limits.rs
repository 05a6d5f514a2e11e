// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for interrupts, deadlines, and resource limits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use yare::parameterized;

use super::{error, on_large_stack};
use crate::capture::Capture;
use crate::exec::{ExecError, ScriptExecutor};

#[test]
fn deadline_stops_infinite_loop() {
    let started = Instant::now();
    let executor = ScriptExecutor::new(Capture::new()).timeout(Some(Duration::from_millis(50)));
    let err = executor.execute_str("while (true) {}").unwrap_err();
    assert!(matches!(err, ExecError::Interrupted), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn deadline_stops_infinite_recursion_of_loops() {
    let executor = ScriptExecutor::new(Capture::new()).timeout(Some(Duration::from_millis(50)));
    let err = executor.execute_str("function spin() { for (;;) {} } spin()").unwrap_err();
    assert!(matches!(err, ExecError::Interrupted));
}

#[test]
fn interrupt_flag_from_another_thread() {
    let flag = Arc::new(AtomicBool::new(false));
    let raiser = {
        let flag = flag.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            flag.store(true, Ordering::SeqCst);
        })
    };
    let capture = Capture::new();
    let executor = ScriptExecutor::new(capture.clone()).interrupt(flag);
    let err = executor.execute_str("console.log('start'); let n = 0; while (true) { n++ }").unwrap_err();
    raiser.join().unwrap();
    assert!(matches!(err, ExecError::Interrupted));
    assert_eq!(capture.text(), "start");
}

#[test]
fn interrupt_skips_finally_and_catch() {
    let capture = Capture::new();
    let executor = ScriptExecutor::new(capture.clone()).timeout(Some(Duration::from_millis(30)));
    let err = executor
        .execute_str("try { while (true) {} } catch (e) { console.log('caught') } finally { console.log('finally') }")
        .unwrap_err();
    assert!(matches!(err, ExecError::Interrupted));
    assert!(capture.is_empty());
}

#[test]
fn output_limit_ends_run() {
    let capture = Capture::with_limit(3);
    let executor = ScriptExecutor::new(capture.clone());
    let err = executor.execute_str("for (let i = 0; ; i++) console.log(i)").unwrap_err();
    assert!(matches!(err, ExecError::OutputLimit(_)), "{err:?}");
    assert_eq!(capture.text(), "0\n1\n2");
    assert_eq!(err.message(""), "output limit of 3 lines exceeded");
}

#[test]
fn call_depth_limit_is_catchable_range_error() {
    let out = on_large_stack(|| {
        let capture = Capture::new();
        let executor = ScriptExecutor::new(capture.clone()).max_call_depth(100);
        let result = executor.execute_str(
            "function down(n) { return down(n + 1) } try { down(0) } catch (e) { console.log(e.name, e.message) }",
        );
        (result.is_ok(), capture.text())
    });
    assert_eq!(out, (true, "RangeError Maximum call stack size exceeded".to_string()));
}

#[test]
fn default_call_depth_overflow_is_reported() {
    assert_eq!(error("const f = () => f(); f()"), "Maximum call stack size exceeded");
}

#[test]
fn deep_recursion_within_limit_succeeds() {
    let out = super::output("function depth(n) { return n === 0 ? 0 : 1 + depth(n - 1) } console.log(depth(1500))");
    assert_eq!(out, "1500");
}

#[test]
fn huge_array_is_range_error() {
    assert_eq!(error("new Array(1e9)"), "Invalid array length");
}

#[test]
fn huge_string_is_range_error() {
    assert_eq!(error("'x'.repeat(2 ** 40)"), "Invalid string length");
}

#[test]
fn deeply_nested_array_text_is_range_error() {
    let started = Instant::now();
    let out = super::output(
        "let a = []; for (let i = 0; i < 200000; i++) a = [a];
         try { String(a) } catch (e) { console.log(e.name, e.message) }
         try { `${a}` } catch (e) { console.log(e.name) }",
    );
    assert_eq!(out, "RangeError Maximum call stack size exceeded\nRangeError");
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn nesting_within_render_limit_renders() {
    let out = super::output("let a = [1]; for (let i = 0; i < 5000; i++) a = [a]; console.log(String(a))");
    assert_eq!(out, "1");
}

#[parameterized(
    join = { "a.join()" },
    string = { "String(a)" },
    concat = { "'' + a" },
    log = { "console.log(a)" },
)]
fn shared_array_render_stops_at_deadline(expr: &str) {
    let source = format!("let a = [[]]; for (let i = 0; i < 40; i++) a = [a, a]; {expr}");
    let started = Instant::now();
    let executor = ScriptExecutor::new(Capture::new()).timeout(Some(Duration::from_millis(100)));
    let err = executor.execute_str(&source).unwrap_err();
    assert!(matches!(err, ExecError::Interrupted), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn default_sort_stops_at_deadline() {
    let started = Instant::now();
    let executor = ScriptExecutor::new(Capture::new()).timeout(Some(Duration::from_millis(100)));
    let err = executor
        .execute_str(
            "let a = [[]]; for (let i = 0; i < 20; i++) a = [a, a];
             const xs = []; for (let i = 0; i < 1000; i++) xs.push(a);
             xs.sort()",
        )
        .unwrap_err();
    assert!(matches!(err, ExecError::Interrupted), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
}
