// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for throw, try/catch/finally, and uncaught error reporting.

use super::{error, executor, output};
use crate::exec::{ExecError, ThrowOrigin};
use yare::parameterized;

// ---------------------------------------------------------------------------
// try / catch / finally
// ---------------------------------------------------------------------------

#[test]
fn catch_receives_thrown_error() {
    let out = output("try { throw new TypeError('bad input') } catch (e) { console.log(e.name, e.message, e instanceof TypeError, e instanceof Error) }");
    assert_eq!(out, "TypeError bad input true true");
}

#[test]
fn runtime_errors_are_catchable() {
    let out = output("try { undefined.x } catch (e) { console.log(e.name + ': ' + e.message) }");
    assert_eq!(out, "TypeError: Cannot read properties of undefined (reading 'x')");
}

#[test]
fn thrown_primitives() {
    assert_eq!(output("try { throw 42 } catch (e) { console.log(typeof e, e) }"), "number 42");
}

#[test]
fn finally_always_runs() {
    let out = output(
        r#"
        function f() {
            try { return "try"; } finally { console.log("finally"); }
        }
        console.log(f());
        try { try { throw new Error("x") } finally { console.log("inner") } } catch (e) { console.log("outer", e.message) }
        "#,
    );
    assert_eq!(out, "finally\ntry\ninner\nouter x");
}

#[test]
fn finally_return_overrides() {
    assert_eq!(output("function f() { try { throw 1 } finally { return 2 } } console.log(f())"), "2");
}

#[test]
fn rethrow_from_catch() {
    let out = output("try { try { throw new Error('a') } catch (e) { throw new Error(e.message + 'b') } } catch (e) { console.log(e.message) }");
    assert_eq!(out, "ab");
}

#[test]
fn catch_without_binding() {
    assert_eq!(output("try { JSON.parse('{') } catch { console.log('caught') }"), "caught");
}

#[test]
fn error_objects_are_plain_values() {
    let out = output("const e = new Error('m'); e.code = 7; console.log(e.code, e.message, typeof e, Object.keys(e).includes('code'))");
    assert_eq!(out, "7 m object true");
}

// ---------------------------------------------------------------------------
// Uncaught errors
// ---------------------------------------------------------------------------

#[test]
fn uncaught_error_message() {
    assert_eq!(error("throw new Error('Something went wrong')"), "Something went wrong");
    assert_eq!(error("throw 'plain string'"), "plain string");
    assert_eq!(error("throw { code: 1 }"), "[object Object]");
}

#[test]
fn uncaught_error_is_detached_with_origin_and_span() {
    let source = "let a = 1;\nthrow new RangeError('out of range');";
    let err = executor().execute_str(source).unwrap_err();
    match &err {
        ExecError::Uncaught { message, span, origin } => {
            assert_eq!(message, "out of range");
            assert_eq!(*origin, ThrowOrigin::Script);
            assert!(source[span.start..span.end].starts_with("throw new RangeError('out of range')"));
        }
        other => panic!("expected Uncaught, got {other:?}"),
    }
    let diagnostic = err.diagnostic(source).unwrap();
    assert!(diagnostic.contains("throw new RangeError"));
}

#[parameterized(
    parser = { "let x = ;", "unexpected token" },
    lexer = { "console.log('open", "unterminated string literal" },
)]
fn syntax_error_diagnostic_has_caret(source: &str, message: &str) {
    let err = executor().execute_str(source).unwrap_err();
    assert!(matches!(err, ExecError::Parse(_)), "{err:?}");
    let diagnostic = err.diagnostic(source).unwrap();
    assert!(diagnostic.contains(message), "{diagnostic}");
    assert!(diagnostic.contains(source), "{diagnostic}");
    assert!(diagnostic.contains('^'), "{diagnostic}");
}

#[test]
fn runtime_error_origin() {
    let err = executor().execute_str("let o;\no.field").unwrap_err();
    assert!(matches!(err, ExecError::Uncaught { origin: ThrowOrigin::Runtime, .. }), "{err:?}");
}

#[test]
fn syntax_error_is_reported_before_running() {
    let executor = executor();
    let source = "console.log('never');\nlet = ;";
    let err = executor.execute_str(source).unwrap_err();
    assert!(matches!(err, ExecError::Parse(_)));
    assert!(err.message(source).starts_with("SyntaxError: "), "{}", err.message(source));
    assert!(executor.capture().is_empty());
}

#[test]
fn unsupported_syntax_is_a_syntax_error() {
    let source = "class Animal {}";
    let err = executor().execute_str(source).unwrap_err();
    assert_eq!(err.message(source), "SyntaxError: classes are not supported (line 1, column 1)");
}
