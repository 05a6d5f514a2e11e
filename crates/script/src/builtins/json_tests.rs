// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::test_support::{error, output};
use yare::parameterized;

#[parameterized(
    number = { "JSON.stringify(1.5)", "1.5" },
    string = { r#"JSON.stringify("a\"b")"#, r#""a\"b""# },
    array = { "JSON.stringify([1, 'x', null, true])", r#"[1,"x",null,true]"# },
    object = { "JSON.stringify({ b: 1, a: [2] })", r#"{"b":1,"a":[2]}"# },
    omits_undefined = { "JSON.stringify({ a: undefined, f() {}, b: 2 })", r#"{"b":2}"# },
    undefined_in_array = { "JSON.stringify([undefined, () => 1])", "[null,null]" },
    non_finite = { "JSON.stringify([NaN, Infinity])", "[null,null]" },
    empty = { "JSON.stringify([{}, []])", "[{},[]]" },
    top_undefined = { "String(JSON.stringify(undefined))", "undefined" },
)]
fn stringify(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[test]
fn stringify_pretty() {
    let out = output(r#"console.log(JSON.stringify({ a: [1, 2], b: {} }, null, 2))"#);
    assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}");
}

#[test]
fn stringify_string_indent() {
    let out = output(r#"console.log(JSON.stringify([1], null, "--"))"#);
    assert_eq!(out, "[\n--1\n]");
}

#[test]
fn stringify_cycle_throws() {
    let message = error("const a = []; a.push(a); JSON.stringify(a);");
    assert_eq!(message, "Converting circular structure to JSON");
}

#[test]
fn stringify_shared_reference_is_not_a_cycle() {
    let out = output("const x = { v: 1 }; console.log(JSON.stringify([x, x]))");
    assert_eq!(out, r#"[{"v":1},{"v":1}]"#);
}

#[test]
fn parse_builds_values() {
    let out = output(
        r#"
        const v = JSON.parse('{"n": 1.5, "list": [1, "two", null], "ok": false}');
        console.log(v.n, v.list.length, v.list[1], v.list[2], v.ok);
        console.log(JSON.stringify(v));
        "#,
    );
    assert_eq!(out, "1.5 3 two null false\n{\"n\":1.5,\"list\":[1,\"two\",null],\"ok\":false}");
}

#[parameterized(
    truncated = { r#"JSON.parse("[1, 2")"#, "Unexpected end of JSON input" },
    empty = { r#"JSON.parse("")"#, "Unexpected end of JSON input" },
    bad_token = { r#"JSON.parse("{x}")"#, "Unexpected token in JSON at line 1 column 2" },
)]
fn parse_errors(source: &str, message: &str) {
    assert_eq!(error(source), message);
}

#[test]
fn parse_error_is_catchable_syntax_error() {
    let out = output(r#"try { JSON.parse("nope") } catch (e) { console.log(e.name, e instanceof SyntaxError) }"#);
    assert_eq!(out, "SyntaxError true");
}
