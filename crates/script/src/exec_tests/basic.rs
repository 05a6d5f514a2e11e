// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for literals, operators, and coercions.

use super::{executor, output};
use yare::parameterized;

#[test]
fn empty_script_runs() {
    let executor = executor();
    executor.execute_str("").unwrap();
    assert!(executor.capture().is_empty());
}

#[test]
fn hello_world() {
    assert_eq!(output("console.log('Hello, World!')"), "Hello, World!");
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[parameterized(
    add = { "1 + 2", "3" },
    precedence = { "2 + 3 * 4", "14" },
    float = { "0.1 + 0.2", "0.30000000000000004" },
    division = { "7 / 2", "3.5" },
    divide_by_zero = { "1 / 0", "Infinity" },
    negative_zero = { "-0", "0" },
    remainder = { "-7 % 3", "-1" },
    power = { "2 ** 10", "1024" },
    power_chain = { "2 ** 3 ** 2", "512" },
    nan = { "0 / 0", "NaN" },
    large = { "2 ** 70", "1.1805916207174113e+21" },
    small = { "1 / 3e7", "3.3333333333333334e-8" },
)]
fn arithmetic(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

#[parameterized(
    string_concat = { "'1' + 2", "12" },
    number_first = { "1 + 2 + '3'", "33" },
    subtract_strings = { "'5' - '2'", "3" },
    bool_math = { "true + true", "2" },
    null_math = { "null + 1", "1" },
    undefined_math = { "undefined + 1", "NaN" },
    array_concat = { "[1, 2] + [3]", "1,23" },
    object_concat = { "'' + {}", "[object Object]" },
    unary_plus = { "+'42'", "42" },
    unary_plus_empty = { "+''", "0" },
    not = { "!'' && !0 && !null", "true" },
)]
fn coercion(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[parameterized(
    loose = { "1 == '1'", "true" },
    strict = { "1 === '1'", "false" },
    null_undefined = { "null == undefined", "true" },
    null_zero = { "null == 0", "false" },
    nan = { "NaN === NaN", "false" },
    objects_by_identity = { "[] === []", "false" },
    string_compare = { "'apple' < 'banana'", "true" },
    numeric_string_compare = { "'10' < '9'", "true" },
    mixed_compare = { "'10' < 9", "false" },
)]
fn comparison(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[parameterized(
    number = { "typeof 1", "number" },
    string = { "typeof ''", "string" },
    boolean = { "typeof true", "boolean" },
    undefined = { "typeof undefined", "undefined" },
    undeclared = { "typeof notDeclared", "undefined" },
    null = { "typeof null", "object" },
    array = { "typeof []", "object" },
    function = { "typeof (() => 1)", "function" },
    builtin = { "typeof console.log", "function" },
)]
fn type_of(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[parameterized(
    and_returns_operand = { "0 && 'x'", "0" },
    or_returns_operand = { "'' || 'fallback'", "fallback" },
    nullish_keeps_zero = { "0 ?? 5", "0" },
    nullish_replaces_null = { "null ?? 5", "5" },
    conditional = { "1 > 2 ? 'a' : 'b'", "b" },
    void = { "void 1", "undefined" },
    sequence = { "(1, 2, 3)", "3" },
)]
fn operators(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[test]
fn short_circuit_skips_right_side() {
    let out = output("let n = 0; false && n++; true || n++; 1 ?? n++; console.log(n)");
    assert_eq!(out, "0");
}

#[test]
fn logical_assignment() {
    let out = output(
        r#"
        let a = null; a ??= 1;
        let b = 0; b ||= 2;
        let c = 1; c &&= 3;
        let d = 5; d += 1; d **= 2;
        console.log(a, b, c, d);
        "#,
    );
    assert_eq!(out, "1 2 3 36");
}

#[test]
fn update_expressions() {
    let out = output("let i = 1; const a = i++; const b = ++i; console.log(a, b, i--, i)");
    assert_eq!(out, "1 3 3 2");
}

#[test]
fn template_literals() {
    let out = output("const name = 'Ada'; const n = 2; console.log(`Hi ${name}, ${n * 21} ${[1, 2]}`)");
    assert_eq!(out, "Hi Ada, 42 1,2");
}

#[test]
fn string_indexing() {
    assert_eq!(output("const s = 'hey'; console.log(s[0], s.length, s[9])"), "h 3 undefined");
}
