// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    empty = { "", 0.0 },
    spaces = { "  12  ", 12.0 },
    decimal = { "3.5", 3.5 },
    exponent = { "1e3", 1000.0 },
    hex = { "0x1f", 31.0 },
    binary = { "0b11", 3.0 },
    infinity = { "-Infinity", f64::NEG_INFINITY },
)]
fn string_to_number(text: &str, expected: f64) {
    assert_eq!(parse_number(text), expected);
}

#[parameterized(
    word = { "abc" },
    trailing_garbage = { "12px" },
    rust_inf = { "inf" },
    rust_nan = { "nan" },
    bare_sign = { "-" },
    bad_hex = { "0xg" },
)]
fn string_to_nan(text: &str) {
    assert!(parse_number(text).is_nan(), "{text}");
}

#[test]
fn value_to_number() {
    assert!(to_number(&Value::Undefined).is_nan());
    assert_eq!(to_number(&Value::Null), 0.0);
    assert_eq!(to_number(&Value::Bool(true)), 1.0);
    assert_eq!(to_number(&Value::array(vec![])), 0.0);
    assert_eq!(to_number(&Value::array(vec![Value::Number(7.0)])), 7.0);
    assert!(to_number(&Value::array(vec![Value::Number(1.0), Value::Number(2.0)])).is_nan());
}

#[parameterized(
    absent = { Value::Undefined, 5, 2, 2 },
    positive = { Value::Number(3.0), 5, 0, 3 },
    past_end = { Value::Number(9.0), 5, 0, 5 },
    negative = { Value::Number(-2.0), 5, 0, 3 },
    far_negative = { Value::Number(-9.0), 5, 0, 0 },
    fraction = { Value::Number(1.7), 5, 0, 1 },
    nan = { Value::str("x"), 5, 4, 0 },
)]
fn relative_indices(value: Value, len: usize, default: usize, expected: usize) {
    assert_eq!(relative_index(&value, len, default), expected);
}

#[test]
fn strict_equality() {
    assert!(strict_equals(&Value::Number(1.0), &Value::Number(1.0)));
    assert!(strict_equals(&Value::Number(0.0), &Value::Number(-0.0)));
    assert!(!strict_equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    assert!(!strict_equals(&Value::Number(1.0), &Value::str("1")));
    assert!(!strict_equals(&Value::Null, &Value::Undefined));

    let a = Value::array(vec![]);
    assert!(strict_equals(&a, &a.clone()));
    assert!(!strict_equals(&a, &Value::array(vec![])));
}

#[test]
fn same_value_zero_matches_nan() {
    assert!(same_value_zero(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    assert!(same_value_zero(&Value::Number(0.0), &Value::Number(-0.0)));
}

#[parameterized(
    null_undefined = { Value::Null, Value::Undefined, true },
    number_string = { Value::Number(1.0), Value::str("1"), true },
    bool_number = { Value::Bool(true), Value::Number(1.0), true },
    bool_string = { Value::Bool(false), Value::str("0"), true },
    empty_string_zero = { Value::str(""), Value::Number(0.0), true },
    null_zero = { Value::Null, Value::Number(0.0), false },
    array_string = { Value::array(vec![Value::Number(1.0), Value::Number(2.0)]), Value::str("1,2"), true },
    nan_nan = { Value::Number(f64::NAN), Value::Number(f64::NAN), false },
)]
fn loose_equality(a: Value, b: Value, expected: bool) {
    assert_eq!(loose_equals(&a, &b), expected);
    assert_eq!(loose_equals(&b, &a), expected);
}

#[test]
fn relational_comparison() {
    assert_eq!(compare(&Value::Number(1.0), &Value::Number(2.0)), Some(Ordering::Less));
    assert_eq!(compare(&Value::str("b"), &Value::str("a")), Some(Ordering::Greater));
    // Strings compare as text, not numbers
    assert_eq!(compare(&Value::str("10"), &Value::str("9")), Some(Ordering::Less));
    assert_eq!(compare(&Value::str("10"), &Value::Number(9.0)), Some(Ordering::Greater));
    assert_eq!(compare(&Value::Number(f64::NAN), &Value::Number(1.0)), None);
}

#[test]
fn exponent_edge_cases() {
    assert_eq!(pow(2.0, 10.0), 1024.0);
    assert!(pow(1.0, f64::INFINITY).is_nan());
    assert!(pow(2.0, f64::NAN).is_nan());
    assert_eq!(pow(f64::NAN, 0.0), 1.0);
}
