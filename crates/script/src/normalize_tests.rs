// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::value::Object;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    integer = { 1.0, "1" },
    negative = { -42.0, "-42" },
    half = { 0.5, "0.5" },
    tenth_sum = { 0.1 + 0.2, "0.30000000000000004" },
    negative_zero = { -0.0, "0" },
    large_integer = { 123456789012.0, "123456789012" },
    max_plain = { 1e20, "100000000000000000000" },
    exponent_threshold = { 1e21, "1e+21" },
    big_mantissa = { 1.5e300, "1.5e+300" },
    small_plain = { 0.000001, "0.000001" },
    small_exponent = { 1e-7, "1e-7" },
    small_mantissa = { 1.25e-7, "1.25e-7" },
    nan = { f64::NAN, "NaN" },
    infinity = { f64::INFINITY, "Infinity" },
    neg_infinity = { f64::NEG_INFINITY, "-Infinity" },
    max_safe = { 9007199254740991.0, "9007199254740991" },
)]
fn number_formatting(n: f64, expected: &str) {
    assert_eq!(format_number(n), expected);
}

fn error_value(name: &str, message: &str) -> Value {
    Value::object(Object::error(name, message))
}

#[parameterized(
    undefined = { Value::Undefined, "undefined" },
    null = { Value::Null, "null" },
    true_bool = { Value::Bool(true), "true" },
    false_bool = { Value::Bool(false), "false" },
    string = { Value::str("hi there"), "hi there" },
    plain_object = { Value::object(Object::default()), "[object Object]" },
    array = { Value::array(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]), "1,2,3" },
    nested_array = {
        Value::array(vec![Value::Number(1.0), Value::array(vec![Value::Number(2.0), Value::Number(3.0)])]),
        "1,2,3"
    },
    nullish_elements = { Value::array(vec![Value::Null, Value::Number(1.0), Value::Undefined]), ",1," },
    empty_array = { Value::array(vec![]), "" },
    error = { error_value("TypeError", "bad input"), "TypeError: bad input" },
    error_without_message = { error_value("Error", ""), "Error" },
)]
fn value_text(value: Value, expected: &str) {
    assert_eq!(to_text(&value), expected);
}

#[test]
fn cyclic_array_renders_back_reference_empty() {
    let a = Value::array(vec![Value::Number(1.0)]);
    if let Value::Array(items) = &a {
        items.borrow_mut().push(a.clone());
    }
    assert_eq!(to_text(&a), "1,");
    if let Value::Array(items) = &a {
        items.borrow_mut().clear();
    }
}

#[test]
fn arguments_join_with_single_space() {
    let args = [Value::str("a"), Value::Number(1.0), Value::Bool(true), Value::Null];
    assert_eq!(join_args(&args), "a 1 true null");
    assert_eq!(join_args(&[]), "");
}

#[parameterized(
    info = { Channel::Info, "x 1" },
    error = { Channel::Error, "Error: x 1" },
    warning = { Channel::Warning, "Warning: x 1" },
)]
fn channel_prefix(channel: Channel, expected: &str) {
    assert_eq!(format_line(channel, &[Value::str("x"), Value::Number(1.0)]), expected);
}

#[test]
fn thrown_error_reports_message_only() {
    assert_eq!(thrown_message(&error_value("RangeError", "too far")), "too far");
}

#[test]
fn thrown_primitive_reports_its_text() {
    assert_eq!(thrown_message(&Value::str("boom")), "boom");
    assert_eq!(thrown_message(&Value::Number(42.0)), "42");
    assert_eq!(thrown_message(&Value::object(Object::default())), "[object Object]");
}

#[parameterized(
    both = { "TypeError", "bad", "TypeError: bad" },
    no_message = { "TypeError", "", "TypeError" },
    no_name = { "", "bad", "bad" },
)]
fn error_string_parts(name: &str, message: &str, expected: &str) {
    assert_eq!(error_string(name, message), expected);
}

proptest! {
    #[test]
    fn integers_format_like_display(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
        prop_assert_eq!(format_number(n as f64), n.to_string());
    }

    #[test]
    fn finite_numbers_round_trip(n in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL) {
        let text = format_number(n);
        prop_assert_eq!(text.parse::<f64>().ok(), Some(n));
    }

    #[test]
    fn normalization_is_idempotent(items in proptest::collection::vec(-1e6f64..1e6, 0..8)) {
        let value = Value::array(items.into_iter().map(Value::Number).collect());
        prop_assert_eq!(to_text(&value), to_text(&value));
    }
}
