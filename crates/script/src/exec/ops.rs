// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type coercions and operator semantics that need no interpreter state.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::normalize::to_text;
use crate::value::Value;

/// `Number(value)`.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::Str(s) => parse_number(s),
        Value::Array(_) => parse_number(&to_text(value)),
        Value::Object(_) | Value::Function(_) => f64::NAN,
    }
}

/// String to number conversion: surrounding whitespace is ignored, empty
/// text is zero, and `0x`/`0o`/`0b` prefixes are honoured.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix).unwrap_or(f64::NAN);
    }

    // Rust accepts "inf" and "nan"; restrict to decimal literal characters.
    let valid = s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !valid || !s.bytes().any(|b| b.is_ascii_digit()) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// All characters must be digits of `radix`.
pub(crate) fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let mut value = 0.0f64;
    for c in digits.chars() {
        value = value * f64::from(radix) + f64::from(c.to_digit(radix)?);
    }
    Some(value)
}

/// `ToInt32`-free integer view used by index arguments: NaN becomes 0,
/// fractions truncate toward zero.
pub fn to_integer(value: &Value) -> f64 {
    let n = to_number(value);
    if n.is_nan() {
        0.0
    } else {
        n.trunc()
    }
}

/// Resolve a relative index argument (negative counts from the end) into
/// `0..=len`.
pub fn relative_index(value: &Value, len: usize, default: usize) -> usize {
    if matches!(value, Value::Undefined) {
        return default;
    }
    let n = to_integer(value);
    let len_f = len as f64;
    if n < 0.0 {
        (len_f + n).max(0.0) as usize
    } else {
        n.min(len_f) as usize
    }
}

/// Primitive form of a value for `+` and loose comparisons.
pub fn to_primitive(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) | Value::Function(_) => Value::Str(to_text(value).into()),
        other => other.clone(),
    }
}

/// `===`
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// `SameValueZero`, used by `includes`: like `===` but NaN equals NaN.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_nan() && y.is_nan() => true,
        _ => strict_equals(a, b),
    }
}

/// `==`
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Number(_), Value::Str(_)) | (Value::Str(_), Value::Number(_)) => to_number(a) == to_number(b),
        (Value::Bool(_), _) => loose_equals(&Value::Number(to_number(a)), b),
        (_, Value::Bool(_)) => loose_equals(a, &Value::Number(to_number(b))),
        (Value::Array(_) | Value::Object(_) | Value::Function(_), Value::Number(_) | Value::Str(_)) => {
            loose_equals(&to_primitive(a), b)
        }
        (Value::Number(_) | Value::Str(_), Value::Array(_) | Value::Object(_) | Value::Function(_)) => {
            loose_equals(a, &to_primitive(b))
        }
        _ => strict_equals(a, b),
    }
}

/// Abstract relational comparison. `None` when either side is NaN.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let (a, b) = (to_primitive(a), to_primitive(b));
    if let (Value::Str(x), Value::Str(y)) = (&a, &b) {
        return Some(x.as_ref().cmp(y.as_ref()));
    }
    to_number(&a).partial_cmp(&to_number(&b))
}

/// `**`, which differs from `powf` for NaN exponents and `±1 ** ±Infinity`.
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
