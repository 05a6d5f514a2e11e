// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Number`, number methods, and the numeric global functions.

use crate::exec::ops::{to_integer, to_number};
use crate::exec::{ExecError, Interpreter};
use crate::normalize::{format_number, to_text};
use crate::value::Value;

use super::{arg, native, Method};

/// Fractional digits emitted by `toString(radix)` for non-decimal radixes.
const MAX_RADIX_FRACTION_DIGITS: usize = 52;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub(crate) fn method(name: &str) -> Option<Method> {
    let method: Method = match name {
        "toFixed" => ("toFixed", to_fixed),
        "toString" => ("toString", to_string),
        "valueOf" => ("valueOf", value_of),
        _ => return None,
    };
    Some(method)
}

pub(super) fn static_member(name: &str) -> Value {
    match name {
        "MAX_SAFE_INTEGER" => Value::Number(MAX_SAFE_INTEGER),
        "MIN_SAFE_INTEGER" => Value::Number(-MAX_SAFE_INTEGER),
        "EPSILON" => Value::Number(f64::EPSILON),
        "MAX_VALUE" => Value::Number(f64::MAX),
        "MIN_VALUE" => Value::Number(5e-324),
        "POSITIVE_INFINITY" => Value::Number(f64::INFINITY),
        "NEGATIVE_INFINITY" => Value::Number(f64::NEG_INFINITY),
        "NaN" => Value::Number(f64::NAN),
        "isInteger" => native("isInteger", 1, is_integer),
        "isSafeInteger" => native("isSafeInteger", 1, is_safe_integer),
        "isFinite" => native("isFinite", 1, number_is_finite),
        "isNaN" => native("isNaN", 1, number_is_nan),
        "parseFloat" => native("parseFloat", 1, parse_float),
        "parseInt" => native("parseInt", 2, parse_int),
        _ => Value::Undefined,
    }
}

fn this_number(interp: &mut Interpreter, this: &Value, method: &str) -> Result<f64, ExecError> {
    match this {
        Value::Number(n) => Ok(*n),
        _ => Err(interp.type_error(format!("Number.prototype.{} requires that 'this' be a Number", method))),
    }
}

/// `Number(value)`
pub(super) fn construct(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Number(args.first().map_or(0.0, to_number)))
}

fn value_of(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Number(this_number(interp, this, "valueOf")?))
}

fn to_fixed(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let n = this_number(interp, this, "toFixed")?;
    let digits = to_integer(&arg(args, 0));
    if !(0.0..=100.0).contains(&digits) {
        return Err(interp.throw("RangeError", "toFixed() digits argument must be between 0 and 100"));
    }
    if !n.is_finite() || n.abs() >= 1e21 {
        return Ok(Value::str(format_number(n)));
    }
    Ok(Value::str(fixed(n, digits as usize)))
}

/// Decimal text of `n` with exactly `digits` fractional digits. Rounds on
/// the exact binary value, with ties going away from zero.
pub(crate) fn fixed(n: f64, digits: usize) -> String {
    let negative = n < 0.0;
    // 1074 digits is the longest exact fractional expansion of an f64.
    let exact = format!("{:.1074}", n.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((&exact, ""));

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|b| *b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|b| *b as char));
    }
    out
}

fn to_string(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let n = this_number(interp, this, "toString")?;
    let radix = match args.first() {
        None | Some(Value::Undefined) => 10.0,
        Some(value) => to_integer(value),
    };
    if !(2.0..=36.0).contains(&radix) {
        return Err(interp.throw("RangeError", "toString() radix must be between 2 and 36"));
    }
    if radix == 10.0 || !n.is_finite() {
        return Ok(Value::str(format_number(n)));
    }
    Ok(Value::str(radix_string(n, radix as u32)))
}

/// `n` written in base `radix`.
pub(crate) fn radix_string(n: f64, radix: u32) -> String {
    let base = f64::from(radix);
    let negative = n < 0.0;
    let n = n.abs();
    let mut int = n.trunc();
    let mut frac = n - int;

    let mut int_digits = Vec::new();
    loop {
        let digit = (int % base) as u32;
        int_digits.push(std::char::from_digit(digit, radix).unwrap_or('0'));
        int = (int / base).trunc();
        if int < 1.0 {
            break;
        }
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.extend(int_digits.iter().rev());

    if frac > 0.0 {
        out.push('.');
        let mut emitted = 0;
        while frac > 0.0 && emitted < MAX_RADIX_FRACTION_DIGITS {
            frac *= base;
            let digit = frac.trunc();
            frac -= digit;
            out.push(std::char::from_digit(digit as u32, radix).unwrap_or('0'));
            emitted += 1;
        }
        while out.ends_with('0') {
            out.pop();
        }
    }
    out
}

fn is_integer(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(matches!(arg(args, 0), Value::Number(n) if n.is_finite() && n.fract() == 0.0)))
}

fn is_safe_integer(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(matches!(
        arg(args, 0),
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
    )))
}

fn number_is_finite(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(matches!(arg(args, 0), Value::Number(n) if n.is_finite())))
}

fn number_is_nan(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(matches!(arg(args, 0), Value::Number(n) if n.is_nan())))
}

/// Global `isNaN`, which coerces its argument.
pub(super) fn is_nan(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(to_number(&arg(args, 0)).is_nan()))
}

/// Global `isFinite`, which coerces its argument.
pub(super) fn is_finite(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(to_number(&arg(args, 0)).is_finite()))
}

pub(super) fn parse_int(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let text = to_text(&arg(args, 0));
    let radix = match args.get(1) {
        None | Some(Value::Undefined) => 0.0,
        Some(value) => to_integer(value),
    };
    Ok(Value::Number(parse_int_prefix(&text, radix)))
}

/// Parse the longest integer prefix of `text` in `radix` (0 means detect).
pub(crate) fn parse_int_prefix(text: &str, radix: f64) -> f64 {
    let s = text.trim_start();
    let (sign, s) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    let mut radix = radix as i64;
    let mut strip_prefix = true;
    if radix == 0 {
        radix = 10;
    } else if !(2..=36).contains(&radix) {
        return f64::NAN;
    } else if radix != 16 {
        strip_prefix = false;
    }

    let mut s = s;
    if strip_prefix {
        if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            s = rest;
            radix = 16;
        }
    }

    let radix = radix as u32;
    let digits: String = s.chars().take_while(|c| c.is_digit(radix)).collect();
    match crate::exec::ops::parse_radix_digits(&digits, radix) {
        Some(value) => sign * value,
        None => f64::NAN,
    }
}

pub(super) fn parse_float(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Number(parse_float_prefix(&to_text(&arg(args, 0)))))
}

/// Parse the longest decimal literal prefix of `text`.
pub(crate) fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let dot = end;
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        mantissa_digits += end - dot - 1;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
