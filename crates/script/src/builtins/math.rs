// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Math`. There is no `Math.random`, so runs stay deterministic.

use std::f64::consts;

use crate::exec::ops::{pow as js_pow, to_number};
use crate::exec::{ExecError, Interpreter};
use crate::value::Value;

use super::arg;

pub(super) fn install(interp: &mut Interpreter) -> Value {
    let math = super::namespace(
        interp,
        &[
            ("abs", 1, abs),
            ("floor", 1, floor),
            ("ceil", 1, ceil),
            ("round", 1, round),
            ("trunc", 1, trunc),
            ("sign", 1, sign),
            ("sqrt", 1, sqrt),
            ("cbrt", 1, cbrt),
            ("log", 1, log),
            ("log2", 1, log2),
            ("log10", 1, log10),
            ("exp", 1, exp),
            ("sin", 1, sin),
            ("cos", 1, cos),
            ("tan", 1, tan),
            ("atan2", 2, atan2),
            ("pow", 2, pow),
            ("hypot", 2, hypot),
            ("max", 2, max),
            ("min", 2, min),
        ],
    );
    if let Value::Object(obj) = &math {
        let mut obj = obj.borrow_mut();
        for (name, value) in [
            ("PI", consts::PI),
            ("E", consts::E),
            ("LN2", consts::LN_2),
            ("LN10", consts::LN_10),
            ("LOG2E", consts::LOG2_E),
            ("LOG10E", consts::LOG10_E),
            ("SQRT2", consts::SQRT_2),
            ("SQRT1_2", consts::FRAC_1_SQRT_2),
        ] {
            obj.props.insert(name.into(), Value::Number(value));
        }
    }
    math
}

fn unary(args: &[Value], f: fn(f64) -> f64) -> Result<Value, ExecError> {
    Ok(Value::Number(f(to_number(&arg(args, 0)))))
}

fn abs(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::abs)
}

fn floor(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::floor)
}

fn ceil(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::ceil)
}

/// Rounds half toward positive infinity: `round(-2.5)` is `-2`.
pub(crate) fn round_half_up(n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn round(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, round_half_up)
}

fn trunc(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::trunc)
}

fn sign(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, |n| if n.is_nan() || n == 0.0 { n } else { n.signum() })
}

fn sqrt(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::sqrt)
}

fn cbrt(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::cbrt)
}

fn log(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::ln)
}

fn log2(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::log2)
}

fn log10(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::log10)
}

fn exp(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::exp)
}

fn sin(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::sin)
}

fn cos(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::cos)
}

fn tan(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    unary(args, f64::tan)
}

fn atan2(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Number(to_number(&arg(args, 0)).atan2(to_number(&arg(args, 1)))))
}

fn pow(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Number(js_pow(to_number(&arg(args, 0)), to_number(&arg(args, 1)))))
}

fn hypot(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let sum: f64 = args.iter().map(|a| to_number(a).powi(2)).sum();
    Ok(Value::Number(sum.sqrt()))
}

fn max(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let mut best = f64::NEG_INFINITY;
    for n in args.iter().map(to_number) {
        if n.is_nan() {
            return Ok(Value::Number(f64::NAN));
        }
        if n > best || (n == 0.0 && best == 0.0 && best.is_sign_negative()) {
            best = n;
        }
    }
    Ok(Value::Number(best))
}

fn min(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let mut best = f64::INFINITY;
    for n in args.iter().map(to_number) {
        if n.is_nan() {
            return Ok(Value::Number(f64::NAN));
        }
        if n < best || (n == 0.0 && best == 0.0 && n.is_sign_negative()) {
            best = n;
        }
    }
    Ok(Value::Number(best))
}
