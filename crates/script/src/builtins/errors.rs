// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error constructors. Calling with or without `new` gives the same result.

use crate::exec::{ExecError, Interpreter};
use crate::normalize::to_text;
use crate::value::{NativeFn, Value};

pub(super) const CONSTRUCTORS: &[(&str, NativeFn, usize)] = &[
    ("Error", error, 1),
    ("TypeError", type_error, 1),
    ("RangeError", range_error, 1),
    ("ReferenceError", reference_error, 1),
    ("SyntaxError", syntax_error, 1),
];

fn build(interp: &mut Interpreter, name: &str, args: &[Value]) -> Result<Value, ExecError> {
    let message = match args.first() {
        None | Some(Value::Undefined) => String::new(),
        Some(value) => to_text(value),
    };
    Ok(interp.error_value(name, &message))
}

fn error(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    build(interp, "Error", args)
}

fn type_error(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    build(interp, "TypeError", args)
}

fn range_error(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    build(interp, "RangeError", args)
}

fn reference_error(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    build(interp, "ReferenceError", args)
}

fn syntax_error(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    build(interp, "SyntaxError", args)
}
