// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in globals and the methods of primitive values, arrays and
//! objects.
//!
//! Methods are looked up by name when a property is read (`arr.push`) and
//! bound to the receiver, so there is no prototype chain to maintain.

pub(crate) mod array;
mod console;
mod errors;
mod global;
mod json;
mod math;
pub(crate) mod number;
pub(crate) mod object;
pub(crate) mod string;

use std::rc::Rc;

use indexmap::IndexMap;

use crate::exec::{ExecError, Interpreter};
use crate::value::{ArrayRef, Function, NativeFn, NativeFunction, Object, Value};

/// A named built-in method.
pub(crate) type Method = (&'static str, NativeFn);

pub(crate) fn native(name: &'static str, arity: usize, func: NativeFn) -> Value {
    Value::Function(Rc::new(Function::Native(NativeFunction::new(name, arity, func))))
}

/// Argument `i`, or `undefined` when absent.
#[inline]
pub(crate) fn arg(args: &[Value], i: usize) -> Value {
    args.get(i).cloned().unwrap_or_default()
}

/// Object whose properties are the given functions, e.g. `Math`.
pub(crate) fn namespace(interp: &mut Interpreter, members: &[(&'static str, usize, NativeFn)]) -> Value {
    let props: IndexMap<Rc<str>, Value> =
        members.iter().map(|&(name, arity, func)| (Rc::from(name), native(name, arity, func))).collect();
    interp.new_object(Object::plain(props))
}

pub(crate) fn install_globals(interp: &mut Interpreter) {
    let mut globals: Vec<(&'static str, Value, bool)> = vec![
        ("undefined", Value::Undefined, false),
        ("NaN", Value::Number(f64::NAN), false),
        ("Infinity", Value::Number(f64::INFINITY), false),
    ];

    globals.push(("console", console::install(interp), true));
    globals.push(("Math", math::install(interp), true));
    globals.push(("JSON", json::install(interp), true));
    for &(name, func, arity) in errors::CONSTRUCTORS {
        globals.push((name, native(name, arity, func), true));
    }
    for &(name, arity, func) in global::FUNCTIONS {
        globals.push((name, native(name, arity, func), true));
    }

    let mut scope = interp.global.borrow_mut();
    for (name, value, mutable) in globals {
        scope.declare(name.into(), Some(value), mutable);
    }
}

/// Static members of built-in constructors (`Number.isInteger`,
/// `Array.isArray`, `Object.keys`).
pub(crate) fn static_member(constructor: &str, name: &str) -> Value {
    let member = match constructor {
        "Number" => return number::static_member(name),
        "Array" => array::static_member(name),
        "Object" => object::static_member(name),
        "String" => string::static_member(name),
        _ => None,
    };
    match member {
        Some((name, func)) => native(name, 1, func),
        None => Value::Undefined,
    }
}

/// `this` as an array, or a `TypeError` naming the method.
pub(crate) fn this_array(interp: &mut Interpreter, this: &Value, method: &str) -> Result<ArrayRef, ExecError> {
    match this {
        Value::Array(items) => Ok(items.clone()),
        _ => Err(interp.type_error(format!("Array.prototype.{} called on non-array", method))),
    }
}
