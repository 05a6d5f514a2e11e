// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Object`, `Boolean`, and the methods every object answers to.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::exec::{ExecError, Interpreter, Key};
use crate::normalize::to_text;
use crate::value::{Object, Value};
use crate::Span;

use super::{arg, Method};

pub(crate) fn method(name: &str) -> Option<Method> {
    let method: Method = match name {
        "hasOwnProperty" => ("hasOwnProperty", has_own_property),
        "toString" => ("toString", to_string),
        _ => return None,
    };
    Some(method)
}

pub(super) fn static_member(name: &str) -> Option<Method> {
    let method: Method = match name {
        "keys" => ("keys", keys),
        "values" => ("values", values),
        "entries" => ("entries", entries),
        "assign" => ("assign", assign),
        "fromEntries" => ("fromEntries", from_entries),
        _ => return None,
    };
    Some(method)
}

/// `Object(value)`
pub(super) fn construct(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(match arg(args, 0) {
        Value::Undefined | Value::Null => interp.new_object(Object::default()),
        other => other,
    })
}

/// `Boolean(value)`
pub(super) fn boolean(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(arg(args, 0).truthy()))
}

fn to_string(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let text = interp.render(this)?;
    interp.new_string(text)
}

fn has_own_property(_interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let key = to_text(&arg(args, 0));
    Ok(Value::Bool(match this {
        Value::Object(obj) => obj.borrow().get(&key).is_some(),
        _ => false,
    }))
}

fn require_object(interp: &mut Interpreter, value: &Value) -> Result<(), ExecError> {
    if value.is_nullish() {
        return Err(interp.type_error("Cannot convert undefined or null to object"));
    }
    Ok(())
}

/// Own enumerable entries of `value`.
fn own_entries(interp: &mut Interpreter, value: &Value) -> Result<Vec<(Rc<str>, Value)>, ExecError> {
    require_object(interp, value)?;
    let keys = interp.enumerate_keys(value);
    let mut entries = Vec::with_capacity(keys.len());
    for key in keys {
        let item = interp.get_property(value, &Key::from_name(key.clone()))?;
        entries.push((key, item));
    }
    Ok(entries)
}

fn keys(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let target = arg(args, 0);
    require_object(interp, &target)?;
    let keys = interp.enumerate_keys(&target).into_iter().map(Value::Str).collect();
    Ok(interp.new_array(keys))
}

fn values(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let values = own_entries(interp, &arg(args, 0))?.into_iter().map(|(_, v)| v).collect();
    Ok(interp.new_array(values))
}

fn entries(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let mut pairs = Vec::new();
    for (key, item) in own_entries(interp, &arg(args, 0))? {
        pairs.push(interp.new_array(vec![Value::Str(key), item]));
    }
    Ok(interp.new_array(pairs))
}

fn assign(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let target = arg(args, 0);
    require_object(interp, &target)?;
    for source in args.iter().skip(1).filter(|s| !s.is_nullish()) {
        for (key, item) in own_entries(interp, source)? {
            interp.set_property(&target, Key::from_name(key), item)?;
        }
    }
    Ok(target)
}

fn from_entries(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let mut props = IndexMap::new();
    for entry in interp.iterate(&arg(args, 0), Span::default())? {
        let key = interp.get_property(&entry, &Key::Index(0))?;
        let item = interp.get_property(&entry, &Key::Index(1))?;
        props.insert(Rc::from(to_text(&key)), item);
    }
    Ok(interp.new_object(Object::plain(props)))
}
