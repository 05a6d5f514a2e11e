// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Array` and array methods.

use std::cmp::Ordering;

use crate::exec::ops::{relative_index, same_value_zero, strict_equals, to_integer, to_number};
use crate::exec::{ExecError, Interpreter, Key};
use crate::normalize::to_text;
use crate::value::{ArrayRef, Value};
use crate::Span;

use super::{arg, this_array, Method};

/// `flat(Infinity)` on a self-containing array stops here.
const MAX_FLAT_DEPTH: usize = 10_000;

pub(crate) fn method(name: &str) -> Option<Method> {
    let method: Method = match name {
        "push" => ("push", push),
        "pop" => ("pop", pop),
        "shift" => ("shift", shift),
        "unshift" => ("unshift", unshift),
        "slice" => ("slice", slice),
        "splice" => ("splice", splice),
        "concat" => ("concat", concat),
        "join" => ("join", join),
        "reverse" => ("reverse", reverse),
        "indexOf" => ("indexOf", index_of),
        "lastIndexOf" => ("lastIndexOf", last_index_of),
        "includes" => ("includes", includes),
        "find" => ("find", find),
        "findIndex" => ("findIndex", find_index),
        "findLast" => ("findLast", find_last),
        "findLastIndex" => ("findLastIndex", find_last_index),
        "filter" => ("filter", filter),
        "map" => ("map", map),
        "forEach" => ("forEach", for_each),
        "reduce" => ("reduce", reduce),
        "reduceRight" => ("reduceRight", reduce_right),
        "some" => ("some", some),
        "every" => ("every", every),
        "sort" => ("sort", sort),
        "flat" => ("flat", flat),
        "flatMap" => ("flatMap", flat_map),
        "fill" => ("fill", fill),
        "at" => ("at", at),
        "keys" => ("keys", keys),
        "values" => ("values", values),
        "entries" => ("entries", entries),
        "toString" => ("toString", to_string),
        _ => return None,
    };
    Some(method)
}

pub(super) fn static_member(name: &str) -> Option<Method> {
    let method: Method = match name {
        "isArray" => ("isArray", is_array),
        "from" => ("from", from),
        "of" => ("of", of),
        _ => return None,
    };
    Some(method)
}

/// `Array(...)`: a single number argument is a length.
pub(super) fn construct(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    if let [Value::Number(n)] = args {
        if *n < 0.0 || n.fract() != 0.0 || *n > f64::from(u32::MAX) {
            return Err(interp.throw("RangeError", "Invalid array length"));
        }
        let len = *n as usize;
        interp.check_array_len(len)?;
        return Ok(interp.new_array(vec![Value::Undefined; len]));
    }
    Ok(interp.new_array(args.to_vec()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn len_of(items: &ArrayRef) -> usize {
    items.borrow().len()
}

fn item_at(items: &ArrayRef, i: usize) -> Value {
    items.borrow().get(i).cloned().unwrap_or_default()
}

fn callback(interp: &mut Interpreter, args: &[Value]) -> Result<Value, ExecError> {
    let callee = arg(args, 0);
    if !matches!(callee, Value::Function(_)) {
        return Err(interp.type_error(format!("{} is not a function", to_text(&callee))));
    }
    Ok(callee)
}

/// Call `callee(item, index, array)` with the optional `thisArg`.
fn visit(
    interp: &mut Interpreter,
    callee: &Value,
    args: &[Value],
    this: &Value,
    item: Value,
    index: usize,
) -> Result<Value, ExecError> {
    interp.call_value(callee, arg(args, 1), vec![item, Value::Number(index as f64), this.clone()])
}

fn number(n: usize) -> Value {
    Value::Number(n as f64)
}

// ---------------------------------------------------------------------------
// Mutators
// ---------------------------------------------------------------------------

fn push(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "push")?;
    let len = len_of(&items) + args.len();
    interp.check_array_len(len)?;
    items.borrow_mut().extend(args.iter().cloned());
    Ok(number(len))
}

fn pop(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "pop")?;
    let popped = items.borrow_mut().pop();
    Ok(popped.unwrap_or_default())
}

fn shift(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "shift")?;
    let mut items = items.borrow_mut();
    Ok(if items.is_empty() { Value::Undefined } else { items.remove(0) })
}

fn unshift(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "unshift")?;
    let len = len_of(&items) + args.len();
    interp.check_array_len(len)?;
    items.borrow_mut().splice(0..0, args.iter().cloned());
    Ok(number(len))
}

fn splice(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "splice")?;
    let len = len_of(&items);
    if args.is_empty() {
        return Ok(interp.new_array(Vec::new()));
    }
    let start = relative_index(&args[0], len, 0);
    let delete = match args.get(1) {
        None => len - start,
        Some(count) => to_integer(count).clamp(0.0, (len - start) as f64) as usize,
    };
    let inserted = args.get(2..).unwrap_or_default();
    interp.check_array_len(len - delete + inserted.len())?;
    let removed: Vec<Value> = items.borrow_mut().splice(start..start + delete, inserted.iter().cloned()).collect();
    Ok(interp.new_array(removed))
}

fn reverse(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "reverse")?;
    items.borrow_mut().reverse();
    Ok(this.clone())
}

fn fill(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "fill")?;
    let len = len_of(&items);
    let start = relative_index(&arg(args, 1), len, 0);
    let end = relative_index(&arg(args, 2), len, len);
    let value = arg(args, 0);
    if start < end {
        for slot in &mut items.borrow_mut()[start..end] {
            *slot = value.clone();
        }
    }
    Ok(this.clone())
}

fn sort(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "sort")?;
    let comparator = arg(args, 0);
    if !matches!(comparator, Value::Undefined | Value::Function(_)) {
        return Err(interp.type_error("The comparison function must be either a function or undefined"));
    }

    let snapshot = items.borrow().clone();
    let (defined, undefined): (Vec<Value>, Vec<Value>) =
        snapshot.into_iter().partition(|v| !matches!(v, Value::Undefined));

    let mut sorted = if let Value::Function(_) = comparator {
        merge_sort(defined, &mut |a, b| {
            let result = interp.call_value(&comparator, Value::Undefined, vec![a.clone(), b.clone()])?;
            let n = to_number(&result);
            Ok(if n > 0.0 {
                Ordering::Greater
            } else if n < 0.0 {
                Ordering::Less
            } else {
                Ordering::Equal
            })
        })?
    } else {
        let mut keyed = Vec::with_capacity(defined.len());
        for value in defined {
            interp.tick()?;
            keyed.push((interp.render(&value)?, value));
        }
        merge_sort(keyed, &mut |a, b| {
            interp.tick()?;
            Ok(a.0.cmp(&b.0))
        })?
        .into_iter()
        .map(|(_, value)| value)
        .collect()
    };
    sorted.extend(undefined);
    *items.borrow_mut() = sorted;
    Ok(this.clone())
}

/// Stable merge sort with a comparator that may fail.
fn merge_sort<T, F>(mut items: Vec<T>, cmp: &mut F) -> Result<Vec<T>, ExecError>
where
    F: FnMut(&T, &T) -> Result<Ordering, ExecError>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp)?;
    let right = merge_sort(right, cmp)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        let next = if cmp(a, b)? == Ordering::Greater { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

fn slice(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "slice")?;
    let len = len_of(&items);
    let start = relative_index(&arg(args, 0), len, 0);
    let end = relative_index(&arg(args, 1), len, len);
    let sliced = if start < end { items.borrow()[start..end].to_vec() } else { Vec::new() };
    Ok(interp.new_array(sliced))
}

fn concat(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "concat")?;
    let mut out = items.borrow().clone();
    for value in args {
        match value {
            Value::Array(other) => out.extend(other.borrow().iter().cloned()),
            other => out.push(other.clone()),
        }
        interp.check_array_len(out.len())?;
    }
    Ok(interp.new_array(out))
}

fn join(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    this_array(interp, this, "join")?;
    let separator = match arg(args, 0) {
        Value::Undefined => ",".to_string(),
        other => interp.render(&other)?,
    };
    let text = interp.render_join(this, &separator)?;
    interp.new_string(text)
}

fn to_string(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    this_array(interp, this, "toString")?;
    let text = interp.render(this)?;
    interp.new_string(text)
}

fn index_of(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "indexOf")?;
    let items = items.borrow();
    let from = relative_index(&arg(args, 1), items.len(), 0);
    let needle = arg(args, 0);
    let found = items.iter().skip(from).position(|v| strict_equals(v, &needle)).map(|i| i + from);
    Ok(found.map_or(Value::Number(-1.0), number))
}

fn last_index_of(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "lastIndexOf")?;
    let items = items.borrow();
    let len = items.len() as f64;
    let from = match args.get(1) {
        None => len - 1.0,
        Some(value) => {
            let n = to_integer(value);
            if n < 0.0 {
                len + n
            } else {
                n.min(len - 1.0)
            }
        }
    };
    if from < 0.0 {
        return Ok(Value::Number(-1.0));
    }
    let needle = arg(args, 0);
    let found = items[..=from as usize].iter().rposition(|v| strict_equals(v, &needle));
    Ok(found.map_or(Value::Number(-1.0), number))
}

fn includes(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "includes")?;
    let items = items.borrow();
    let from = relative_index(&arg(args, 1), items.len(), 0);
    let needle = arg(args, 0);
    Ok(Value::Bool(items.iter().skip(from).any(|v| same_value_zero(v, &needle))))
}

fn at(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "at")?;
    let len = len_of(&items) as f64;
    let n = to_integer(&arg(args, 0));
    let index = if n < 0.0 { len + n } else { n };
    if index < 0.0 || index >= len {
        return Ok(Value::Undefined);
    }
    Ok(item_at(&items, index as usize))
}

fn keys(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "keys")?;
    let keys = (0..len_of(&items)).map(number).collect();
    Ok(interp.new_array(keys))
}

fn values(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "values")?;
    let values = items.borrow().clone();
    Ok(interp.new_array(values))
}

fn entries(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "entries")?;
    let snapshot = items.borrow().clone();
    let mut pairs = Vec::with_capacity(snapshot.len());
    for (i, item) in snapshot.into_iter().enumerate() {
        pairs.push(interp.new_array(vec![number(i), item]));
    }
    Ok(interp.new_array(pairs))
}

fn flat(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "flat")?;
    let depth = match arg(args, 0) {
        Value::Undefined => 1.0,
        other => to_integer(&other),
    };
    let mut out = Vec::new();
    flatten_into(interp, &items.borrow().clone(), depth, 0, &mut out)?;
    Ok(interp.new_array(out))
}

fn flatten_into(
    interp: &mut Interpreter,
    items: &[Value],
    depth: f64,
    nesting: usize,
    out: &mut Vec<Value>,
) -> Result<(), ExecError> {
    if nesting > MAX_FLAT_DEPTH {
        return Err(interp.throw("RangeError", "Maximum call stack size exceeded"));
    }
    for item in items {
        match item {
            Value::Array(inner) if depth >= 1.0 => {
                let inner = inner.borrow().clone();
                flatten_into(interp, &inner, depth - 1.0, nesting + 1, out)?;
            }
            other => {
                out.push(other.clone());
                interp.check_array_len(out.len())?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Iteration with callbacks
// ---------------------------------------------------------------------------

fn for_each(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "forEach")?;
    let callee = callback(interp, args)?;
    for i in 0..len_of(&items) {
        visit(interp, &callee, args, this, item_at(&items, i), i)?;
    }
    Ok(Value::Undefined)
}

fn map(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "map")?;
    let callee = callback(interp, args)?;
    let len = len_of(&items);
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        out.push(visit(interp, &callee, args, this, item_at(&items, i), i)?);
    }
    Ok(interp.new_array(out))
}

fn filter(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "filter")?;
    let callee = callback(interp, args)?;
    let mut out = Vec::new();
    for i in 0..len_of(&items) {
        let item = item_at(&items, i);
        if visit(interp, &callee, args, this, item.clone(), i)?.truthy() {
            out.push(item);
        }
    }
    Ok(interp.new_array(out))
}

fn flat_map(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "flatMap")?;
    let callee = callback(interp, args)?;
    let mut out = Vec::new();
    for i in 0..len_of(&items) {
        match visit(interp, &callee, args, this, item_at(&items, i), i)? {
            Value::Array(inner) => out.extend(inner.borrow().iter().cloned()),
            other => out.push(other),
        }
        interp.check_array_len(out.len())?;
    }
    Ok(interp.new_array(out))
}

/// First `(index, item)` the predicate accepts, scanning forward or
/// backward.
fn search(
    interp: &mut Interpreter,
    this: &Value,
    args: &[Value],
    method: &str,
    backward: bool,
) -> Result<Option<(usize, Value)>, ExecError> {
    let items = this_array(interp, this, method)?;
    let callee = callback(interp, args)?;
    let len = len_of(&items);
    let order: Box<dyn Iterator<Item = usize>> = if backward { Box::new((0..len).rev()) } else { Box::new(0..len) };
    for i in order {
        let item = item_at(&items, i);
        if visit(interp, &callee, args, this, item.clone(), i)?.truthy() {
            return Ok(Some((i, item)));
        }
    }
    Ok(None)
}

fn find(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(search(interp, this, args, "find", false)?.map(|(_, v)| v).unwrap_or_default())
}

fn find_index(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(search(interp, this, args, "findIndex", false)?.map_or(Value::Number(-1.0), |(i, _)| number(i)))
}

fn find_last(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(search(interp, this, args, "findLast", true)?.map(|(_, v)| v).unwrap_or_default())
}

fn find_last_index(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(search(interp, this, args, "findLastIndex", true)?.map_or(Value::Number(-1.0), |(i, _)| number(i)))
}

fn some(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(search(interp, this, args, "some", false)?.is_some()))
}

fn every(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let items = this_array(interp, this, "every")?;
    let callee = callback(interp, args)?;
    for i in 0..len_of(&items) {
        if !visit(interp, &callee, args, this, item_at(&items, i), i)?.truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn reduce(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    fold(interp, this, args, "reduce", false)
}

fn reduce_right(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    fold(interp, this, args, "reduceRight", true)
}

fn fold(interp: &mut Interpreter, this: &Value, args: &[Value], method: &str, backward: bool) -> Result<Value, ExecError> {
    let items = this_array(interp, this, method)?;
    let callee = callback(interp, args)?;
    let len = len_of(&items);
    let mut order: Box<dyn Iterator<Item = usize>> = if backward { Box::new((0..len).rev()) } else { Box::new(0..len) };

    let mut acc = match args.get(1) {
        Some(initial) => initial.clone(),
        None => match order.next() {
            Some(i) => item_at(&items, i),
            None => return Err(interp.type_error("Reduce of empty array with no initial value")),
        },
    };
    for i in order {
        let call_args = vec![acc, item_at(&items, i), number(i), this.clone()];
        acc = interp.call_value(&callee, Value::Undefined, call_args)?;
    }
    Ok(acc)
}

// ---------------------------------------------------------------------------
// Statics
// ---------------------------------------------------------------------------

fn is_array(_interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Bool(matches!(arg(args, 0), Value::Array(_))))
}

fn of(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    Ok(interp.new_array(args.to_vec()))
}

/// `Array.from(iterable | { length }, mapFn?)`
fn from(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let source = arg(args, 0);
    let mut items = match &source {
        Value::Array(_) | Value::Str(_) => interp.iterate(&source, Span::default())?,
        Value::Object(_) => {
            let len = to_integer(&interp.get_property(&source, &Key::from_name("length".into()))?).max(0.0) as usize;
            interp.check_array_len(len)?;
            let mut items = Vec::with_capacity(len);
            for i in 0..len {
                items.push(interp.get_property(&source, &Key::Index(i))?);
            }
            items
        }
        Value::Undefined | Value::Null => {
            return Err(interp.type_error(format!("{} is not iterable", to_text(&source))));
        }
        _ => Vec::new(),
    };

    let mapper = arg(args, 1);
    if !matches!(mapper, Value::Undefined) {
        for (i, item) in items.iter_mut().enumerate() {
            let value = std::mem::take(item);
            *item = interp.call_value(&mapper, Value::Undefined, vec![value, number(i)])?;
        }
    }
    Ok(interp.new_array(items))
}

#[cfg(test)]
#[path = "array_tests.rs"]
mod tests;
