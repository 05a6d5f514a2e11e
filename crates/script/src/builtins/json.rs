// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `JSON.stringify` and `JSON.parse`.

use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::error::Category;

use crate::exec::ops::{to_integer, to_number};
use crate::exec::{ExecError, Interpreter};
use crate::normalize::{format_number, to_text};
use crate::value::{Object, Value};

use super::arg;

/// Nesting beyond this throws instead of exhausting the native stack.
const MAX_NESTING: usize = 10_000;

pub(super) fn install(interp: &mut Interpreter) -> Value {
    super::namespace(interp, &[("stringify", 3, stringify), ("parse", 2, parse)])
}

// ---------------------------------------------------------------------------
// stringify
// ---------------------------------------------------------------------------

fn stringify(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let indent = match arg(args, 2) {
        Value::Number(_) => " ".repeat(to_integer(&arg(args, 2)).clamp(0.0, 10.0) as usize),
        Value::Str(s) => s.chars().take(10).collect(),
        _ => String::new(),
    };
    let mut writer = JsonWriter { indent, stack: Vec::new() };
    match writer.write(interp, &arg(args, 0))? {
        Some(text) => interp.new_string(text),
        None => Ok(Value::Undefined),
    }
}

struct JsonWriter {
    indent: String,
    /// Identities of the arrays and objects being written, for cycle
    /// detection.
    stack: Vec<usize>,
}

impl JsonWriter {
    /// JSON text of `value`, or `None` for values JSON omits (`undefined`,
    /// functions).
    fn write(&mut self, interp: &mut Interpreter, value: &Value) -> Result<Option<String>, ExecError> {
        Ok(Some(match value {
            Value::Undefined | Value::Function(_) => return Ok(None),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) if n.is_finite() => format_number(*n),
            Value::Number(_) => "null".to_string(),
            Value::Str(s) => quote(s),
            Value::Array(items) => {
                self.enter(interp, value)?;
                let items = items.borrow().clone();
                let mut parts = Vec::with_capacity(items.len());
                for item in &items {
                    parts.push(self.write(interp, item)?.unwrap_or_else(|| "null".to_string()));
                }
                self.stack.pop();
                self.wrap('[', parts, ']')
            }
            Value::Object(obj) => {
                self.enter(interp, value)?;
                let entries: Vec<(Rc<str>, Value)> = {
                    let obj = obj.borrow();
                    obj.keys().into_iter().filter_map(|k| obj.props.get(&k).map(|v| (k, v.clone()))).collect()
                };
                let separator = if self.indent.is_empty() { ":" } else { ": " };
                let mut parts = Vec::with_capacity(entries.len());
                for (key, item) in &entries {
                    if let Some(text) = self.write(interp, item)? {
                        parts.push(format!("{}{}{}", quote(key), separator, text));
                    }
                }
                self.stack.pop();
                self.wrap('{', parts, '}')
            }
        }))
    }

    fn enter(&mut self, interp: &mut Interpreter, value: &Value) -> Result<(), ExecError> {
        let id = value.ref_id().unwrap_or_default();
        if self.stack.contains(&id) {
            return Err(interp.type_error("Converting circular structure to JSON"));
        }
        if self.stack.len() >= MAX_NESTING {
            return Err(interp.throw("RangeError", "Maximum call stack size exceeded"));
        }
        interp.tick()?;
        self.stack.push(id);
        Ok(())
    }

    fn wrap(&self, open: char, parts: Vec<String>, close: char) -> String {
        if parts.is_empty() {
            return format!("{}{}", open, close);
        }
        if self.indent.is_empty() {
            return format!("{}{}{}", open, parts.join(","), close);
        }
        // Called after popping, so the stack depth is this value's depth.
        let outer = self.indent.repeat(self.stack.len());
        let inner = format!("{}{}", outer, self.indent);
        let body = parts.join(&format!(",\n{}", inner));
        format!("{}\n{}{}\n{}{}", open, inner, body, outer, close)
    }
}

/// JSON string literal.
fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

fn parse(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let text = to_text(&arg(args, 0));
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(json) => Ok(from_json(interp, json)),
        Err(e) if e.classify() == Category::Eof => Err(interp.throw("SyntaxError", "Unexpected end of JSON input")),
        Err(e) => {
            let message = format!("Unexpected token in JSON at line {} column {}", e.line(), e.column());
            Err(interp.throw("SyntaxError", message))
        }
    }
}

fn from_json(interp: &mut Interpreter, json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_else(|| to_number(&Value::str(n.to_string())))),
        serde_json::Value::String(s) => Value::str(s),
        serde_json::Value::Array(items) => {
            let items = items.into_iter().map(|item| from_json(interp, item)).collect();
            interp.new_array(items)
        }
        serde_json::Value::Object(map) => {
            let mut props = IndexMap::with_capacity(map.len());
            for (key, item) in map {
                let item = from_json(interp, item);
                props.insert(Rc::from(key), item);
            }
            interp.new_object(Object::plain(props))
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
