// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property access, iteration, and the `in`/`instanceof`/`delete`
//! operators.

use std::rc::Rc;

use crate::builtins;
use crate::normalize::{format_number, to_text};
use crate::value::{array_index, Function, NativeFunction, ObjectClass, Value};
use crate::Span;

use super::error::ExecError;
use super::interp::Interpreter;
use super::ops::to_number;

/// A property key: array indices stay numeric to avoid string round-trips.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Key {
    Index(usize),
    Name(Rc<str>),
}

impl Key {
    pub(crate) fn from_value(value: &Value) -> Key {
        match value {
            Value::Number(n) if *n >= 0.0 && n.fract() == 0.0 && *n < u32::MAX as f64 => Key::Index(*n as usize),
            Value::Str(s) => Key::from_name(s.clone()),
            other => Key::from_name(to_text(other).into()),
        }
    }

    pub(crate) fn from_name(name: Rc<str>) -> Key {
        match array_index(&name) {
            Some(i) => Key::Index(i as usize),
            None => Key::Name(name),
        }
    }

    pub(crate) fn text(&self) -> Rc<str> {
        match self {
            Key::Index(i) => i.to_string().into(),
            Key::Name(name) => name.clone(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }
}

impl Interpreter {
    /// `value[key]`
    pub(crate) fn get_property(&mut self, value: &Value, key: &Key) -> Result<Value, ExecError> {
        match value {
            Value::Undefined | Value::Null => {
                let message = format!(
                    "Cannot read properties of {} (reading '{}')",
                    to_text(value),
                    key.text()
                );
                Err(self.type_error(message))
            }
            Value::Str(s) => Ok(match key {
                Key::Index(i) => s.chars().nth(*i).map(|c| Value::str(c.to_string())).unwrap_or_default(),
                Key::Name(name) if name.as_ref() == "length" => Value::Number(s.chars().count() as f64),
                Key::Name(name) => bound_method(builtins::string::method(name), value),
            }),
            Value::Number(_) => Ok(match key.name() {
                Some(name) => bound_method(builtins::number::method(name), value),
                None => Value::Undefined,
            }),
            Value::Bool(_) => Ok(match key.name() {
                Some("toString") => bound_method(builtins::object::method("toString"), value),
                _ => Value::Undefined,
            }),
            Value::Array(items) => Ok(match key {
                Key::Index(i) => items.borrow().get(*i).cloned().unwrap_or_default(),
                Key::Name(name) if name.as_ref() == "length" => Value::Number(items.borrow().len() as f64),
                Key::Name(name) => bound_method(builtins::array::method(name), value),
            }),
            Value::Object(obj) => {
                let own = obj.borrow().get(&key.text());
                Ok(match own {
                    Some(v) => v,
                    None => match key.name() {
                        Some(name) => bound_method(builtins::object::method(name), value),
                        None => Value::Undefined,
                    },
                })
            }
            Value::Function(func) => Ok(match key.name() {
                Some("name") => Value::str(func.name()),
                Some("length") => Value::Number(func.arity() as f64),
                Some(name) => match func.as_ref() {
                    Function::Native(native) => builtins::static_member(native.name, name),
                    Function::Closure(_) => Value::Undefined,
                },
                None => Value::Undefined,
            }),
        }
    }

    /// `value[key] = item`
    pub(crate) fn set_property(&mut self, target: &Value, key: Key, item: Value) -> Result<(), ExecError> {
        match target {
            Value::Undefined | Value::Null => {
                let message = format!(
                    "Cannot set properties of {} (setting '{}')",
                    to_text(target),
                    key.text()
                );
                Err(self.type_error(message))
            }
            Value::Array(items) => match key {
                Key::Index(i) => {
                    let len = items.borrow().len();
                    if i >= len {
                        self.check_array_len(i + 1)?;
                        items.borrow_mut().resize(i + 1, Value::Undefined);
                    }
                    items.borrow_mut()[i] = item;
                    Ok(())
                }
                Key::Name(name) if name.as_ref() == "length" => {
                    let n = to_number(&item);
                    if n < 0.0 || n.fract() != 0.0 || n.is_nan() {
                        return Err(self.throw("RangeError", "Invalid array length"));
                    }
                    let n = n as usize;
                    self.check_array_len(n)?;
                    items.borrow_mut().resize(n, Value::Undefined);
                    Ok(())
                }
                // Named properties on arrays are not tracked.
                Key::Name(_) => Ok(()),
            },
            Value::Object(obj) => {
                obj.borrow_mut().props.insert(key.text(), item);
                Ok(())
            }
            // Writes to primitives and functions are dropped, as in sloppy
            // mode JavaScript.
            _ => Ok(()),
        }
    }

    /// `delete value[key]`
    pub(crate) fn delete_property(&mut self, target: &Value, key: &Key) -> Result<bool, ExecError> {
        match target {
            Value::Undefined | Value::Null => {
                let message = format!("Cannot convert undefined or null to object (deleting '{}')", key.text());
                Err(self.type_error(message))
            }
            Value::Object(obj) => {
                obj.borrow_mut().props.shift_remove(key.text().as_ref());
                Ok(true)
            }
            Value::Array(items) => {
                if let Key::Index(i) = key {
                    if let Some(slot) = items.borrow_mut().get_mut(*i) {
                        *slot = Value::Undefined;
                    }
                }
                Ok(true)
            }
            _ => Ok(true),
        }
    }

    /// `key in value`
    pub(crate) fn has_property(&mut self, target: &Value, key: &Key) -> Result<bool, ExecError> {
        match target {
            Value::Object(obj) => {
                let obj = obj.borrow();
                Ok(obj.get(&key.text()).is_some())
            }
            Value::Array(items) => Ok(match key {
                Key::Index(i) => *i < items.borrow().len(),
                Key::Name(name) => name.as_ref() == "length" || builtins::array::method(name).is_some(),
            }),
            Value::Function(_) => Ok(matches!(key.name(), Some("name" | "length"))),
            other => {
                let message = format!("Cannot use 'in' operator to search for '{}' in {}", key.text(), to_text(other));
                Err(self.type_error(message))
            }
        }
    }

    /// `value instanceof constructor`
    pub(crate) fn instance_of(&mut self, value: &Value, constructor: &Value) -> Result<bool, ExecError> {
        let Value::Function(func) = constructor else {
            return Err(self.type_error("Right-hand side of 'instanceof' is not callable"));
        };
        Ok(match func.as_ref() {
            Function::Native(native) => match native.name {
                "Array" => matches!(value, Value::Array(_)),
                "Object" => matches!(value, Value::Array(_) | Value::Object(_) | Value::Function(_)),
                "Error" => value.is_error(),
                name => match value {
                    Value::Object(obj) => {
                        matches!(&obj.borrow().class, ObjectClass::Error { name: n, .. } if n.as_ref() == name)
                    }
                    _ => false,
                },
            },
            Function::Closure(_) => match value {
                Value::Object(obj) => {
                    let id = Rc::as_ptr(func) as *const () as usize;
                    obj.borrow().class == ObjectClass::Instance { constructor: id }
                }
                _ => false,
            },
        })
    }

    /// Values visited by `for...of`, spread and array destructuring.
    pub(crate) fn iterate(&mut self, value: &Value, span: Span) -> Result<Vec<Value>, ExecError> {
        match value {
            Value::Array(items) => Ok(items.borrow().clone()),
            Value::Str(s) => Ok(s.chars().map(|c| Value::str(c.to_string())).collect()),
            other => {
                let text = match other {
                    Value::Object(_) => "object".to_string(),
                    Value::Function(_) => "function".to_string(),
                    primitive => to_text(primitive),
                };
                Err(self.type_error(format!("{} is not iterable", text)).at(span))
            }
        }
    }

    /// Keys visited by `for...in` and object spread.
    pub(crate) fn enumerate_keys(&mut self, value: &Value) -> Vec<Rc<str>> {
        match value {
            Value::Object(obj) => obj.borrow().keys(),
            Value::Array(items) => (0..items.borrow().len()).map(|i| Rc::from(format_number(i as f64))).collect(),
            Value::Str(s) => (0..s.chars().count()).map(|i| Rc::from(i.to_string())).collect(),
            _ => Vec::new(),
        }
    }
}

/// A built-in method read off a value, bound to that value as `this`.
fn bound_method(method: Option<builtins::Method>, this: &Value) -> Value {
    match method {
        Some((name, func)) => {
            Value::Function(Rc::new(Function::Native(NativeFunction::bound(name, func, this.clone()))))
        }
        None => Value::Undefined,
    }
}
