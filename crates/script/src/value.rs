// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime values.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ast::FunctionNode;
use crate::exec::{ExecError, Interpreter, ScopeRef};

pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
pub type ObjectRef = Rc<RefCell<Object>>;

/// Built-in function body. Receives the interpreter, the `this` value and
/// the evaluated arguments.
pub type NativeFn = fn(&mut Interpreter, &Value, &[Value]) -> Result<Value, ExecError>;

/// A script value. Arrays, objects and functions are shared references.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Array(ArrayRef),
    Object(ObjectRef),
    Function(Rc<Function>),
}

impl Value {
    pub fn str(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    pub fn object(object: Object) -> Self {
        Value::Object(Rc::new(RefCell::new(object)))
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// JavaScript truthiness.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Result of the `typeof` operator.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
        }
    }

    /// True for objects created by the error constructors.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Object(obj) if matches!(obj.borrow().class, ObjectClass::Error { .. }))
    }

    /// Identity for reference values, used for cycle detection.
    pub(crate) fn ref_id(&self) -> Option<usize> {
        match self {
            Value::Array(a) => Some(Rc::as_ptr(a) as *const () as usize),
            Value::Object(o) => Some(Rc::as_ptr(o) as *const () as usize),
            Value::Function(f) => Some(Rc::as_ptr(f) as *const () as usize),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

/// Shallow debug form; reference values may be cyclic.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(a) => write!(f, "Array(len={})", a.try_borrow().map(|a| a.len()).unwrap_or(0)),
            Value::Object(o) => match o.try_borrow() {
                Ok(obj) => write!(f, "Object({:?}, keys={})", obj.class, obj.props.len()),
                Err(_) => write!(f, "Object(..)"),
            },
            Value::Function(func) => write!(f, "Function({})", func.name()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Object {
    pub class: ObjectClass,
    pub props: IndexMap<Rc<str>, Value>,
}

impl Object {
    pub fn plain(props: IndexMap<Rc<str>, Value>) -> Self {
        Self { class: ObjectClass::Plain, props }
    }

    pub fn error(name: &str, message: &str) -> Self {
        Self {
            class: ObjectClass::Error { name: name.into(), message: message.into() },
            props: IndexMap::new(),
        }
    }

    /// Own property, falling back to the fields an object's class carries.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.props.get(key) {
            return Some(value.clone());
        }
        match (&self.class, key) {
            (ObjectClass::Error { name, .. }, "name") => Some(Value::Str(name.clone())),
            (ObjectClass::Error { message, .. }, "message") => Some(Value::Str(message.clone())),
            _ => None,
        }
    }

    /// Enumerable keys: integer-like keys ascending, then insertion order.
    pub fn keys(&self) -> Vec<Rc<str>> {
        let mut indices: Vec<(u32, Rc<str>)> = Vec::new();
        let mut names = Vec::new();
        for key in self.props.keys() {
            match array_index(key) {
                Some(i) => indices.push((i, key.clone())),
                None => names.push(key.clone()),
            }
        }
        indices.sort_by_key(|(i, _)| *i);
        indices.into_iter().map(|(_, k)| k).chain(names).collect()
    }
}

/// Canonical array index (`"0"`, `"17"`), rejecting `"01"` and `"-1"`.
pub fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|i| *i != u32::MAX)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ObjectClass {
    #[default]
    Plain,
    /// Created by `Error`, `TypeError`, ...; `name` and `message` are
    /// readable but not enumerable.
    Error { name: Rc<str>, message: Rc<str> },
    /// Created by `new` on a script function.
    Instance { constructor: usize },
}

pub enum Function {
    /// A function defined in script, closing over its defining scope.
    Closure(Closure),
    Native(NativeFunction),
}

impl Function {
    pub fn name(&self) -> &str {
        match self {
            Function::Closure(c) => c.node.name.as_deref().unwrap_or(""),
            Function::Native(n) => n.name,
        }
    }

    /// Declared parameter count, as reported by `fn.length`.
    pub fn arity(&self) -> usize {
        match self {
            Function::Closure(c) => c.node.params.iter().take_while(|p| p.default.is_none() && !p.rest).count(),
            Function::Native(n) => n.arity,
        }
    }
}

pub struct Closure {
    pub node: Rc<FunctionNode>,
    pub env: ScopeRef,
}

pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
    /// Receiver captured when a method is read off a value (`arr.push`).
    pub bound_this: Option<Value>,
}

impl NativeFunction {
    pub fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Self { name, arity, func, bound_this: None }
    }

    pub fn bound(name: &'static str, func: NativeFn, this: Value) -> Self {
        Self { name, arity: 0, func, bound_this: Some(this) }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
