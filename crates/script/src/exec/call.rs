// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closures, calls, and `new`.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::ast::{FunctionBody, FunctionNode};
use crate::normalize::to_text;
use crate::value::{Closure, Function, Object, ObjectClass, Value};
use crate::Span;

use super::error::ExecError;
use super::interp::Interpreter;
use super::pattern::BindMode;
use super::scope::{Scope, ScopeRef};
use super::stmt::Flow;

impl Interpreter {
    /// Create a closure over `scope`.
    pub(crate) fn make_closure(&mut self, node: &Rc<FunctionNode>, scope: &ScopeRef) -> Value {
        self.track_scope(scope);
        Value::Function(Rc::new(Function::Closure(Closure { node: node.clone(), env: scope.clone() })))
    }

    /// Call any value, failing with a `TypeError` for non-functions. Used by
    /// built-ins that take callbacks.
    pub(crate) fn call_value(&mut self, callee: &Value, this: Value, args: Vec<Value>) -> Result<Value, ExecError> {
        match callee {
            Value::Function(func) => self.call_function(func, this, args),
            other => {
                let message = format!("{} is not a function", to_text(other));
                Err(self.type_error(message))
            }
        }
    }

    pub(crate) fn call_function(&mut self, func: &Rc<Function>, this: Value, args: Vec<Value>) -> Result<Value, ExecError> {
        self.enter_call()?;
        let result = match func.as_ref() {
            Function::Native(native) => {
                let this = native.bound_this.as_ref().unwrap_or(&this);
                (native.func)(self, this, &args)
            }
            Function::Closure(closure) => self.call_closure(func, closure, this, args),
        };
        self.leave_call();
        result
    }

    fn call_closure(
        &mut self,
        func: &Rc<Function>,
        closure: &Closure,
        this: Value,
        args: Vec<Value>,
    ) -> Result<Value, ExecError> {
        let node = &closure.node;
        // Arrow functions take `this` from their defining scope.
        let this = if node.is_arrow { None } else { Some(this) };
        let scope = Scope::function(&closure.env, this);

        // A named function expression can refer to itself by name.
        if let (Some(name), false) = (&node.name, node.is_arrow) {
            scope.borrow_mut().declare(name.clone(), Some(Value::Function(func.clone())), true);
        }

        let mut args = args.into_iter();
        for param in &node.params {
            let value = if param.rest {
                let rest: Vec<Value> = args.by_ref().collect();
                self.new_array(rest)
            } else {
                let value = args.next().unwrap_or_default();
                match (&value, &param.default) {
                    (Value::Undefined, Some(default)) => self.eval_expr(default, &scope)?,
                    _ => value,
                }
            };
            self.bind_pattern(&param.target, value, BindMode::Let, &scope)?;
        }

        match &node.body {
            FunctionBody::Expr(expr) => self.eval_expr(expr, &scope),
            FunctionBody::Block(block) => {
                self.hoist_declarations(&block.body, &scope, true);
                for stmt in &block.body {
                    match self.exec_stmt(stmt, &scope)? {
                        Flow::Normal => {}
                        Flow::Return(value) => return Ok(value),
                        // `break`/`continue` outside a loop are ignored.
                        Flow::Break | Flow::Continue => {}
                    }
                }
                Ok(Value::Undefined)
            }
        }
    }

    /// `new callee(...args)`
    pub(crate) fn construct(&mut self, callee: &Value, args: Vec<Value>, callee_span: Span) -> Result<Value, ExecError> {
        let Value::Function(func) = callee else {
            let message = format!("{} is not a constructor", self.snippet(callee_span));
            return Err(self.type_error(message));
        };
        match func.as_ref() {
            // Built-in constructors behave the same with or without `new`.
            Function::Native(_) => self.call_function(func, Value::Undefined, args),
            Function::Closure(closure) if closure.node.is_arrow => {
                let message = format!("{} is not a constructor", self.snippet(callee_span));
                Err(self.type_error(message))
            }
            Function::Closure(_) => {
                let constructor = Rc::as_ptr(func) as *const () as usize;
                let instance = self.new_object(Object { class: ObjectClass::Instance { constructor }, props: IndexMap::new() });
                let result = self.call_function(func, instance.clone(), args)?;
                Ok(match result {
                    Value::Object(_) | Value::Array(_) | Value::Function(_) => result,
                    _ => instance,
                })
            }
        }
    }
}
