// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binding values to identifiers and destructuring patterns.

use indexmap::IndexMap;

use crate::ast::{DeclKind, Expr, Pattern, PropKey};
use crate::value::{Object, Value};

use super::error::ExecError;
use super::interp::Interpreter;
use super::property::Key;
use super::scope::{self, BindingError, ScopeRef};

/// How a pattern's names receive their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindMode {
    /// Create a mutable binding in the given scope (`let`, parameters,
    /// `catch` bindings).
    Let,
    /// Create an immutable binding in the given scope.
    Const,
    /// Assign to the hoisted `var`.
    Var,
    /// Plain assignment to existing bindings or members.
    Assign,
}

impl BindMode {
    pub(crate) fn for_decl(kind: DeclKind) -> Self {
        match kind {
            DeclKind::Var => BindMode::Var,
            DeclKind::Let => BindMode::Let,
            DeclKind::Const => BindMode::Const,
        }
    }
}

impl Interpreter {
    pub(crate) fn bind_pattern(
        &mut self,
        pattern: &Pattern,
        value: Value,
        mode: BindMode,
        scope: &ScopeRef,
    ) -> Result<(), ExecError> {
        match pattern {
            Pattern::Ident { name, span } => self.bind_name(name, value, mode, scope).map_err(|e| e.at(*span)),
            Pattern::Member(expr) => self.assign_member(expr, value, scope),
            Pattern::Array { elements, rest, span } => {
                let items = self.iterate(&value, *span)?;
                let mut items = items.into_iter();
                for element in elements {
                    let item = items.next().unwrap_or_default();
                    let Some(element) = element else {
                        continue;
                    };
                    let item = self.apply_default(item, element.default.as_ref(), scope)?;
                    self.bind_pattern(&element.target, item, mode, scope)?;
                }
                if let Some(rest) = rest {
                    let remaining = self.new_array(items.collect());
                    self.bind_pattern(rest, remaining, mode, scope)?;
                }
                Ok(())
            }
            Pattern::Object { props, rest, span } => {
                if value.is_nullish() {
                    let what = if matches!(value, Value::Null) { "null" } else { "undefined" };
                    let message = format!("Cannot destructure '{}' as it is {}.", what, what);
                    return Err(self.type_error(message).at(*span));
                }
                let mut used = Vec::with_capacity(props.len());
                for prop in props {
                    let key = match &prop.key {
                        PropKey::Named(name) => Key::Name(name.clone()),
                        PropKey::Computed(expr) => {
                            let key = self.eval_expr(expr, scope)?;
                            Key::from_value(&key)
                        }
                    };
                    let item = self.get_property(&value, &key).map_err(|e| e.at(*span))?;
                    used.push(key.text());
                    let item = self.apply_default(item, prop.default.as_ref(), scope)?;
                    self.bind_pattern(&prop.value, item, mode, scope)?;
                }
                if let Some(rest) = rest {
                    let mut remaining = IndexMap::new();
                    for key in self.enumerate_keys(&value) {
                        if used.contains(&key) {
                            continue;
                        }
                        let item = self.get_property(&value, &Key::Name(key.clone()))?;
                        remaining.insert(key, item);
                    }
                    let remaining = self.new_object(Object::plain(remaining));
                    self.bind_pattern(rest, remaining, mode, scope)?;
                }
                Ok(())
            }
        }
    }

    fn apply_default(&mut self, value: Value, default: Option<&Expr>, scope: &ScopeRef) -> Result<Value, ExecError> {
        match (value, default) {
            (Value::Undefined, Some(default)) => self.eval_expr(default, scope),
            (value, _) => Ok(value),
        }
    }

    fn bind_name(&mut self, name: &str, value: Value, mode: BindMode, scope: &ScopeRef) -> Result<(), ExecError> {
        match mode {
            BindMode::Let | BindMode::Const => {
                scope.borrow_mut().declare(name.into(), Some(value), mode == BindMode::Let);
                Ok(())
            }
            BindMode::Var => match scope::assign(scope, name, value.clone()) {
                Err(BindingError::NotDefined) => {
                    let function_scope = scope::function_scope_of(scope);
                    function_scope.borrow_mut().declare(name.into(), Some(value), true);
                    Ok(())
                }
                other => other.map_err(|e| self.binding_error(e, name)),
            },
            BindMode::Assign => self.assign_name(name, value, scope),
        }
    }

    /// Assignment to a plain identifier. Undeclared names become globals.
    pub(crate) fn assign_name(&mut self, name: &str, value: Value, scope: &ScopeRef) -> Result<(), ExecError> {
        match scope::assign(scope, name, value.clone()) {
            Ok(()) => Ok(()),
            Err(BindingError::NotDefined) => {
                self.global.borrow_mut().declare(name.into(), Some(value), true);
                Ok(())
            }
            Err(e) => Err(self.binding_error(e, name)),
        }
    }

    pub(crate) fn binding_error(&mut self, error: BindingError, name: &str) -> ExecError {
        match error {
            BindingError::NotDefined => self.throw("ReferenceError", format!("{} is not defined", name)),
            BindingError::Uninitialized => {
                self.throw("ReferenceError", format!("Cannot access '{}' before initialization", name))
            }
            BindingError::Constant => self.type_error("Assignment to constant variable."),
        }
    }
}
