// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical environments.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

pub type ScopeRef = Rc<RefCell<Scope>>;

#[derive(Debug)]
pub(crate) struct Binding {
    /// `None` until a `let`/`const` declaration runs (temporal dead zone).
    pub(crate) value: Option<Value>,
    pub(crate) mutable: bool,
}

/// Why a binding could not be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingError {
    /// No binding with that name in any enclosing scope.
    NotDefined,
    /// Declared with `let`/`const` but not yet initialized.
    Uninitialized,
    /// Write to a `const`.
    Constant,
}

#[derive(Debug, Default)]
pub struct Scope {
    vars: HashMap<Rc<str>, Binding>,
    parent: Option<ScopeRef>,
    /// `this` for function scopes. Arrow functions and blocks leave it
    /// unset so lookups reach the enclosing function.
    this: Option<Value>,
    /// Function (or global) scope: the target of `var` declarations.
    function_scope: bool,
}

impl Scope {
    pub(crate) fn global() -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            function_scope: true,
            this: Some(Value::Undefined),
            ..Scope::default()
        }))
    }

    pub(crate) fn block(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Scope { parent: Some(parent.clone()), ..Scope::default() }))
    }

    pub(crate) fn function(parent: &ScopeRef, this: Option<Value>) -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            parent: Some(parent.clone()),
            this,
            function_scope: true,
            ..Scope::default()
        }))
    }

    pub(crate) fn declare(&mut self, name: Rc<str>, value: Option<Value>, mutable: bool) {
        self.vars.insert(name, Binding { value, mutable });
    }

    pub(crate) fn has_own(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Drop every binding. Used to break closure reference cycles once a
    /// run has finished.
    pub(crate) fn clear(&mut self) {
        self.vars.clear();
        self.this = None;
        self.parent = None;
    }

    /// Copy this scope's bindings into a fresh sibling scope. `for (let ...)`
    /// loops give each iteration its own copy so closures see per-iteration
    /// values.
    pub(crate) fn copy_bindings(&self) -> Scope {
        let vars = self
            .vars
            .iter()
            .map(|(k, b)| (k.clone(), Binding { value: b.value.clone(), mutable: b.mutable }))
            .collect();
        Scope { vars, parent: self.parent.clone(), this: self.this.clone(), function_scope: self.function_scope }
    }
}

/// Walk outward from `scope` to the nearest function scope.
pub(crate) fn function_scope_of(scope: &ScopeRef) -> ScopeRef {
    let mut current = scope.clone();
    loop {
        let next = {
            let s = current.borrow();
            if s.function_scope {
                return current.clone();
            }
            match &s.parent {
                Some(parent) => parent.clone(),
                None => return current.clone(),
            }
        };
        current = next;
    }
}

pub(crate) fn lookup(scope: &ScopeRef, name: &str) -> Result<Value, BindingError> {
    let mut current = scope.clone();
    loop {
        let next = {
            let s = current.borrow();
            if let Some(binding) = s.vars.get(name) {
                return binding.value.clone().ok_or(BindingError::Uninitialized);
            }
            match &s.parent {
                Some(parent) => parent.clone(),
                None => return Err(BindingError::NotDefined),
            }
        };
        current = next;
    }
}

/// Assign to an existing binding.
pub(crate) fn assign(scope: &ScopeRef, name: &str, value: Value) -> Result<(), BindingError> {
    let mut current = scope.clone();
    loop {
        let next = {
            let mut s = current.borrow_mut();
            if let Some(binding) = s.vars.get_mut(name) {
                if binding.value.is_none() {
                    return Err(BindingError::Uninitialized);
                }
                if !binding.mutable {
                    return Err(BindingError::Constant);
                }
                binding.value = Some(value);
                return Ok(());
            }
            match &s.parent {
                Some(parent) => parent.clone(),
                None => return Err(BindingError::NotDefined),
            }
        };
        current = next;
    }
}

/// Resolve `this` from the nearest scope that defines it.
pub(crate) fn this_value(scope: &ScopeRef) -> Value {
    let mut current = scope.clone();
    loop {
        let next = {
            let s = current.borrow();
            if let Some(this) = &s.this {
                return this.clone();
            }
            match &s.parent {
                Some(parent) => parent.clone(),
                None => return Value::Undefined,
            }
        };
        current = next;
    }
}

/// True if `name` resolves anywhere in the chain.
pub(crate) fn is_declared(scope: &ScopeRef, name: &str) -> bool {
    let mut current = scope.clone();
    loop {
        let next = {
            let s = current.borrow();
            if s.vars.contains_key(name) {
                return true;
            }
            match &s.parent {
                Some(parent) => parent.clone(),
                None => return false,
            }
        };
        current = next;
    }
}
