// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration hoisting.
//!
//! On entry to a scope, `let`/`const` names are declared uninitialized,
//! function declarations are bound to their closures, and (for function
//! scopes) every nested `var` is declared as `undefined`.

use std::rc::Rc;

use crate::ast::{DeclKind, ForBinding, ForInit, Stmt};
use crate::value::Value;

use super::interp::Interpreter;
use super::scope::ScopeRef;

impl Interpreter {
    pub(crate) fn hoist_declarations(&mut self, body: &[Stmt], scope: &ScopeRef, function_scope: bool) {
        if function_scope {
            let mut names = Vec::new();
            collect_var_names(body, &mut names);
            let mut s = scope.borrow_mut();
            for name in names {
                if !s.has_own(&name) {
                    s.declare(name, Some(Value::Undefined), true);
                }
            }
        }

        for stmt in body {
            match stmt {
                Stmt::Var(decl) if decl.kind.is_lexical() => {
                    let mutable = decl.kind == DeclKind::Let;
                    let mut s = scope.borrow_mut();
                    for declarator in &decl.declarators {
                        for name in declarator.target.bound_names() {
                            s.declare(name, None, mutable);
                        }
                    }
                }
                Stmt::Function(node) => {
                    let closure = self.make_closure(node, scope);
                    if let Some(name) = &node.name {
                        scope.borrow_mut().declare(name.clone(), Some(closure), true);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Every `var`-declared name in `body`, without descending into nested
/// functions.
fn collect_var_names(body: &[Stmt], names: &mut Vec<Rc<str>>) {
    for stmt in body {
        collect_stmt(stmt, names);
    }
}

fn collect_stmt(stmt: &Stmt, names: &mut Vec<Rc<str>>) {
    match stmt {
        Stmt::Var(decl) if decl.kind == DeclKind::Var => {
            for declarator in &decl.declarators {
                names.extend(declarator.target.bound_names());
            }
        }
        Stmt::Block(block) => collect_var_names(&block.body, names),
        Stmt::If { consequent, alternate, .. } => {
            collect_stmt(consequent, names);
            if let Some(alternate) = alternate {
                collect_stmt(alternate, names);
            }
        }
        Stmt::For { init, body, .. } => {
            if let Some(ForInit::Var(decl)) = init {
                if decl.kind == DeclKind::Var {
                    for declarator in &decl.declarators {
                        names.extend(declarator.target.bound_names());
                    }
                }
            }
            collect_stmt(body, names);
        }
        Stmt::ForEach { binding, body, .. } => {
            if let ForBinding::Decl { kind: DeclKind::Var, target } = binding {
                names.extend(target.bound_names());
            }
            collect_stmt(body, names);
        }
        Stmt::While { body, .. } | Stmt::DoWhile { body, .. } => collect_stmt(body, names),
        Stmt::Switch { cases, .. } => {
            for case in cases {
                collect_var_names(&case.body, names);
            }
        }
        Stmt::Try { block, handler, finalizer, .. } => {
            collect_var_names(&block.body, names);
            if let Some(handler) = handler {
                collect_var_names(&handler.body.body, names);
            }
            if let Some(finalizer) = finalizer {
                collect_var_names(&finalizer.body, names);
            }
        }
        _ => {}
    }
}
