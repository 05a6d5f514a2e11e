// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statement execution.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::*;
use crate::value::Value;

use super::error::{ExecError, ThrowOrigin};
use super::interp::Interpreter;
use super::ops::strict_equals;
use super::pattern::BindMode;
use super::scope::{Scope, ScopeRef};

/// Completion of a statement.
#[derive(Debug)]
pub(crate) enum Flow {
    Normal,
    Return(Value),
    Break,
    Continue,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

impl Interpreter {
    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt, scope: &ScopeRef) -> Result<Flow, ExecError> {
        match stmt {
            Stmt::Var(decl) => {
                self.exec_var_decl(decl, scope)?;
                Ok(Flow::Normal)
            }
            // Hoisted on scope entry
            Stmt::Function(_) | Stmt::Empty(_) => Ok(Flow::Normal),
            Stmt::Expr(expr) => {
                self.eval_expr(expr, scope)?;
                Ok(Flow::Normal)
            }
            Stmt::Block(block) => self.exec_block(block, scope),
            Stmt::If { test, consequent, alternate, .. } => {
                if self.eval_expr(test, scope)?.truthy() {
                    self.exec_stmt(consequent, scope)
                } else if let Some(alternate) = alternate {
                    self.exec_stmt(alternate, scope)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::For { init, test, update, body, .. } => {
                self.exec_for(init.as_ref(), test.as_ref(), update.as_ref(), body, scope)
            }
            Stmt::ForEach { kind, binding, iterable, body, span } => {
                self.exec_for_each(*kind, binding, iterable, body, *span, scope)
            }
            Stmt::While { test, body, .. } => {
                loop {
                    self.tick()?;
                    if !self.eval_expr(test, scope)?.truthy() {
                        break;
                    }
                    match self.exec_stmt(body, scope)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Normal | Flow::Continue => {}
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::DoWhile { body, test, .. } => {
                loop {
                    self.tick()?;
                    match self.exec_stmt(body, scope)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Normal | Flow::Continue => {}
                    }
                    if !self.eval_expr(test, scope)?.truthy() {
                        break;
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Switch { discriminant, cases, .. } => self.exec_switch(discriminant, cases, scope),
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, scope)?,
                    None => Value::Undefined,
                };
                Ok(Flow::Return(value))
            }
            Stmt::Break(_) => Ok(Flow::Break),
            Stmt::Continue(_) => Ok(Flow::Continue),
            Stmt::Throw { value, span } => {
                let value = self.eval_expr(value, scope)?;
                Err(ExecError::Thrown { value, span: *span, origin: ThrowOrigin::Script })
            }
            Stmt::Try { block, handler, finalizer, .. } => {
                self.exec_try(block, handler.as_ref(), finalizer.as_ref(), scope)
            }
        }
    }

    pub(crate) fn exec_block(&mut self, block: &Block, scope: &ScopeRef) -> Result<Flow, ExecError> {
        let inner = Scope::block(scope);
        self.exec_body(&block.body, &inner)
    }

    /// Run statements in an already-created scope, hoisting block-level
    /// declarations first.
    pub(crate) fn exec_body(&mut self, body: &[Stmt], scope: &ScopeRef) -> Result<Flow, ExecError> {
        self.hoist_declarations(body, scope, false);
        for stmt in body {
            match self.exec_stmt(stmt, scope)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_var_decl(&mut self, decl: &VarDecl, scope: &ScopeRef) -> Result<(), ExecError> {
        let mode = BindMode::for_decl(decl.kind);
        for declarator in &decl.declarators {
            let value = match &declarator.init {
                Some(init) => self.eval_expr(init, scope)?,
                // `var x;` leaves an existing value alone
                None if decl.kind == DeclKind::Var => continue,
                None => Value::Undefined,
            };
            self.bind_pattern(&declarator.target, value, mode, scope)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Loops
    // -----------------------------------------------------------------------

    fn exec_for(
        &mut self,
        init: Option<&ForInit>,
        test: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
        scope: &ScopeRef,
    ) -> Result<Flow, ExecError> {
        let loop_scope = Scope::block(scope);
        let mut per_iteration = false;
        match init {
            Some(ForInit::Var(decl)) => {
                per_iteration = decl.kind.is_lexical();
                if per_iteration {
                    let mutable = decl.kind == DeclKind::Let;
                    let mut s = loop_scope.borrow_mut();
                    for declarator in &decl.declarators {
                        for name in declarator.target.bound_names() {
                            s.declare(name, None, mutable);
                        }
                    }
                }
                self.exec_var_decl(decl, &loop_scope)?;
            }
            Some(ForInit::Expr(expr)) => {
                self.eval_expr(expr, &loop_scope)?;
            }
            None => {}
        }

        // Each iteration of a `let` loop gets a fresh copy of the loop
        // bindings, so closures created in the body keep their own value.
        let mut iter_scope = if per_iteration { copy_scope(&loop_scope) } else { loop_scope };
        loop {
            self.tick()?;
            if let Some(test) = test {
                if !self.eval_expr(test, &iter_scope)?.truthy() {
                    break;
                }
            }
            match self.exec_stmt(body, &iter_scope)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal | Flow::Continue => {}
            }
            if per_iteration {
                iter_scope = copy_scope(&iter_scope);
            }
            if let Some(update) = update {
                self.eval_expr(update, &iter_scope)?;
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_for_each(
        &mut self,
        kind: ForEachKind,
        binding: &ForBinding,
        iterable: &Expr,
        body: &Stmt,
        span: crate::Span,
        scope: &ScopeRef,
    ) -> Result<Flow, ExecError> {
        let source = self.eval_expr(iterable, scope)?;
        let items = match kind {
            ForEachKind::Of => self.iterate(&source, iterable.span())?,
            ForEachKind::In => self.enumerate_keys(&source).into_iter().map(Value::Str).collect(),
        };

        for item in items {
            self.tick()?;
            let iter_scope = Scope::block(scope);
            match binding {
                ForBinding::Decl { kind, target } => {
                    let mode = BindMode::for_decl(*kind);
                    self.bind_pattern(target, item, mode, &iter_scope).map_err(|e| e.at(span))?;
                }
                ForBinding::Assign(target) => {
                    self.bind_pattern(target, item, BindMode::Assign, &iter_scope).map_err(|e| e.at(span))?;
                }
            }
            match self.exec_stmt(body, &iter_scope)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal | Flow::Continue => {}
            }
        }
        Ok(Flow::Normal)
    }

    // -----------------------------------------------------------------------
    // Switch and try
    // -----------------------------------------------------------------------

    fn exec_switch(&mut self, discriminant: &Expr, cases: &[SwitchCase], scope: &ScopeRef) -> Result<Flow, ExecError> {
        let value = self.eval_expr(discriminant, scope)?;
        let switch_scope = Scope::block(scope);
        for case in cases {
            self.hoist_declarations(&case.body, &switch_scope, false);
        }

        let mut start = None;
        for (i, case) in cases.iter().enumerate() {
            if let Some(test) = &case.test {
                let candidate = self.eval_expr(test, &switch_scope)?;
                if strict_equals(&value, &candidate) {
                    start = Some(i);
                    break;
                }
            }
        }
        let start = start.or_else(|| cases.iter().position(|c| c.test.is_none()));
        let Some(start) = start else {
            return Ok(Flow::Normal);
        };

        for case in &cases[start..] {
            for stmt in &case.body {
                match self.exec_stmt(stmt, &switch_scope)? {
                    Flow::Normal => {}
                    Flow::Break => return Ok(Flow::Normal),
                    flow => return Ok(flow),
                }
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_try(
        &mut self,
        block: &Block,
        handler: Option<&CatchClause>,
        finalizer: Option<&Block>,
        scope: &ScopeRef,
    ) -> Result<Flow, ExecError> {
        let mut result = self.exec_block(block, scope);

        if let Some(handler) = handler {
            if let Err(ExecError::Thrown { value, .. }) = result {
                let catch_scope = Scope::block(scope);
                result = match &handler.param {
                    Some(param) => self
                        .bind_pattern(param, value, BindMode::Let, &catch_scope)
                        .and_then(|()| self.exec_body(&handler.body.body, &catch_scope)),
                    None => self.exec_body(&handler.body.body, &catch_scope),
                };
            }
        }

        // Termination (timeouts, output limit) skips `finally`.
        if let Err(e) = &result {
            if !e.is_catchable() {
                return result;
            }
        }

        if let Some(finalizer) = finalizer {
            match self.exec_block(finalizer, scope)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        result
    }
}

fn copy_scope(scope: &ScopeRef) -> ScopeRef {
    Rc::new(RefCell::new(scope.borrow().copy_bindings()))
}
