// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter state shared by statements, expressions and built-ins.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::ast::Program;
use crate::capture::{Capture, Channel};
use crate::normalize::{write_args, Meter, Renderer};
use crate::value::{Object, Value};
use crate::Span;

use super::error::{ExecError, ThrowOrigin};
use super::scope::{Scope, ScopeRef};
use super::{MAX_ARRAY_LENGTH, MAX_STRING_BYTES};

/// How many budget ticks pass between interrupt and deadline checks.
const CHECK_INTERVAL: u32 = 1024;

/// Cooperative cancellation: loops and calls tick the budget, and every
/// [`CHECK_INTERVAL`] ticks the interrupt flag and deadline are checked.
pub(crate) struct Budget {
    interrupt: Arc<AtomicBool>,
    deadline: Option<Instant>,
    ticks: u32,
}

impl Budget {
    pub(crate) fn new(interrupt: Arc<AtomicBool>, deadline: Option<Instant>) -> Self {
        Self { interrupt, deadline, ticks: 0 }
    }

    #[inline]
    pub(crate) fn tick(&mut self) -> Result<(), ExecError> {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % CHECK_INTERVAL != 0 {
            return Ok(());
        }
        self.check()
    }

    pub(crate) fn check(&self) -> Result<(), ExecError> {
        if self.interrupt.load(Ordering::Relaxed) {
            return Err(ExecError::Interrupted);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.interrupt.store(true, Ordering::Relaxed);
            return Err(ExecError::Interrupted);
        }
        Ok(())
    }
}

/// Weak handles to everything that can take part in a reference cycle.
/// Cleared when the interpreter is dropped so cyclic garbage is released.
#[derive(Default)]
struct Heap {
    scopes: Vec<Weak<RefCell<Scope>>>,
    arrays: Vec<Weak<RefCell<Vec<Value>>>>,
    objects: Vec<Weak<RefCell<Object>>>,
    compact_at: usize,
}

impl Heap {
    fn maybe_compact(&mut self) {
        let total = self.scopes.len() + self.arrays.len() + self.objects.len();
        if total < self.compact_at.max(4096) {
            return;
        }
        self.scopes.retain(|w| w.strong_count() > 0);
        self.arrays.retain(|w| w.strong_count() > 0);
        self.objects.retain(|w| w.strong_count() > 0);
        self.compact_at = 2 * (self.scopes.len() + self.arrays.len() + self.objects.len());
    }

    /// Empties arrays oldest first, so a deeply nested array never drops
    /// recursively, then objects and scopes.
    fn release(&mut self) {
        for array in self.arrays.drain(..).filter_map(|w| w.upgrade()) {
            if let Ok(mut array) = array.try_borrow_mut() {
                array.clear();
            }
        }
        for object in self.objects.drain(..).filter_map(|w| w.upgrade()) {
            if let Ok(mut object) = object.try_borrow_mut() {
                object.props.clear();
            }
        }
        for scope in self.scopes.drain(..).filter_map(|w| w.upgrade()) {
            if let Ok(mut scope) = scope.try_borrow_mut() {
                scope.clear();
            }
        }
    }
}

/// Tree-walking interpreter for one script run.
pub struct Interpreter {
    pub(crate) global: ScopeRef,
    pub(crate) source: Rc<str>,
    capture: Capture,
    budget: Budget,
    depth: usize,
    max_depth: usize,
    heap: Heap,
}

impl Interpreter {
    pub(crate) fn new(source: &str, capture: Capture, budget: Budget, max_depth: usize) -> Self {
        let mut interp = Self {
            global: Scope::global(),
            source: source.into(),
            capture,
            budget,
            depth: 0,
            max_depth,
            heap: Heap::default(),
        };
        crate::builtins::install_globals(&mut interp);
        interp
    }

    /// Run a parsed program in the global scope.
    pub(crate) fn run_program(&mut self, program: &Program) -> Result<(), ExecError> {
        let global = self.global.clone();
        self.hoist_declarations(&program.body, &global, true);
        for stmt in &program.body {
            self.exec_stmt(stmt, &global)?;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn tick(&mut self) -> Result<(), ExecError> {
        self.budget.tick()
    }

    /// Enter a function call, enforcing the depth limit.
    pub(crate) fn enter_call(&mut self) -> Result<(), ExecError> {
        if self.depth >= self.max_depth {
            return Err(self.throw("RangeError", "Maximum call stack size exceeded"));
        }
        self.depth += 1;
        self.budget.tick()
    }

    pub(crate) fn leave_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ── Output ──────────────────────────────────────────────────────────

    pub(crate) fn print(&mut self, channel: Channel, args: &[Value]) -> Result<(), ExecError> {
        let mut line = channel.prefix().to_string();
        write_args(self, args, &mut line)?;
        self.capture.push(channel, line)?;
        Ok(())
    }

    /// `String(value)` under the run's budget and limits.
    pub(crate) fn render(&mut self, value: &Value) -> Result<String, ExecError> {
        if let Value::Str(s) = value {
            return Ok(s.to_string());
        }
        let mut out = String::new();
        Renderer::new(self).write(value, &mut out)?;
        Ok(out)
    }

    /// `array.join(separator)` under the run's budget and limits.
    pub(crate) fn render_join(&mut self, array: &Value, separator: &str) -> Result<String, ExecError> {
        let mut out = String::new();
        Renderer::new(self).write_array(array, separator, &mut out)?;
        Ok(out)
    }

    /// Primitive form of a value for `+`, rendering arrays and objects.
    pub(crate) fn primitive(&mut self, value: &Value) -> Result<Value, ExecError> {
        match value {
            Value::Array(_) | Value::Object(_) | Value::Function(_) => Ok(Value::Str(self.render(value)?.into())),
            other => Ok(other.clone()),
        }
    }

    // ── Allocation ──────────────────────────────────────────────────────

    pub(crate) fn new_array(&mut self, items: Vec<Value>) -> Value {
        let array = Rc::new(RefCell::new(items));
        self.heap.arrays.push(Rc::downgrade(&array));
        self.heap.maybe_compact();
        Value::Array(array)
    }

    pub(crate) fn new_object(&mut self, object: Object) -> Value {
        let object = Rc::new(RefCell::new(object));
        self.heap.objects.push(Rc::downgrade(&object));
        self.heap.maybe_compact();
        Value::Object(object)
    }

    /// Record a scope captured by a closure.
    pub(crate) fn track_scope(&mut self, scope: &ScopeRef) {
        self.heap.scopes.push(Rc::downgrade(scope));
        self.heap.maybe_compact();
    }

    pub(crate) fn new_string(&mut self, text: String) -> Result<Value, ExecError> {
        self.check_string_len(text.len())?;
        Ok(Value::Str(text.into()))
    }

    pub(crate) fn check_string_len(&mut self, len: usize) -> Result<(), ExecError> {
        if len > MAX_STRING_BYTES {
            return Err(self.throw("RangeError", "Invalid string length"));
        }
        Ok(())
    }

    pub(crate) fn check_array_len(&mut self, len: usize) -> Result<(), ExecError> {
        if len > MAX_ARRAY_LENGTH {
            return Err(self.throw("RangeError", "Invalid array length"));
        }
        Ok(())
    }

    // ── Errors ──────────────────────────────────────────────────────────

    pub(crate) fn error_value(&mut self, name: &str, message: &str) -> Value {
        self.new_object(Object::error(name, message))
    }

    /// Build a runtime error of the given constructor name. The span is
    /// filled in by the nearest enclosing expression.
    pub(crate) fn throw(&mut self, name: &str, message: impl AsRef<str>) -> ExecError {
        let value = self.error_value(name, message.as_ref());
        ExecError::Thrown { value, span: Span::default(), origin: ThrowOrigin::Runtime }
    }

    pub(crate) fn type_error(&mut self, message: impl AsRef<str>) -> ExecError {
        self.throw("TypeError", message)
    }

    /// Source text of an expression for error messages (`obj.run is not a
    /// function`).
    pub(crate) fn snippet(&self, span: Span) -> String {
        span.slice(&self.source).to_string()
    }
}

impl Meter for Interpreter {
    type Error = ExecError;

    fn step(&mut self) -> Result<(), ExecError> {
        self.budget.tick()
    }

    fn too_deep(&mut self) -> ExecError {
        self.throw("RangeError", "Maximum call stack size exceeded")
    }

    fn too_long(&mut self) -> ExecError {
        self.throw("RangeError", "Invalid string length")
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        self.heap.release();
        if let Ok(mut global) = self.global.try_borrow_mut() {
            global.clear();
        }
    }
}
