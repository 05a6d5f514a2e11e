// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script execution.
//!
//! [`ScriptExecutor`] parses and runs a script to completion on the current
//! thread, writing console output into a [`Capture`]. Callers that need a
//! wall-clock limit either set a deadline or raise the interrupt flag from
//! another thread; the interpreter checks both cooperatively.

mod call;
mod error;
mod expr;
mod hoist;
mod interp;
pub mod ops;
mod pattern;
mod property;
mod scope;
mod stmt;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::capture::Capture;
use crate::parser::Parser;

pub use error::{ExecError, ThrowOrigin};
pub use interp::Interpreter;
pub use scope::{Scope, ScopeRef};

pub(crate) use property::Key;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2000;

/// Arrays longer than this throw `RangeError: Invalid array length`.
pub const MAX_ARRAY_LENGTH: usize = 10_000_000;

/// Strings longer than this (in bytes) throw `RangeError: Invalid string
/// length`.
pub const MAX_STRING_BYTES: usize = 256 * 1024 * 1024;

/// Runs scripts with a capture buffer and resource limits.
///
/// ```ignore
/// let capture = Capture::new();
/// ScriptExecutor::new(capture.clone()).execute_str("console.log(1 + 1)")?;
/// assert_eq!(capture.text(), "2");
/// ```
#[derive(Debug, Clone)]
pub struct ScriptExecutor {
    capture: Capture,
    interrupt: Arc<AtomicBool>,
    timeout: Option<Duration>,
    max_call_depth: usize,
}

impl ScriptExecutor {
    pub fn new(capture: Capture) -> Self {
        Self {
            capture,
            interrupt: Arc::new(AtomicBool::new(false)),
            timeout: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Share an interrupt flag; raising it stops the script at the next
    /// check.
    pub fn interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = flag;
        self
    }

    /// Stop the script once `timeout` has elapsed from the start of
    /// [`ScriptExecutor::execute_str`].
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth.max(1);
        self
    }

    pub fn capture(&self) -> &Capture {
        &self.capture
    }

    /// Parse and run `source`.
    ///
    /// Output written before a failure stays in the capture buffer. Thrown
    /// values come back as [`ExecError::Uncaught`] with the message already
    /// rendered.
    pub fn execute_str(&self, source: &str) -> Result<(), ExecError> {
        let program = Parser::parse(source)?;
        let deadline = self.timeout.map(|t| Instant::now() + t);
        let budget = interp::Budget::new(self.interrupt.clone(), deadline);

        let mut interp = Interpreter::new(source, self.capture.clone(), budget, self.max_call_depth);
        let result = interp.run_program(&program).map_err(ExecError::detach);
        drop(interp);

        tracing::trace!(lines = self.capture.len(), ok = result.is_ok(), "script finished");
        result
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
